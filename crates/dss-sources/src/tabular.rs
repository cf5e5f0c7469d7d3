//! Decoding of the shared/collected CSV exports.
//!
//! The first line is the header row. Every data row becomes a [`TableRow`]
//! holding `(header, cell)` pairs in column order. Short rows are padded with
//! empty cells and surplus cells are dropped.

use csv::ReaderBuilder;

use crate::error::SourceError;

/// One data row of a tabular export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    /// Build a row from `(header, cell)` pairs.
    #[must_use]
    pub fn new<H, V>(cells: impl IntoIterator<Item = (H, V)>) -> Self
    where
        H: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(header, value)| (header.into(), value.into()))
                .collect(),
        }
    }

    /// Cell under the first column whose header equals `header` exactly.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, value)| value.as_str())
    }

    /// All `(header, cell)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

/// Decode a CSV export with a header row.
///
/// # Errors
///
/// Returns [`SourceError::Csv`] if the reader fails, or
/// [`SourceError::Parse`] when the input has no header row.
pub fn parse_table(text: &str) -> Result<Vec<TableRow>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(SourceError::Parse("table has no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = TableRow::new(
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| (header, record.get(index).unwrap_or(""))),
        );
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn rows_keep_column_order() {
        let rows = parse_table("Applications,Location,Contacts\nAcme Chat,Y,N\n").unwrap();
        assert_eq!(rows.len(), 1);
        let cells: Vec<(&str, &str)> = rows[0].cells().collect();
        assert_eq!(
            cells,
            [
                ("Applications", "Acme Chat"),
                ("Location", "Y"),
                ("Contacts", "N")
            ]
        );
    }

    #[test]
    fn quoted_cells_and_headers_survive() {
        let rows = parse_table(
            "App Name,\"Device or other IDs\",\"Photos, videos\"\n\"Acme, Inc. Chat\",y,Y\n",
        )
        .unwrap();
        assert_eq!(rows[0].get("App Name"), Some("Acme, Inc. Chat"));
        assert_eq!(rows[0].get("Device or other IDs"), Some("y"));
        assert_eq!(rows[0].get("Photos, videos"), Some("Y"));
    }

    #[rstest]
    #[case::short_row("Acme Chat,Y\n", Some("Y"), Some(""))]
    #[case::surplus_cells("Acme Chat,Y,N,extra\n", Some("Y"), Some("N"))]
    #[case::name_only("Acme Chat\n", Some(""), Some(""))]
    fn ragged_rows_fit_the_header(
        #[case] body: &str,
        #[case] location: Option<&str>,
        #[case] contacts: Option<&str>,
    ) {
        let text = format!("Applications,Location,Contacts\n{body}");
        let rows = parse_table(&text).unwrap();
        assert_eq!(rows[0].cells().count(), 3);
        assert_eq!(rows[0].get("Location"), location);
        assert_eq!(rows[0].get("Contacts"), contacts);
    }

    #[test]
    fn empty_input_has_no_header_row() {
        assert!(matches!(parse_table(""), Err(SourceError::Parse(_))));
    }

    #[test]
    fn header_only_table_has_no_rows() {
        assert!(parse_table("Applications,Location\n").unwrap().is_empty());
    }
}
