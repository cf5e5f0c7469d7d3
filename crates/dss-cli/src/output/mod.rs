use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

use table::TableOptions;

/// Render a serializable response to a string in the requested format.
///
/// Table mode lays out arrays of objects with one column per key in
/// first-seen order; single objects become a key/value table.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    options: TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, options),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the format chosen by the global flags.
pub fn output<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags.format, TableOptions::for_flags(flags))?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) => render_array_table(&items, options),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            table::render_entity_table(&["key", "value"], &rows, options)
        }
        scalar => value_to_cell(&scalar),
    };
    Ok(rendered)
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other @ Value::Object(_) => {
            serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use super::table::TableOptions;
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        icon: &'static str,
        tags: Vec<&'static str>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Acme Chat",
                icon: "acme.png",
                tags: vec!["Shared", "Collected"],
            },
            Row {
                name: "Zed Maps",
                icon: "zed.png",
                tags: Vec::new(),
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&rows(), OutputFormat::Json, PLAIN).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["name"], "Acme Chat");
        assert_eq!(parsed[1]["icon"], "zed.png");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&rows(), OutputFormat::Raw, PLAIN).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn table_columns_keep_field_order() {
        let out = render(&rows(), OutputFormat::Table, PLAIN).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let name_at = header.find("name").expect("name column");
        let icon_at = header.find("icon").expect("icon column");
        let tags_at = header.find("tags").expect("tags column");
        assert!(name_at < icon_at && icon_at < tags_at);
        assert!(out.contains("Shared, Collected"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let out = render(&Vec::<Row>::new(), OutputFormat::Table, PLAIN).expect("table render");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn scalar_renders_bare() {
        let out = render(&"No data safety details available for this app.", OutputFormat::Table, PLAIN)
            .expect("table render");
        assert_eq!(out, "No data safety details available for this app.");
    }
}
