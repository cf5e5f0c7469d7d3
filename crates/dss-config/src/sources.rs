//! Locations of the five datasets.
//!
//! Each source is a file name or URL. Relative names are joined onto `base`,
//! which is itself a directory (relative to the project root) or a URL prefix.

use std::path::Path;

use dss_core::enums::SourceKind;
use serde::{Deserialize, Serialize};

fn default_base() -> String {
    String::from("data")
}

fn default_apps() -> String {
    String::from("Apps-icons.json")
}

fn default_arrows() -> String {
    String::from("Arrows.json")
}

fn default_datatypes() -> String {
    String::from("datatype.json")
}

fn default_shared_csv() -> String {
    String::from("Shared_Mapped (1).csv")
}

fn default_collected_csv() -> String {
    String::from("Collected_Mapped (1).csv")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Directory or URL prefix that relative source names resolve against.
    #[serde(default = "default_base")]
    pub base: String,

    /// App directory: name -> `{ icon }`.
    #[serde(default = "default_apps")]
    pub apps: String,

    /// Relation icons: `Shared` / `Collected` / `Both` -> `{ icon }`.
    #[serde(default = "default_arrows")]
    pub arrows: String,

    /// Datatype directory: label -> `{ name, icon }`.
    #[serde(default = "default_datatypes")]
    pub datatypes: String,

    /// Tabular export of shared data types.
    #[serde(default = "default_shared_csv")]
    pub shared_csv: String,

    /// Tabular export of collected data types.
    #[serde(default = "default_collected_csv")]
    pub collected_csv: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            apps: default_apps(),
            arrows: default_arrows(),
            datatypes: default_datatypes(),
            shared_csv: default_shared_csv(),
            collected_csv: default_collected_csv(),
        }
    }
}

impl SourcesConfig {
    /// Configured name for one source, before resolution.
    #[must_use]
    pub fn raw(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Apps => &self.apps,
            SourceKind::Arrows => &self.arrows,
            SourceKind::Datatypes => &self.datatypes,
            SourceKind::SharedCsv => &self.shared_csv,
            SourceKind::CollectedCsv => &self.collected_csv,
        }
    }

    /// Resolve a source to a loadable path or URL.
    ///
    /// URLs and absolute paths are returned unchanged. Anything else is joined
    /// onto `base`; a relative `base` is taken relative to `project_root`.
    #[must_use]
    pub fn locate(&self, kind: SourceKind, project_root: &Path) -> String {
        let raw = self.raw(kind);
        if is_url(raw) || Path::new(raw).is_absolute() {
            return raw.to_string();
        }
        if is_url(&self.base) {
            return format!("{}/{raw}", self.base.trim_end_matches('/'));
        }

        let base = Path::new(&self.base);
        let base = if base.is_absolute() {
            base.to_path_buf()
        } else {
            project_root.join(base)
        };
        base.join(raw).to_string_lossy().into_owned()
    }
}

fn is_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_data_directory() {
        let config = SourcesConfig::default();
        let located = config.locate(SourceKind::SharedCsv, Path::new("/srv/dss"));
        assert_eq!(
            PathBuf::from(located),
            PathBuf::from("/srv/dss/data/Shared_Mapped (1).csv")
        );
    }

    #[test]
    fn url_base_prefixes_relative_names() {
        let config = SourcesConfig {
            base: "https://cdn.example.com/dss/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.locate(SourceKind::Apps, Path::new(".")),
            "https://cdn.example.com/dss/Apps-icons.json"
        );
    }

    #[test]
    fn absolute_and_url_sources_are_untouched() {
        let config = SourcesConfig {
            arrows: "https://example.com/Arrows.json".into(),
            datatypes: "/etc/dss/datatype.json".into(),
            ..Default::default()
        };
        assert_eq!(
            config.locate(SourceKind::Arrows, Path::new("/srv")),
            "https://example.com/Arrows.json"
        );
        assert_eq!(
            config.locate(SourceKind::Datatypes, Path::new("/srv")),
            "/etc/dss/datatype.json"
        );
    }
}
