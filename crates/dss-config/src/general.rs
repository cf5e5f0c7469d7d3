//! General presentation settings.

use serde::{Deserialize, Serialize};

/// Apps shown per page of the app list.
const fn default_page_size() -> usize {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Apps per page for `dss apps`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
