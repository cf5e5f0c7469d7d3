use std::path::PathBuf;

use anyhow::Context;
use dss_config::DssConfig;
use dss_safety::{Catalog, LoadReport};
use dss_sources::SourceClient;

use crate::cli::GlobalFlags;
use crate::progress::Progress;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DssConfig,
    pub catalog: Catalog,
    pub report: LoadReport,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Load every source into the catalog. Individual source failures are
    /// recorded in `report`; only a client that cannot be built is fatal.
    pub async fn init(
        project_root: PathBuf,
        config: DssConfig,
        flags: &GlobalFlags,
    ) -> anyhow::Result<Self> {
        let client =
            SourceClient::new(&config.http).context("failed to initialize source client")?;

        let spinner = Progress::spinner("loading catalog sources", flags);
        let (catalog, report) = Catalog::load(&client, &config.sources, &project_root).await;
        spinner.finish_clear();

        if !report.is_complete() {
            tracing::info!(
                failed = report.failed().count(),
                "catalog loaded with missing sources; run 'dss status' for details"
            );
        }

        Ok(Self {
            config,
            catalog,
            report,
            project_root,
        })
    }
}
