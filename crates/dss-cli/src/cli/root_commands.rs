use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List one page of the app catalog.
    Apps(AppsArgs),
    /// Show the data safety table for an app.
    Show(ShowArgs),
    /// Resolve a data-type label against the datatype directory.
    Match(MatchArgs),
    /// Report which sources loaded and which export rows matched no app.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AppsArgs {
    /// Zero-based page index (wraps around past the last page)
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Apps per page (defaults to general.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// App name; matched against the directory like export rows are
    pub app: String,
}

#[derive(Clone, Debug, Args)]
pub struct MatchArgs {
    /// Raw data-type label, as it would appear in a CSV header
    pub label: String,
}
