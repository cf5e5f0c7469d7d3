use std::path::{Path, PathBuf};

use anyhow::Context;
use dss_config::DssConfig;

use crate::context::{PROJECT_DIR, find_project_root};

/// Pick the directory that relative source paths and `.dss/config.toml`
/// hang off.
///
/// An explicit `--project` must exist; it may name the project directory or
/// its `.dss` child. Without one, the nearest ancestor holding `.dss` wins,
/// then the current directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        return explicit_root(Path::new(path));
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}

fn explicit_root(path: &Path) -> anyhow::Result<PathBuf> {
    if path.file_name().and_then(|name| name.to_str()) == Some(PROJECT_DIR) {
        return path
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.dss' directory has no parent");
    }

    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        path.display()
    );
}

pub fn load_config(project_root: &Path) -> anyhow::Result<DssConfig> {
    DssConfig::load_with_dotenv(project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })
}
