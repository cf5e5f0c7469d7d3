use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dss` binary.
#[derive(Debug, Parser)]
#[command(name = "dss", version, about = "dss - app data safety catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding `.dss/config.toml` and `.env` (defaults to auto-detect)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dss", "--format", "json", "--verbose", "status"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dss", "apps", "--page", "2", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::Apps(args) => {
                assert_eq!(args.page, 2);
                assert_eq!(args.page_size, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_takes_app_name_with_spaces() {
        let cli = Cli::try_parse_from(["dss", "show", "Acme Chat"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Show(ref args) if args.app == "Acme Chat"));
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dss", "--format", "xml", "status"]).is_err());
    }

    #[test]
    fn project_flag_is_copied_into_global_flags() {
        let cli = Cli::try_parse_from(["dss", "--project", "/tmp/demo", "status"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().project.as_deref(), Some("/tmp/demo"));
    }
}
