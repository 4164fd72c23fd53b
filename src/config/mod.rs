pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::CopyMode;
#[cfg(feature = "cli")]
use clap::Parser;

/// Shows how a deep clone stays independent of its source while a shallow copy does not.
///
/// Without flags this runs the fixed scenario: John, 30, is cloned, then renamed to Mike,
/// aged to 35, and given certificate B, hobby tennis, a 5000.0 card and Java in place of PHP.
/// `--profile` only swaps the starting programmer; the mutations are always the same.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "clone-demo")]
pub struct CliConfig {
    /// How the clone is produced
    #[arg(long, value_enum, default_value_t = CopyMode::Deep)]
    pub mode: CopyMode,

    /// Transcript format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML file describing the programmer to start from (default: John, 30)
    #[arg(long)]
    pub profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_flags_runs_the_fixed_scenario() {
        let config = CliConfig::try_parse_from(["clone-demo"]).unwrap();
        assert_eq!(config.mode, CopyMode::Deep);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.profile.is_none());
        assert!(!config.verbose);

        let help = CliConfig::command().render_long_help().to_string();
        assert!(help.contains("Without flags this runs the fixed scenario"));
    }

    #[test]
    fn test_flags_parse() {
        let config = CliConfig::try_parse_from([
            "clone-demo",
            "--mode",
            "shallow",
            "--format",
            "json",
            "--profile",
            "profile.toml",
        ])
        .unwrap();
        assert_eq!(config.mode, CopyMode::Shallow);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.profile.as_deref(), Some("profile.toml"));
    }
}
