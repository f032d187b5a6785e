//! Command-line argument parsing
//!
//! Supports:
//! - Listing and showing problems
//! - Printing starter code
//! - Highlighting a source file the way the editor shows it
//! - Running a solution file against a problem's samples
//! - Showing and updating the user configuration

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::syntax::Language;

/// Daily coding practice with a smart editor
#[derive(Parser, Debug)]
#[command(name = "codedaily", version, about = "Daily coding practice")]
pub struct CliArgs {
    /// Problem catalog YAML file to use instead of the built-in problems
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List all problems
    List,
    /// Show a problem statement
    Show {
        /// Day (problem id)
        day: u32,
    },
    /// Print starter code
    Starter {
        day: u32,
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Print a file with line numbers and highlight markup
    Highlight {
        file: PathBuf,
        /// Defaults to the file extension's language
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Evaluate a solution file against a problem's sample test cases
    Run {
        day: u32,
        /// Defaults to the file extension's language
        #[arg(short, long)]
        language: Option<Language>,
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
    },
    /// Show where configuration and logs live; optionally set the default language
    Config {
        /// Save this as the default language
        #[arg(short, long)]
        language: Option<Language>,
    },
}

/// What to do, with every default resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Show { day: u32 },
    Starter { day: u32, language: Language },
    Highlight { file: PathBuf, language: Language },
    Run { day: u32, language: Language, file: PathBuf },
    Config { set_language: Option<Language> },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Catalog override (command line first, then config)
    pub catalog: Option<PathBuf>,
    pub action: Action,
}

impl CliArgs {
    /// Resolve defaults against the user configuration
    pub fn into_invocation(self, config: &AppConfig) -> Invocation {
        let fallback = config.default_language;
        let action = match self.command {
            CliCommand::List => Action::List,
            CliCommand::Show { day } => Action::Show { day },
            CliCommand::Starter { day, language } => Action::Starter {
                day,
                language: language.unwrap_or(fallback),
            },
            CliCommand::Highlight { file, language } => Action::Highlight {
                language: resolve_language(language, &file, fallback),
                file,
            },
            CliCommand::Run {
                day,
                language,
                file,
            } => Action::Run {
                day,
                language: resolve_language(language, &file, fallback),
                file,
            },
            CliCommand::Config { language } => Action::Config {
                set_language: language,
            },
        };

        Invocation {
            catalog: self.catalog.or_else(|| config.catalog.clone()),
            action,
        }
    }
}

/// Explicit language, else the file extension's, else the configured default
fn resolve_language(explicit: Option<Language>, file: &Path, fallback: Language) -> Language {
    explicit
        .or_else(|| {
            file.extension()
                .and_then(|ext| ext.to_str())
                .and_then(Language::from_extension)
        })
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list() {
        let inv = parse(&["codedaily", "list"]).into_invocation(&AppConfig::default());
        assert_eq!(inv.action, Action::List);
        assert_eq!(inv.catalog, None);
    }

    #[test]
    fn test_starter_uses_configured_language() {
        let config = AppConfig {
            default_language: Language::C,
            ..AppConfig::default()
        };
        let inv = parse(&["codedaily", "starter", "2"]).into_invocation(&config);
        assert_eq!(
            inv.action,
            Action::Starter {
                day: 2,
                language: Language::C
            }
        );
    }

    #[test]
    fn test_run_language_from_extension() {
        let inv = parse(&["codedaily", "run", "1", "--file", "two_sum.py"])
            .into_invocation(&AppConfig::default());
        assert_eq!(
            inv.action,
            Action::Run {
                day: 1,
                language: Language::Python,
                file: PathBuf::from("two_sum.py"),
            }
        );
    }

    #[test]
    fn test_explicit_language_wins() {
        let inv = parse(&["codedaily", "highlight", "sol.txt", "-l", "c++"])
            .into_invocation(&AppConfig::default());
        assert_eq!(
            inv.action,
            Action::Highlight {
                file: PathBuf::from("sol.txt"),
                language: Language::Cpp,
            }
        );
    }

    #[test]
    fn test_catalog_flag_overrides_config() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("/etc/problems.yaml")),
            ..AppConfig::default()
        };
        let inv = parse(&["codedaily", "--catalog", "mine.yaml", "list"]).into_invocation(&config);
        assert_eq!(inv.catalog, Some(PathBuf::from("mine.yaml")));

        let inv = parse(&["codedaily", "list"]).into_invocation(&config);
        assert_eq!(inv.catalog, Some(PathBuf::from("/etc/problems.yaml")));
    }

    #[test]
    fn test_config_language_is_not_defaulted() {
        let inv = parse(&["codedaily", "config"]).into_invocation(&AppConfig::default());
        assert_eq!(inv.action, Action::Config { set_language: None });

        let inv = parse(&["codedaily", "config", "--language", "python"])
            .into_invocation(&AppConfig::default());
        assert_eq!(
            inv.action,
            Action::Config {
                set_language: Some(Language::Python)
            }
        );
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(CliArgs::try_parse_from(["codedaily", "starter", "1", "-l", "rust"]).is_err());
    }

    #[test]
    fn test_run_requires_file() {
        assert!(CliArgs::try_parse_from(["codedaily", "run", "1"]).is_err());
    }
}
