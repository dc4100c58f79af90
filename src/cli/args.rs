//! CLI argument definitions using clap
//!
//! Commands:
//! - draftline show
//! - draftline edit [--text <text>]
//! - draftline save
//! - draftline versions
//! - draftline rename <id> <name>
//! - draftline delete <id>
//! - draftline restore <id>
//! - draftline serve

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Draftline - a single-document editor with bounded version history
#[derive(Parser, Debug)]
#[command(name = "draftline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./draftline.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current document
    Show,

    /// Replace the document content
    Edit {
        /// New content; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,
    },

    /// Snapshot the current content as a new version
    Save,

    /// List versions, newest first
    Versions,

    /// Name a version
    Rename {
        /// Version id
        id: String,
        /// New name (1-40 characters, unique)
        name: String,
    },

    /// Delete a version
    Delete {
        /// Version id
        id: String,
    },

    /// Copy a version's content back into the document
    Restore {
        /// Version id
        id: String,
    },

    /// Read JSON commands from stdin, one per line
    Serve,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["draftline", "show"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("./draftline.json"));
        assert_eq!(cli.command, Command::Show);
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["draftline", "save", "--config", "/tmp/c.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/c.json"));
        assert_eq!(cli.command, Command::Save);
    }

    #[test]
    fn test_edit_text() {
        let cli = Cli::try_parse_from(["draftline", "edit", "--text", "# Hi"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Edit {
                text: Some("# Hi".to_string())
            }
        );
    }

    #[test]
    fn test_rename_args() {
        let cli = Cli::try_parse_from(["draftline", "rename", "abc", "Draft 2"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Rename {
                id: "abc".to_string(),
                name: "Draft 2".to_string()
            }
        );
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["draftline"]).is_err());
    }
}
