//! Shared CLI definitions for csvshelf.
//!
//! Used by the main application and by the build script (manpage).

use clap::Parser;
use std::path::{Path, PathBuf};

/// Path argument that means "read the CSV from standard input"
pub const STDIN_PATH: &str = "-";

/// Command-line arguments for csvshelf
#[derive(Clone, Parser, Debug)]
#[command(
    name = "csvshelf",
    version,
    about = "Keep named CSV datasets on a shelf and search them from the terminal"
)]
pub struct Args {
    /// CSV file(s) to import as datasets. Use "-" to read from standard input
    /// (stdin has no file name, so a dataset name is requested unless --name is given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Name to give the imported dataset(s) instead of the file name
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Make the dataset at this position the active one (0 is the placeholder)
    #[arg(long = "select", value_name = "INDEX", allow_negative_numbers = true)]
    pub select: Option<isize>,

    /// Only show rows where every word appears in some field (case-insensitive)
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// List the stored datasets and exit
    #[arg(long = "list", action)]
    pub list: bool,

    /// Remove all stored datasets and exit
    #[arg(long = "reset", action)]
    pub reset: bool,

    /// Directory holding the dataset store (overrides config [storage] dir)
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Path or http(s) URL of the CSV used to seed an empty store
    /// (overrides config [bootstrap] source)
    #[arg(long = "default-source", value_name = "LOCATION")]
    pub default_source: Option<String>,

    /// Encoding used when a file is neither BOM-marked nor valid UTF-8 (e.g. shift_jis)
    #[arg(long = "fallback-encoding", value_name = "LABEL")]
    pub fallback_encoding: Option<String>,

    /// Maximum number of rows to print (overrides config [display] max_rows)
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Generate default configuration file at ~/.config/csvshelf/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,

    /// Enable debug logging on stderr
    #[arg(long = "debug", action)]
    pub debug: bool,
}

impl Args {
    /// Returns true when the path argument refers to standard input
    pub fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == STDIN_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_paths_and_search() {
        let args = Args::parse_from(["csvshelf", "a.csv", "b.csv", "--search", "an yel"]);
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.search.as_deref(), Some("an yel"));
        assert!(!args.list);
    }

    #[test]
    fn test_select_accepts_negative_index() {
        let args = Args::parse_from(["csvshelf", "--select", "-1"]);
        assert_eq!(args.select, Some(-1));
    }

    #[test]
    fn test_force_requires_generate_config() {
        assert!(Args::try_parse_from(["csvshelf", "--force"]).is_err());
        let args = Args::try_parse_from(["csvshelf", "--generate-config", "--force"]).unwrap();
        assert!(args.force);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;

        // build.rs renders the manpage from this command
        let cmd = Args::command();
        cmd.clone().debug_assert();
        assert_eq!(cmd.get_name(), "csvshelf");
    }

    #[test]
    fn test_is_stdin() {
        assert!(Args::is_stdin(Path::new("-")));
        assert!(!Args::is_stdin(Path::new("data.csv")));
    }
}
