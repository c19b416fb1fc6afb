use clap::Parser;
use std::path::PathBuf;

use crate::core::{FilterSet, IgnorePatterns, TreeOptions};

#[derive(Parser, Debug)]
#[command(name = "dirtree", version)]
#[command(about = "Print a filtered directory tree", long_about = None)]
pub struct Cli {
    /// Path to the root directory
    #[arg(default_value = "./")]
    pub dir: PathBuf,

    /// Comma separated file patterns (e.g. *.py,*.cpp,README.md). Use _ for files without extension
    #[arg(long, env = "DIRTREE_FILTERS")]
    pub filters: Option<String>,

    /// Comma separated file extensions (e.g. py,rs), added to the filters
    #[arg(long)]
    pub types: Option<String>,

    /// Comma separated patterns to ignore (e.g. node_modules/*,*.tmp)
    #[arg(long, env = "DIRTREE_IGNORE")]
    pub ignore: Option<String>,

    /// Show directories that contain no matching files
    #[arg(long)]
    pub empty_directories: bool,
}

impl Cli {
    pub fn tree_options(&self) -> TreeOptions {
        let mut filters = split_patterns(self.filters.as_deref());
        filters.extend(
            split_patterns(self.types.as_deref())
                .into_iter()
                .filter(|ext| !ext.is_empty())
                .map(|ext| format!("*.{}", ext.trim_start_matches('.'))),
        );
        // Set semantics: duplicates add nothing.
        filters.sort();
        filters.dedup();

        TreeOptions {
            filters: FilterSet::new(&filters),
            ignore: IgnorePatterns::new(&split_patterns(self.ignore.as_deref())),
            show_empty: self.empty_directories,
        }
    }
}

/// Split a comma separated option value. Missing or empty means no patterns.
fn split_patterns(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(|p| p.trim().to_owned()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, FsEntry};
    use std::path::Path;

    fn file(name: &str) -> FsEntry {
        FsEntry {
            path: PathBuf::from(name),
            name: name.to_owned(),
            kind: EntryKind::File,
        }
    }

    #[test]
    fn split_trims_and_keeps_empty_items() {
        assert_eq!(split_patterns(None), Vec::<String>::new());
        assert_eq!(split_patterns(Some("")), Vec::<String>::new());
        assert_eq!(
            split_patterns(Some("*.py, *.rs ,")),
            vec!["*.py".to_owned(), "*.rs".to_owned(), String::new()]
        );
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["dirtree"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("./"));
        assert!(!cli.empty_directories);

        let options = cli.tree_options();
        assert!(!options.show_empty);
        assert!(options.filters.matches(&file("Makefile")));
        assert!(!options.ignore.is_ignored(Path::new("anything")));
    }

    #[test]
    fn types_become_extension_filters() {
        let cli = Cli::try_parse_from(["dirtree", "--types", "py,.rs"]).unwrap();
        let options = cli.tree_options();
        assert!(options.filters.matches(&file("main.py")));
        assert!(options.filters.matches(&file("lib.rs")));
        assert!(!options.filters.matches(&file("notes.txt")));
        assert!(!options.filters.matches(&file("Makefile")));
    }

    #[test]
    fn types_merge_with_filters() {
        let cli = Cli::try_parse_from(["dirtree", "--filters", "_", "--types", "c"]).unwrap();
        let options = cli.tree_options();
        assert!(options.filters.matches(&file("main.c")));
        assert!(options.filters.matches(&file("Makefile")));
        assert!(!options.filters.matches(&file("main.h")));
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "dirtree",
            "proj",
            "--filters",
            "*.py",
            "--ignore",
            "node_modules/*,*.tmp",
            "--empty-directories",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("proj"));
        assert!(cli.empty_directories);

        let options = cli.tree_options();
        assert!(options.show_empty);
        assert!(options.ignore.is_ignored(Path::new("node_modules/x")));
        assert!(options.ignore.is_ignored(Path::new("proj/a.tmp")));
        assert!(!options.filters.matches(&file("a.txt")));
    }
}
