use clap::Parser;
use component_tree::application::dto::OutputFormat;
use component_tree::component_tree::domain::{SortField, Strategy};
use std::path::PathBuf;

/// Load a component tree with its measures from a store fixture
#[derive(Parser, Debug)]
#[command(name = "component-tree")]
#[command(version)]
#[command(
    about = "Load the components below a base component with their measures, sorted and paginated",
    long_about = None
)]
pub struct Args {
    /// JSON store fixture to read components, snapshots, metrics and measures from
    #[arg(short, long, value_name = "FILE")]
    pub store: PathBuf,

    /// Uuid of the base component
    #[arg(short = 'c', long = "component", value_name = "UUID")]
    pub component: Option<String>,

    /// Key of the base component
    #[arg(short = 'k', long = "component-key", value_name = "KEY")]
    pub component_key: Option<String>,

    /// Comma-separated metric keys (falls back to the config file)
    #[arg(short, long, value_delimiter = ',', value_name = "KEYS")]
    pub metric_keys: Vec<String>,

    /// Traversal: children, leaves or all
    #[arg(long, default_value = "all")]
    pub strategy: Strategy,

    /// Comma-separated qualifiers to keep (e.g. FIL,UTS)
    #[arg(long, value_delimiter = ',', value_name = "QUALIFIERS")]
    pub qualifiers: Option<Vec<String>>,

    /// Case-insensitive search on component name or key (3 characters minimum)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Comma-separated sort fields: name, path, qualifier, metric
    #[arg(long, value_delimiter = ',', default_value = "name")]
    pub sort: Vec<SortField>,

    /// Metric key to sort on when `metric` is a sort field
    #[arg(long, value_name = "KEY")]
    pub metric_sort: Option<String>,

    /// Sort ascending (default)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// 1-based page index
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Page size (falls back to the config file, then 100)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format: json or markdown (falls back to the config file, then json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./component-tree.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(long)]
    pub quiet: bool,

    /// Act as a system administrator
    #[arg(long)]
    pub system_admin: bool,

    /// Grant a project role, as ROLE:PROJECT_UUID (repeatable)
    #[arg(long = "grant", value_name = "ROLE:UUID")]
    pub grants: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn ascending(&self) -> bool {
        self.asc || !self.desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("component-tree").chain(args.iter().copied()))
    }

    fn parse(args: &[&str]) -> Args {
        try_parse(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--store", "store.json", "-k", "project"]);

        assert_eq!(args.strategy, Strategy::All);
        assert_eq!(args.sort, vec![SortField::Name]);
        assert!(args.ascending());
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, None);
        assert!(args.metric_keys.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_lists_are_comma_separated() {
        let args = parse(&[
            "--store",
            "store.json",
            "-k",
            "project",
            "--metric-keys",
            "ncloc,coverage",
            "--qualifiers",
            "FIL,UTS",
            "--sort",
            "qualifier,metric",
            "--metric-sort",
            "ncloc",
            "--desc",
        ]);

        assert_eq!(args.metric_keys, vec!["ncloc", "coverage"]);
        assert_eq!(
            args.qualifiers,
            Some(vec!["FIL".to_string(), "UTS".to_string()])
        );
        assert_eq!(args.sort, vec![SortField::Qualifier, SortField::Metric]);
        assert!(!args.ascending());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result = try_parse(&["--store", "s.json", "--strategy", "roots"]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Unknown component tree strategy: roots"));
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        assert!(try_parse(&["--store", "s.json", "--sort", "size"]).is_err());
    }

    #[test]
    fn test_asc_and_desc_conflict() {
        assert!(try_parse(&["--store", "s.json", "--asc", "--desc"]).is_err());
    }

    #[test]
    fn test_repeated_grants() {
        let args = parse(&["--store", "s", "--grant", "user:a", "--grant", "admin:b"]);
        assert_eq!(args.grants, vec!["user:a", "admin:b"]);
    }
}
