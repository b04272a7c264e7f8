//! Command-line arguments

use crate::config::Config;
use crate::model::{PageSize, SortDirection, ThemeOverrides};
use crate::services::parse_delimiter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "datatable-tui",
    version,
    about = "Sortable, filterable, paginated table viewer for the terminal"
)]
pub struct Cli {
    /// CSV file to show, `-` reads stdin
    pub path: Option<PathBuf>,

    /// Show the built-in employee directory
    #[arg(long, conflicts_with = "path")]
    pub demo: bool,

    /// Heading shown above the table
    #[arg(long)]
    pub title: Option<String>,

    /// Initial rows per page (10, 25, 50 or 100)
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Direction of the first sort on any column
    #[arg(long, value_parser = parse_sort_direction)]
    pub first_sort: Option<SortDirection>,

    /// CSV field delimiter, `tab` for tab-separated input
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Config file, defaults to ~/.datatable-tui/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file, defaults to ~/.datatable-tui/datatable-tui.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Text and border color, #RRGGBB
    #[arg(long)]
    pub primary_color: Option<String>,

    /// Alternate row and page button color, #RRGGBB
    #[arg(long)]
    pub background_color: Option<String>,

    /// Active page, sort indicator and title underline color, #RRGGBB
    #[arg(long)]
    pub accent_color: Option<String>,
}

impl Cli {
    fn theme_overrides(&self) -> ThemeOverrides {
        ThemeOverrides {
            primary_color: self.primary_color.clone(),
            background_color: self.background_color.clone(),
            accent_color: self.accent_color.clone(),
        }
    }

    /// Flags given on the command line win over the config file
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(first_sort) = self.first_sort {
            config.first_sort = first_sort;
        }
        config.theme = config.theme.merged_with(self.theme_overrides());
        config
    }
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    PageSize::try_from(size)
}

fn parse_sort_direction(value: &str) -> Result<SortDirection, String> {
    match value.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortDirection::Ascending),
        "desc" | "descending" => Ok(SortDirection::Descending),
        _ => Err(format!(
            "'{}' is not a sort direction (ascending or descending)",
            value
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datatable-tui").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.path.is_none());
        assert!(!cli.demo);
        assert_eq!(cli.delimiter, b',');
        assert!(cli.page_size.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&[
            "people.csv",
            "--page-size",
            "25",
            "--first-sort",
            "asc",
            "--delimiter",
            "tab",
        ]);
        assert_eq!(cli.path, Some(PathBuf::from("people.csv")));
        assert_eq!(cli.page_size, Some(PageSize::TwentyFive));
        assert_eq!(cli.first_sort, Some(SortDirection::Ascending));
        assert_eq!(cli.delimiter, b'\t');
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            vec!["datatable-tui", "--page-size", "20"],
            vec!["datatable-tui", "--first-sort", "sideways"],
            vec!["datatable-tui", "--demo", "people.csv"],
        ];
        for args in bad {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            title: Some("From config".to_string()),
            page_size: PageSize::Fifty,
            theme: ThemeOverrides {
                primary_color: Some("#111111".to_string()),
                accent_color: Some("#222222".to_string()),
                ..ThemeOverrides::default()
            },
            ..Config::default()
        };
        let cli = parse(&["--title", "From flag", "--accent-color", "#333333"]);
        let merged = cli.apply_to(config);

        assert_eq!(merged.title.as_deref(), Some("From flag"));
        assert_eq!(merged.page_size, PageSize::Fifty);
        assert_eq!(merged.theme.primary_color.as_deref(), Some("#111111"));
        assert_eq!(merged.theme.accent_color.as_deref(), Some("#333333"));
    }
}
