//! Free-text row filter
//!
//! A row is kept when any of its cells contains the filter text,
//! compared case-insensitively. Empty text keeps everything.

use super::table_data::Row;

/// Case-insensitive "any cell contains" predicate
pub fn row_matches(row: &[String], needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || row
            .iter()
            .any(|cell| cell.to_lowercase().contains(needle_lower))
}

/// Keep the rows matching `text`, preserving their order
pub fn filter_rows<'a>(rows: &[&'a Row], text: &str) -> Vec<&'a Row> {
    if text.is_empty() {
        return rows.to_vec();
    }

    let needle = text.to_lowercase();
    rows.iter()
        .copied()
        .filter(|row| row_matches(row, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn all(rows: &[Row]) -> Vec<&Row> {
        rows.iter().collect()
    }

    fn first_names(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r[0].clone()).collect()
    }

    #[test]
    fn test_empty_text_is_identity() {
        let rows = sample::employee_rows();
        let filtered = filter_rows(&all(&rows), "");
        assert_eq!(filtered.len(), rows.len());
    }

    #[test]
    fn test_filter_single_letter() {
        let rows = sample::employee_rows();
        let filtered = filter_rows(&all(&rows), "J");
        assert_eq!(first_names(&filtered), vec!["John", "Jane", "Bob", "Jack"]);
    }

    #[test]
    fn test_filter_narrows() {
        let rows = sample::employee_rows();
        let filtered = filter_rows(&all(&rows), "Jo");
        assert_eq!(first_names(&filtered), vec!["John", "Bob"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = sample::employee_rows();
        assert_eq!(
            filter_rows(&all(&rows), "DEVELOPER").len(),
            filter_rows(&all(&rows), "developer").len()
        );
        assert_eq!(filter_rows(&all(&rows), "developer").len(), 3);
    }

    #[test]
    fn test_filter_matches_dates() {
        let rows = sample::employee_rows();
        let filtered = filter_rows(&all(&rows), "2019-");
        assert_eq!(first_names(&filtered), vec!["Bob", "Henry"]);
    }

    #[test]
    fn test_filter_idempotent() {
        let rows = sample::employee_rows();
        let once = filter_rows(&all(&rows), "an");
        let twice = filter_rows(&once, "an");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_no_match() {
        let rows = sample::employee_rows();
        assert!(filter_rows(&all(&rows), "zzz").is_empty());
    }
}
