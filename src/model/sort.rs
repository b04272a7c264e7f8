//! Column sorting
//!
//! Columns whose header mentions "date" compare as calendar values, all
//! others compare as text. Each column remembers the direction its next sort
//! will use, independently of the other columns.

use super::table_data::Row;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// How a column's cells are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Temporal,
    Text,
}

impl ColumnKind {
    pub fn from_header(header: &str) -> Self {
        if header.to_lowercase().contains("date") {
            ColumnKind::Temporal
        } else {
            ColumnKind::Text
        }
    }
}

/// One applied sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub direction: SortDirection,
    pub kind: ColumnKind,
}

/// Parse a cell as a calendar value
pub fn parse_date(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(cell) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(cell) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

thread_local! {
    // CLDR root collation, punctuation not ignored, code points break full ties
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Unicode collation: base letters first, then accents, then case (lowercase first)
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

/// Calendar ordering; unparseable cells go after every valid date and
/// compare among themselves as text
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_compare(a, b),
    }
}

pub fn compare_cells(a: &str, b: &str, kind: ColumnKind) -> Ordering {
    match kind {
        ColumnKind::Temporal => compare_dates(a, b),
        ColumnKind::Text => locale_compare(a, b),
    }
}

fn compare_rows(a: &Row, b: &Row, keys: &[SortKey]) -> Ordering {
    keys.iter().fold(Ordering::Equal, |acc, key| {
        acc.then_with(|| {
            let (x, y) = (
                a.get(key.column).map(String::as_str).unwrap_or_default(),
                b.get(key.column).map(String::as_str).unwrap_or_default(),
            );
            key.direction.apply(compare_cells(x, y, key.kind))
        })
    })
}

/// Sort by a single column, returning a new sequence
pub fn sort_rows<'a>(
    rows: &[&'a Row],
    column: usize,
    direction: SortDirection,
    kind: ColumnKind,
) -> Vec<&'a Row> {
    sort_by_keys(
        rows,
        &[SortKey {
            column,
            direction,
            kind,
        }],
    )
}

/// Sort by several keys, the first key being the primary one
pub fn sort_by_keys<'a>(rows: &[&'a Row], keys: &[SortKey]) -> Vec<&'a Row> {
    let mut sorted = rows.to_vec();
    if !keys.is_empty() {
        sorted.sort_by(|a, b| compare_rows(a, b, keys));
    }
    sorted
}

/// Per-column direction memory plus the history of applied sorts
///
/// The history is ordered most recent first and holds at most one key per
/// column, so sorting by it reproduces the effect of successive stable sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    first: SortDirection,
    next: HashMap<usize, SortDirection>,
    history: Vec<SortKey>,
}

impl SortState {
    pub fn new(first: SortDirection) -> Self {
        Self {
            first,
            next: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Direction the next sort of `column` will use
    pub fn next_direction(&self, column: usize) -> SortDirection {
        self.next.get(&column).copied().unwrap_or(self.first)
    }

    /// Sort by `column` and flip that column's remembered direction
    pub fn sort_column(&mut self, column: usize, kind: ColumnKind) -> SortKey {
        let direction = self.next_direction(column);
        self.next.insert(column, direction.toggled());

        let key = SortKey {
            column,
            direction,
            kind,
        };
        self.history.retain(|k| k.column != column);
        self.history.insert(0, key);
        key
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.history
    }

    /// Most recently applied sort
    pub fn primary(&self) -> Option<SortKey> {
        self.history.first().copied()
    }
}
