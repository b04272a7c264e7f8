//! Pagination over the visible rows
//!
//! Pages are 1-based. There is always at least one page, even when no row is
//! visible, and every navigation result is clamped into `[1, page_count]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Rows per page, restricted to the choices offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn value(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }

    /// Position in [`PageSize::ALL`]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|size| *size == self)
            .unwrap_or_default()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_value(value)
            .ok_or_else(|| format!("page size must be one of 10, 25, 50, 100 (got {})", value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.value()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A page navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
}

/// Number of pages for `visible` rows, never less than one
pub fn page_count(visible: usize, size: PageSize) -> usize {
    visible.div_ceil(size.value()).max(1)
}

pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Page reached from `current` by `nav`
pub fn navigate(current: usize, nav: PageNav, page_count: usize) -> usize {
    let target = match nav {
        PageNav::First => 1,
        PageNav::Previous => current.saturating_sub(1),
        PageNav::Next => current.saturating_add(1),
        PageNav::Last => page_count,
        PageNav::GoTo(page) => page,
    };
    clamp_page(target, page_count)
}

/// The dense set of page buttons
pub fn page_buttons(page_count: usize) -> RangeInclusive<usize> {
    1..=page_count.max(1)
}

/// Rows `[(page-1)*size, page*size)`, empty when the page starts past the end
pub fn page_window<T>(rows: &[T], size: PageSize, page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(size.value());
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(size.value()).min(rows.len());
    &rows[start..end]
}

/// The "Showing X to Y of Z entries" status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl EntrySummary {
    pub fn new(total: usize, size: PageSize, page: usize) -> Self {
        if total == 0 {
            return Self {
                from: 0,
                to: 0,
                total,
            };
        }
        let start = page.saturating_sub(1) * size.value();
        Self {
            from: (start + 1).min(total),
            to: (start + size.value()).min(total),
            total,
        }
    }
}

impl fmt::Display for EntrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.from, self.to, self.total
        )
    }
}
