//! The view pipeline
//!
//! Everything the table shows is a pure function of the validated rows and
//! the [`ViewState`]: sort, then filter against the sorted order, then cut
//! out the active page.

use super::filter::filter_rows;
use super::pagination::{clamp_page, page_count, page_window, EntrySummary, PageSize};
use super::sort::{sort_by_keys, SortDirection, SortState};
use super::table_data::{Row, Table};

/// User-controlled state the view is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter_text: String,
    pub sort: SortState,
    pub page_size: PageSize,
    /// 1-based, may be stale until the next recomputation clamps it
    pub active_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default(), SortDirection::default())
    }
}

impl ViewState {
    pub fn new(page_size: PageSize, first_sort: SortDirection) -> Self {
        Self {
            filter_text: String::new(),
            sort: SortState::new(first_sort),
            page_size,
            active_page: 1,
        }
    }
}

/// Derived output for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Rows of the active page
    pub displayed: Vec<&'a Row>,
    /// Rows left after filtering
    pub visible_count: usize,
    pub page_count: usize,
    /// Active page after clamping
    pub active_page: usize,
    pub page_size: PageSize,
}

impl TableView<'_> {
    pub fn summary(&self) -> EntrySummary {
        EntrySummary::new(self.visible_count, self.page_size, self.active_page)
    }
}

/// Recompute the rows to display
pub fn compute_view<'a>(table: &'a Table, state: &ViewState) -> TableView<'a> {
    let base: Vec<&Row> = table.rows().iter().collect();
    let sorted = sort_by_keys(&base, state.sort.keys());
    let visible = filter_rows(&sorted, &state.filter_text);

    let pages = page_count(visible.len(), state.page_size);
    let active_page = clamp_page(state.active_page, pages);
    let displayed = page_window(&visible, state.page_size, active_page).to_vec();

    TableView {
        displayed,
        visible_count: visible.len(),
        page_count: pages,
        active_page,
        page_size: state.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pagination::{navigate, PageNav};
    use crate::model::sample;
    use crate::model::sort::ColumnKind;

    fn table() -> Table {
        sample::employees().validate().unwrap()
    }

    fn first_names(view: &TableView) -> Vec<String> {
        view.displayed.iter().map(|r| r[0].clone()).collect()
    }

    #[test]
    fn test_default_first_page() {
        let table = table();
        let view = compute_view(&table, &ViewState::default());
        assert_eq!(view.displayed.len(), 10);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.visible_count, 12);
        assert_eq!(view.summary().to_string(), "Showing 1 to 10 of 12 entries");
    }

    #[test]
    fn test_larger_page_size_shows_all() {
        let table = table();
        let state = ViewState {
            page_size: PageSize::Fifty,
            ..ViewState::default()
        };
        let view = compute_view(&table, &state);
        assert_eq!(view.displayed.len(), 12);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_filter_then_clear() {
        let table = table();
        let mut state = ViewState::default();

        state.filter_text = "J".to_string();
        assert_eq!(compute_view(&table, &state).displayed.len(), 4);

        state.filter_text = "Jo".to_string();
        let view = compute_view(&table, &state);
        assert_eq!(view.displayed.len(), 2);
        assert_eq!(view.page_count, 1);

        state.filter_text.clear();
        assert_eq!(compute_view(&table, &state).displayed.len(), 10);
    }

    #[test]
    fn test_filter_respects_sort_order() {
        let table = table();
        let mut state = ViewState::new(PageSize::Ten, SortDirection::Ascending);
        state.sort.sort_column(0, ColumnKind::Text);
        state.filter_text = "j".to_string();

        let view = compute_view(&table, &state);
        assert_eq!(first_names(&view), vec!["Bob", "Jack", "Jane", "John"]);
    }

    #[test]
    fn test_sort_ascending_then_descending() {
        let table = table();
        let mut state = ViewState::new(PageSize::Ten, SortDirection::Ascending);

        state.sort.sort_column(0, ColumnKind::Text);
        let names = first_names(&compute_view(&table, &state));
        assert_eq!(names.first().map(String::as_str), Some("Alice"));
        assert_eq!(names.last().map(String::as_str), Some("Jack"));

        state.sort.sort_column(0, ColumnKind::Text);
        let names = first_names(&compute_view(&table, &state));
        assert_eq!(names.first().map(String::as_str), Some("John"));
        assert_eq!(names.last().map(String::as_str), Some("Charlie"));
    }

    #[test]
    fn test_stale_active_page_is_clamped() {
        let table = table();
        let state = ViewState {
            active_page: 2,
            filter_text: "Jo".to_string(),
            ..ViewState::default()
        };
        let view = compute_view(&table, &state);
        assert_eq!(view.active_page, 1);
        assert_eq!(view.displayed.len(), 2);
    }

    #[test]
    fn test_navigation_scenario() {
        let table = table();
        let mut state = ViewState::default();
        let pages = compute_view(&table, &state).page_count;

        state.active_page = navigate(state.active_page, PageNav::Next, pages);
        assert_eq!(compute_view(&table, &state).displayed.len(), 2);

        state.active_page = navigate(state.active_page, PageNav::Next, pages);
        assert_eq!(state.active_page, 2);

        state.active_page = navigate(state.active_page, PageNav::Previous, pages);
        assert_eq!(compute_view(&table, &state).displayed.len(), 10);

        state.active_page = navigate(state.active_page, PageNav::Previous, pages);
        assert_eq!(state.active_page, 1);

        state.active_page = navigate(state.active_page, PageNav::Last, pages);
        assert_eq!(compute_view(&table, &state).displayed.len(), 2);

        state.active_page = navigate(state.active_page, PageNav::First, pages);
        assert_eq!(compute_view(&table, &state).displayed.len(), 10);
    }

    #[test]
    fn test_displayed_count_formula() {
        let table = table();
        for size in PageSize::ALL {
            for filter in ["", "a", "e", "Jo", "zzz"] {
                let state = ViewState {
                    filter_text: filter.to_string(),
                    page_size: size,
                    ..ViewState::default()
                };
                let view = compute_view(&table, &state);
                let expected = size
                    .value()
                    .min(view.visible_count - (view.active_page - 1) * size.value());
                assert_eq!(view.displayed.len(), expected);
                assert_eq!(view.page_count, view.visible_count.div_ceil(size.value()).max(1));
            }
        }
    }
}
