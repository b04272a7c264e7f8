//! Action enum - every discrete interaction
//!
//! Components turn key and mouse events into Actions; `update` applies them.

use crate::model::PageSize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the column focus right
    FocusNextColumn,
    /// Move the column focus left
    FocusPrevColumn,
    /// Sort by the focused column
    SortFocusedColumn,
    /// Sort by a given column (header click)
    SortColumn(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────────────────────
    EnterFilterMode,
    ExitFilterMode,
    /// Insert a character at the filter cursor
    FilterInput(char),
    FilterBackspace,
    FilterCursorLeft,
    FilterCursorRight,
    ClearFilter,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Size Selector
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the selector
    TogglePageSizeSelector,
    SelectorUp,
    SelectorDown,
    /// Pick the highlighted choice
    ConfirmPageSize,
    SelectPageSize(PageSize),

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Jump to a 1-based page
    GoToPage(usize),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::FocusNextColumn => write!(f, "FocusNextColumn"),
            Action::FocusPrevColumn => write!(f, "FocusPrevColumn"),
            Action::SortFocusedColumn => write!(f, "SortFocusedColumn"),
            Action::SortColumn(column) => write!(f, "SortColumn({})", column),
            Action::EnterFilterMode => write!(f, "EnterFilterMode"),
            Action::ExitFilterMode => write!(f, "ExitFilterMode"),
            Action::FilterInput(c) => write!(f, "FilterInput('{}')", c),
            Action::FilterBackspace => write!(f, "FilterBackspace"),
            Action::FilterCursorLeft => write!(f, "FilterCursorLeft"),
            Action::FilterCursorRight => write!(f, "FilterCursorRight"),
            Action::ClearFilter => write!(f, "ClearFilter"),
            Action::TogglePageSizeSelector => write!(f, "TogglePageSizeSelector"),
            Action::SelectorUp => write!(f, "SelectorUp"),
            Action::SelectorDown => write!(f, "SelectorDown"),
            Action::ConfirmPageSize => write!(f, "ConfirmPageSize"),
            Action::SelectPageSize(size) => write!(f, "SelectPageSize({})", size),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::PreviousPage => write!(f, "PreviousPage"),
            Action::NextPage => write!(f, "NextPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::GoToPage(page) => write!(f, "GoToPage({})", page),
        }
    }
}
