//! UI Components
//!
//! Each component owns its state, event handling and rendering.
//! Components communicate through Actions rather than direct state mutation.

pub mod data_table;
pub mod filter_input;
pub mod help_dialog;
pub mod layout;
pub mod page_size_selector;
pub mod quit_dialog;

pub use data_table::{DataTableComponent, TableOptions};
pub use filter_input::FilterInput;
pub use help_dialog::HelpDialog;
pub use layout::{centered_popup, split_hint_bar};
pub use page_size_selector::PageSizeSelector;
pub use quit_dialog::QuitDialog;
