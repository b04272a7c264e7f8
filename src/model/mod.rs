//! Model layer - table data and derived view state
//!
//! - `table_data` - host input and its validation
//! - `filter`, `sort`, `pagination` - the three view stages
//! - `view` - the pure pipeline combining them
//! - `theme`, `modal` - presentation state

pub mod filter;
pub mod modal;
pub mod pagination;
pub mod sample;
pub mod sort;
pub mod table_data;
pub mod theme;
pub mod view;

pub use pagination::{PageNav, PageSize};
pub use sort::SortDirection;
pub use table_data::{DataError, Row, Table, TableData};
pub use theme::{Theme, ThemeOverrides};
pub use view::{compute_view, TableView, ViewState};
