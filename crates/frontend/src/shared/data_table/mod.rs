//! Generic searchable, paginated data table.
//!
//! The pure parts (`engine`, `format`, `actions`) work on any [`TableRow`]
//! and are independent of the DOM; [`DataTable`] renders them with Leptos.

pub mod actions;
pub mod cell;
pub mod column;
pub mod engine;
pub mod format;
pub mod options;
pub mod view;
pub mod view_state;

pub use actions::{RowAction, RowActions};
pub use cell::{CellValue, RowKey, TableRow};
pub use column::{CellContent, ChipColor, ChipTone, Column, ColumnKind};
pub use engine::{
    body_state, displayed_rows_label, evaluate, filter_rows, BodyState, PageSnapshot,
    PaginatedSlice,
};
pub use format::format_cell;
pub use options::TableOptions;
pub use view::DataTable;
pub use view_state::ViewState;
