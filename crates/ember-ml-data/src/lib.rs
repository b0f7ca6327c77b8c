pub mod dataset;
pub mod selection;

pub use dataset::{Column, ColumnStore, MISSING_CELL};
pub use selection::ColumnId;
