//! Строки справочников, конвейер фильтров и выбор строки.

pub mod filter;
pub mod row;
pub mod selection;

pub use filter::{apply_filters, search_hints, DisplayRow, FilterParams, LanguageFilter};
pub use row::{map_tree_row, map_tree_rows, pick_translations, EntityRow, RowBase, TreeRecord};
pub use selection::RowSelection;
