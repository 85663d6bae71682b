//! Общие части страниц справочников: состояние, фильтры, таблица, сводка.

pub mod state;
pub mod summary;
pub mod table;
pub mod toolbar;

pub use state::{filter_chips, CatalogFilters, CatalogListState};
pub use summary::SummarySection;
pub use table::{CatalogTable, ExtraColumns};
pub use toolbar::CatalogToolbar;
