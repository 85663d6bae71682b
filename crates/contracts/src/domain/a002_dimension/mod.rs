pub mod dto;

pub use dto::{DimensionModelSummary, DimensionRow, DimensionTreeDto};
