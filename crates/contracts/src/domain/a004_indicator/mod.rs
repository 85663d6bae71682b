pub mod dto;

pub use dto::{IndicatorExtra, IndicatorModelSummary, IndicatorRow, IndicatorTreeDto};
