pub mod dto;

pub use dto::{enrich_indicator_counts, CriterionModelSummary, CriterionRow, CriterionTreeDto};
