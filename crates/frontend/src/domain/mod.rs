pub mod a001_model;
pub mod a002_dimension;
pub mod a003_criterion;
pub mod a004_indicator;
pub mod a005_language;
pub mod a006_mapping;
