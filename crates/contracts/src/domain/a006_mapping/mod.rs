//! Eşleşme: навигационное дерево Model → Boyut → [Kriter →] Gösterge.

pub mod dto;
pub mod lines;
pub mod query;
pub mod tree;

pub use dto::{NavCriterionDto, NavDimensionDto, NavIndicatorDto, NavModelDto};
pub use lines::{all_node_keys, visible_lines, NodeKind, TreeLine};
pub use query::{split_keywords, NavigationFilter, NavigationForm};
pub use tree::{normalize_to_tree, DimensionChildren, NavCriterion, NavDimension, NavIndicator, NavModel};
