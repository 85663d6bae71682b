//! Плоское представление дерева для отрисовки.

use super::tree::{DimensionChildren, NavCriterion, NavDimension, NavIndicator, NavModel};
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Model,
    Dimension,
    Criterion,
    Indicator,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Model => "Model",
            NodeKind::Dimension => "Boyut",
            NodeKind::Criterion => "Kriter",
            NodeKind::Indicator => "Gösterge",
        }
    }
}

/// One rendered line of the mapping tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Path key, stable across reloads (`m-1/d-5/k-9/g-30`)
    pub key: String,
    pub depth: u8,
    pub kind: NodeKind,
    pub id: i64,
    pub name: String,
    pub status: StatusCode,
    pub dimension_count: Option<u32>,
    pub criterion_count: Option<u32>,
    pub indicator_count: Option<u32>,
    pub weight: Option<f64>,
    pub expandable: bool,
    pub expanded: bool,
}

fn model_key(m: &NavModel) -> String {
    format!("m-{}", m.id)
}

fn dimension_key(parent: &str, d: &NavDimension) -> String {
    format!("{}/d-{}", parent, d.id)
}

fn criterion_key(parent: &str, k: &NavCriterion) -> String {
    format!("{}/k-{}", parent, k.id)
}

fn indicator_key(parent: &str, g: &NavIndicator) -> String {
    format!("{}/g-{}", parent, g.id)
}

fn indicator_line(parent: &str, g: &NavIndicator, depth: u8, weight: Option<f64>) -> TreeLine {
    TreeLine {
        key: indicator_key(parent, g),
        depth,
        kind: NodeKind::Indicator,
        id: g.id,
        name: g.name.clone(),
        status: g.status,
        dimension_count: None,
        criterion_count: None,
        indicator_count: None,
        weight,
        expandable: false,
        expanded: false,
    }
}

/// Lines visible with the given expanded keys.
///
/// Indicators of a flat dimension sit at depth 2, indicators under a
/// criterion at depth 3.
pub fn visible_lines(models: &[NavModel], expanded: &HashSet<String>) -> Vec<TreeLine> {
    let mut out = Vec::new();
    for m in models {
        let mk = model_key(m);
        let m_open = expanded.contains(&mk);
        out.push(TreeLine {
            key: mk.clone(),
            depth: 0,
            kind: NodeKind::Model,
            id: m.id,
            name: m.name.clone(),
            status: m.status,
            dimension_count: Some(m.dimension_count),
            criterion_count: Some(m.criterion_count),
            indicator_count: Some(m.indicator_count),
            weight: None,
            expandable: !m.dimensions.is_empty(),
            expanded: m_open,
        });
        if !m_open {
            continue;
        }

        for d in &m.dimensions {
            let dk = dimension_key(&mk, d);
            let d_open = expanded.contains(&dk);
            out.push(TreeLine {
                key: dk.clone(),
                depth: 1,
                kind: NodeKind::Dimension,
                id: d.id,
                name: d.name.clone(),
                status: d.status,
                dimension_count: None,
                criterion_count: (!d.children.is_flat()).then_some(d.criterion_count),
                indicator_count: Some(d.indicator_count),
                weight: d.weight,
                expandable: !d.children.is_empty(),
                expanded: d_open,
            });
            if !d_open {
                continue;
            }

            match &d.children {
                DimensionChildren::DirectIndicators(items) => {
                    for g in items {
                        out.push(indicator_line(&dk, g, 2, g.weight_in_dimension));
                    }
                }
                DimensionChildren::ViaCriteria(items) => {
                    for k in items {
                        let kk = criterion_key(&dk, k);
                        let k_open = expanded.contains(&kk);
                        out.push(TreeLine {
                            key: kk.clone(),
                            depth: 2,
                            kind: NodeKind::Criterion,
                            id: k.id,
                            name: k.name.clone(),
                            status: k.status,
                            dimension_count: None,
                            criterion_count: None,
                            indicator_count: Some(k.indicator_count),
                            weight: k.weight_in_dimension,
                            expandable: !k.indicators.is_empty(),
                            expanded: k_open,
                        });
                        if k_open {
                            for g in &k.indicators {
                                out.push(indicator_line(&kk, g, 3, g.weight_in_criterion));
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

/// Keys of every expandable node, for "expand all"
pub fn all_node_keys(models: &[NavModel]) -> HashSet<String> {
    let mut keys = HashSet::new();
    for m in models {
        let mk = model_key(m);
        for d in &m.dimensions {
            let dk = dimension_key(&mk, d);
            if let DimensionChildren::ViaCriteria(items) = &d.children {
                for k in items.iter().filter(|k| !k.indicators.is_empty()) {
                    keys.insert(criterion_key(&dk, k));
                }
            }
            if !d.children.is_empty() {
                keys.insert(dk);
            }
        }
        if !m.dimensions.is_empty() {
            keys.insert(mk);
        }
    }
    keys
}
