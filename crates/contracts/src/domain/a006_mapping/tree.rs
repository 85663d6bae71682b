//! Нормализация навигационного дерева.
//!
//! Duplicated models, dimensions, criteria and indicators are merged by id,
//! missing counts are derived from the children, statuses are inherited from
//! the parent when absent.

use super::dto::{NavCriterionDto, NavDimensionDto, NavIndicatorDto, NavModelDto};
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavIndicator {
    pub id: i64,
    pub name: String,
    pub mapping_id: Option<i64>,
    pub status: StatusCode,
    pub weight_in_model: Option<f64>,
    pub weight_in_dimension: Option<f64>,
    pub weight_in_criterion: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavCriterion {
    pub id: i64,
    pub name: String,
    pub status: StatusCode,
    pub indicator_count: u32,
    pub weight_in_model: Option<f64>,
    pub weight_in_dimension: Option<f64>,
    pub indicators: Vec<NavIndicator>,
}

/// Children of a dimension: indicators directly (flat hierarchy) or through
/// criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DimensionChildren {
    DirectIndicators(Vec<NavIndicator>),
    ViaCriteria(Vec<NavCriterion>),
}

impl DimensionChildren {
    pub fn is_empty(&self) -> bool {
        match self {
            DimensionChildren::DirectIndicators(items) => items.is_empty(),
            DimensionChildren::ViaCriteria(items) => items.is_empty(),
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, DimensionChildren::DirectIndicators(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavDimension {
    pub id: i64,
    pub name: String,
    pub status: StatusCode,
    pub criterion_count: u32,
    pub indicator_count: u32,
    pub weight: Option<f64>,
    pub children: DimensionChildren,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavModel {
    pub id: i64,
    pub name: String,
    pub status: StatusCode,
    pub flat_hierarchy: bool,
    pub language: Option<String>,
    pub dimension_count: u32,
    pub criterion_count: u32,
    pub indicator_count: u32,
    pub dimensions: Vec<NavDimension>,
}

// ============================================================================
// Merge raw duplicates
// ============================================================================

fn dedup_indicators(items: impl IntoIterator<Item = NavIndicatorDto>) -> Vec<NavIndicatorDto> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|g| seen.insert(g.id)).collect()
}

fn merge_criteria(items: Vec<NavCriterionDto>) -> Vec<NavCriterionDto> {
    let mut out: Vec<NavCriterionDto> = Vec::new();
    for k in items {
        match out.iter_mut().find(|c| c.id == k.id) {
            Some(first) => {
                first.indicator_count = first.indicator_count.or(k.indicator_count);
                let merged = std::mem::take(&mut first.indicators)
                    .into_iter()
                    .chain(k.indicators);
                first.indicators = dedup_indicators(merged);
            }
            None => {
                let mut k = k;
                k.indicators = dedup_indicators(std::mem::take(&mut k.indicators));
                out.push(k);
            }
        }
    }
    out
}

fn merge_dimensions(items: Vec<NavDimensionDto>) -> Vec<NavDimensionDto> {
    let mut out: Vec<NavDimensionDto> = Vec::new();
    for b in items {
        match out.iter_mut().find(|d| d.id == b.id) {
            Some(first) => {
                first.criterion_count = first.criterion_count.or(b.criterion_count);
                first.indicator_count = first.indicator_count.or(b.indicator_count);
                first.criteria.extend(b.criteria);
                first.indicators = match (first.indicators.take(), b.indicators) {
                    (None, None) => None,
                    (a, b) => Some(a.into_iter().chain(b).flatten().collect()),
                };
            }
            None => out.push(b),
        }
    }
    for d in &mut out {
        d.criteria = merge_criteria(std::mem::take(&mut d.criteria));
        d.indicators = d.indicators.take().map(dedup_indicators);
    }
    out
}

fn merge_models(items: &[NavModelDto]) -> Vec<NavModelDto> {
    let mut out: Vec<NavModelDto> = Vec::new();
    for m in items {
        match out.iter_mut().find(|x| x.id == m.id) {
            Some(first) => {
                first.dimension_count = first.dimension_count.or(m.dimension_count);
                first.criterion_count = first.criterion_count.or(m.criterion_count);
                first.indicator_count = first.indicator_count.or(m.indicator_count);
                first.dimensions.extend(m.dimensions.iter().cloned());
            }
            None => out.push(m.clone()),
        }
    }
    for m in &mut out {
        m.dimensions = merge_dimensions(std::mem::take(&mut m.dimensions));
    }
    out
}

// ============================================================================
// Build the typed tree
// ============================================================================

fn build_indicator(g: NavIndicatorDto, parent: StatusCode) -> NavIndicator {
    NavIndicator {
        id: g.id,
        name: g.name,
        mapping_id: g.mapping_id,
        status: g.status.unwrap_or(parent),
        weight_in_model: g.weight_in_model,
        weight_in_dimension: g.weight_in_dimension,
        weight_in_criterion: g.weight_in_criterion.or(g.weight),
    }
}

fn build_criterion(k: NavCriterionDto, parent: StatusCode) -> NavCriterion {
    let status = k.status.unwrap_or(parent);
    let indicators: Vec<NavIndicator> = k
        .indicators
        .into_iter()
        .map(|g| build_indicator(g, status))
        .collect();
    NavCriterion {
        id: k.id,
        name: k.name,
        status,
        indicator_count: k.indicator_count.unwrap_or(indicators.len() as u32),
        weight_in_model: k.weight_in_model,
        weight_in_dimension: k.weight_in_dimension.or(k.weight),
        indicators,
    }
}

fn build_dimension(b: NavDimensionDto, model_flat: bool, parent: StatusCode) -> NavDimension {
    let status = b.status.unwrap_or(parent);
    let direct = b.indicators.unwrap_or_default();
    let flat = model_flat || (!direct.is_empty() && b.criteria.is_empty());

    let children = if flat {
        // indicators that still come through criteria hang directly as well
        let nested = b.criteria.into_iter().flat_map(|k| {
            let k_status = k.status.unwrap_or(status);
            k.indicators.into_iter().map(move |mut g| {
                g.status = Some(g.status.unwrap_or(k_status));
                g
            })
        });
        let all = dedup_indicators(direct.into_iter().chain(nested));
        DimensionChildren::DirectIndicators(
            all.into_iter().map(|g| build_indicator(g, status)).collect(),
        )
    } else {
        DimensionChildren::ViaCriteria(
            b.criteria
                .into_iter()
                .map(|k| build_criterion(k, status))
                .collect(),
        )
    };

    let (derived_criteria, derived_indicators) = match &children {
        DimensionChildren::DirectIndicators(items) => (0, items.len() as u32),
        DimensionChildren::ViaCriteria(items) => (
            items.len() as u32,
            items.iter().map(|k| k.indicator_count).sum(),
        ),
    };

    NavDimension {
        id: b.id,
        name: b.name,
        status,
        criterion_count: b.criterion_count.unwrap_or(derived_criteria),
        indicator_count: b.indicator_count.unwrap_or(derived_indicators),
        weight: b.weight.or(b.weight_in_model),
        children,
    }
}

fn build_model(m: NavModelDto) -> NavModel {
    let status = m.status.unwrap_or(StatusCode::Passive);
    let flat = m.flat_hierarchy.unwrap_or(false);
    let dimensions: Vec<NavDimension> = m
        .dimensions
        .into_iter()
        .map(|b| build_dimension(b, flat, status))
        .collect();

    NavModel {
        id: m.id,
        name: m.name,
        status,
        flat_hierarchy: flat,
        language: m.language,
        dimension_count: m.dimension_count.unwrap_or(dimensions.len() as u32),
        criterion_count: m
            .criterion_count
            .unwrap_or_else(|| dimensions.iter().map(|d| d.criterion_count).sum()),
        indicator_count: m
            .indicator_count
            .unwrap_or_else(|| dimensions.iter().map(|d| d.indicator_count).sum()),
        dimensions,
    }
}

/// Normalizes the navigation payload into the display tree.
///
/// Server-sent counts are kept as they are; only missing ones are summed up
/// from the children.
pub fn normalize_to_tree(models: &[NavModelDto]) -> Vec<NavModel> {
    merge_models(models).into_iter().map(build_model).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wire::decode_list;
    use serde_json::{json, Value};

    fn tree(raw: Value) -> Vec<NavModel> {
        normalize_to_tree(&decode_list::<NavModelDto>(raw))
    }

    fn criteria(d: &NavDimension) -> &[NavCriterion] {
        match &d.children {
            DimensionChildren::ViaCriteria(items) => items,
            DimensionChildren::DirectIndicators(_) => panic!("expected criteria"),
        }
    }

    fn direct(d: &NavDimension) -> &[NavIndicator] {
        match &d.children {
            DimensionChildren::DirectIndicators(items) => items,
            DimensionChildren::ViaCriteria(_) => panic!("expected direct indicators"),
        }
    }

    #[test]
    fn test_duplicate_dimension_merges_criteria() {
        let models = tree(json!([{
            "modelId": 1, "modelAdi": "SKS", "aktif": 1,
            "boyutlar": [
                {"boyutId": 5, "boyutAdi": "Kalite", "kriterler": [{"kriterId": 1, "kriterAdi": "C1"}]},
                {"boyutId": 5, "boyutAdi": "Kalite", "kriterler": [{"kriterId": 2, "kriterAdi": "C2"}]}
            ]
        }]));
        assert_eq!(models[0].dimensions.len(), 1);
        let ids: Vec<i64> = criteria(&models[0].dimensions[0]).iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(models[0].dimensions[0].criterion_count, 2);
    }

    #[test]
    fn test_duplicate_criteria_union_indicators() {
        let models = tree(json!([{
            "modelId": 1,
            "boyutlar": [
                {"boyutId": 5, "kriterler": [{"kriterId": 1, "gostergeler": [{"gostergeId": 10}]}]},
                {"boyutId": 5, "kriterler": [
                    {"kriterId": 1, "gostergeler": [{"gostergeId": 10}, {"gostergeId": 11}]}
                ]}
            ]
        }]));
        let ks = criteria(&models[0].dimensions[0]);
        assert_eq!(ks.len(), 1);
        assert_eq!(ks[0].indicators.len(), 2);
        assert_eq!(ks[0].indicator_count, 2);
        assert_eq!(models[0].indicator_count, 2);
    }

    #[test]
    fn test_flat_model_keeps_indicators_on_dimension() {
        let models = tree(json!([{
            "modelId": 2, "hiyerarsi": true, "aktif": "Aktif",
            "boyutlar": [{"boyutId": 8, "gostergeler": [
                {"gostergeId": 1}, {"gostergeId": 2}, {"gostergeId": 3}
            ]}]
        }]));
        let d = &models[0].dimensions[0];
        assert!(d.children.is_flat());
        assert_eq!(direct(d).len(), 3);
        assert_eq!(d.indicator_count, 3);
        assert_eq!(d.criterion_count, 0);
        assert_eq!(models[0].criterion_count, 0);
    }

    #[test]
    fn test_dimension_without_criteria_is_flat() {
        let models = tree(json!([{
            "modelId": 3, "hiyerarsi": false,
            "boyutlar": [
                {"boyutId": 1, "gostergeler": [{"gostergeId": 1}], "kriterler": []},
                {"boyutId": 2, "gostergeler": [{"gostergeId": 2}], "kriterler": [{"kriterId": 9}]}
            ]
        }]));
        assert!(models[0].dimensions[0].children.is_flat());
        assert!(!models[0].dimensions[1].children.is_flat());
    }

    #[test]
    fn test_flat_dimension_appends_criterion_indicators() {
        let models = tree(json!([{
            "modelId": 4, "hiyerarsi": true,
            "boyutlar": [{"boyutId": 1,
                "gostergeler": [{"gostergeId": 1}],
                "kriterler": [{"kriterId": 9, "aktif": 2, "gostergeler": [{"gostergeId": 1}, {"gostergeId": 2}]}]
            }]
        }]));
        let items = direct(&models[0].dimensions[0]);
        let ids: Vec<i64> = items.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
        // the appended one inherits from its criterion
        assert_eq!(items[1].status, StatusCode::Draft);
    }

    #[test]
    fn test_server_counts_are_trusted() {
        let models = tree(json!([{
            "modelId": 1, "boyutSayisi": 9, "kriterSayisi": null, "gostergeSayisi": "",
            "boyutlar": [{"boyutId": 1, "kriterSayisi": 7, "gostergeSayisi": 70, "kriterler": [
                {"kriterId": 1, "gostergeSayisi": 0, "gostergeler": [{"gostergeId": 1}]}
            ]}]
        }]));
        let m = &models[0];
        assert_eq!(m.dimension_count, 9);
        assert_eq!(m.criterion_count, 7);
        assert_eq!(m.indicator_count, 70);
        assert_eq!(criteria(&m.dimensions[0])[0].indicator_count, 0);
    }

    #[test]
    fn test_status_inheritance_chain() {
        let models = tree(json!([{
            "modelId": 1, "aktif": 2,
            "boyutlar": [
                {"boyutId": 1, "kriterler": [{"kriterId": 1, "gostergeler": [{"gostergeId": 1}]}]},
                {"boyutId": 2, "aktif": 1, "kriterler": [
                    {"kriterId": 2, "aktif": "Pasif", "gostergeler": [{"gostergeId": 2}, {"gostergeId": 3, "aktif": 1}]}
                ]}
            ]
        }]));
        let m = &models[0];
        let d1 = &m.dimensions[0];
        assert_eq!(d1.status, StatusCode::Draft);
        assert_eq!(criteria(d1)[0].indicators[0].status, StatusCode::Draft);
        let d2 = &m.dimensions[1];
        assert_eq!(d2.status, StatusCode::Active);
        let k = &criteria(d2)[0];
        assert_eq!(k.status, StatusCode::Passive);
        assert_eq!(k.indicators[0].status, StatusCode::Passive);
        assert_eq!(k.indicators[1].status, StatusCode::Active);

        let orphan = tree(json!([{"modelId": 5}]));
        assert_eq!(orphan[0].status, StatusCode::Passive);
    }

    #[test]
    fn test_weights_fall_back() {
        let models = tree(json!([{
            "modelId": 1,
            "boyutlar": [{"boyutId": 1, "ModelIciAgirlik": 30, "kriterler": [
                {"kriterId": 1, "modelIciAgirlik": 12, "Agirlik": 40, "gostergeler": [
                    {"gostergeId": 1, "modelIciAgirlik": 3, "boyutIciAgirlik": 10, "agirlik": 25}
                ]}
            ]}]
        }]));
        let d = &models[0].dimensions[0];
        assert_eq!(d.weight, Some(30.0));
        let k = &criteria(d)[0];
        assert_eq!(k.weight_in_model, Some(12.0));
        assert_eq!(k.weight_in_dimension, Some(40.0));
        let g = &k.indicators[0];
        assert_eq!(g.weight_in_model, Some(3.0));
        assert_eq!(g.weight_in_dimension, Some(10.0));
        assert_eq!(g.weight_in_criterion, Some(25.0));
    }

    #[test]
    fn test_duplicate_models_merge() {
        let models = tree(json!([
            {"modelId": 1, "modelAdi": "A", "boyutlar": [{"boyutId": 1}]},
            {"modelId": 2, "modelAdi": "B"},
            {"modelId": 1, "modelAdi": "A'", "boyutlar": [{"boyutId": 2}, {"boyutId": 1}]}
        ]));
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "A");
        assert_eq!(models[0].dimension_count, 2);
    }
}
