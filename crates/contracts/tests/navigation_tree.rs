//! Navigation payload → normalized tree → render lines.

use contracts::domain::a003_criterion::{enrich_indicator_counts, CriterionModelSummary};
use contracts::domain::a006_mapping::{
    all_node_keys, normalize_to_tree, visible_lines, DimensionChildren, NavModelDto, NodeKind,
};
use contracts::enums::StatusCode;
use contracts::shared::wire::decode_list;
use serde_json::json;
use std::collections::HashSet;

fn payload() -> serde_json::Value {
    json!([
        {
            "ModelId": 1, "ModelAdi": "SKS Hastane", "Aktif": "Aktif", "Hiyerarsi": false, "DilAdi": "Türkçe",
            "Boyutlar": [
                {"BoyutId": 10, "BoyutAdi": "Hasta Güvenliği", "ModelIciAgirlik": 40,
                 "Kriterler": [{"KriterId": 100, "KriterAdi": "El Hijyeni",
                                "Gostergeler": [{"GostergeId": 1, "GostergeAdi": "Uyum Oranı", "EslesmeId": 501}]}]},
                {"BoyutId": 10, "BoyutAdi": "Hasta Güvenliği",
                 "Kriterler": [{"KriterId": 101, "KriterAdi": "Düşmeler",
                                "Gostergeler": [{"GostergeId": 2}, {"GostergeId": 3, "Aktif": 2}]}]}
            ]
        },
        {
            "modelId": 2, "modelAdi": "Akreditasyon", "aktif": 2, "hiyerarsi": true,
            "boyutlar": [
                {"boyutId": 20, "boyutAdi": "Yönetim", "gostergeler": [
                    {"gostergeId": 4}, {"gostergeId": 5}, {"gostergeId": 6}
                ]}
            ]
        }
    ])
}

#[test]
fn duplicate_dimension_is_merged_and_counted() {
    let tree = normalize_to_tree(&decode_list::<NavModelDto>(payload()));
    assert_eq!(tree.len(), 2);
    let m = &tree[0];
    assert_eq!(m.dimensions.len(), 1);
    let d = &m.dimensions[0];
    assert_eq!(d.weight, Some(40.0));
    match &d.children {
        DimensionChildren::ViaCriteria(ks) => {
            let ids: Vec<i64> = ks.iter().map(|k| k.id).collect();
            assert_eq!(ids, vec![100, 101]);
            assert_eq!(ks[0].indicators[0].mapping_id, Some(501));
            assert_eq!(ks[1].indicators[1].status, StatusCode::Draft);
        }
        DimensionChildren::DirectIndicators(_) => panic!("expected criteria"),
    }
    assert_eq!(m.dimension_count, 1);
    assert_eq!(m.criterion_count, 2);
    assert_eq!(m.indicator_count, 3);
}

#[test]
fn flat_model_renders_indicators_one_level_up() {
    let tree = normalize_to_tree(&decode_list::<NavModelDto>(payload()));
    let flat = &tree[1];
    assert_eq!(flat.status, StatusCode::Draft);
    assert_eq!(flat.dimensions[0].indicator_count, 3);

    let lines = visible_lines(&tree, &all_node_keys(&tree));
    let flat_lines: Vec<_> = lines.iter().filter(|l| l.key.starts_with("m-2")).collect();
    assert_eq!(flat_lines.len(), 5);
    assert!(flat_lines
        .iter()
        .filter(|l| l.kind == NodeKind::Indicator)
        .all(|l| l.depth == 2 && l.status == StatusCode::Draft));
    assert!(!lines.iter().any(|l| l.kind == NodeKind::Criterion && l.key.starts_with("m-2")));
}

#[test]
fn collapse_all_leaves_model_lines() {
    let tree = normalize_to_tree(&decode_list::<NavModelDto>(payload()));
    let lines = visible_lines(&tree, &HashSet::new());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].indicator_count, Some(3));
}

#[test]
fn criterion_summary_counts_from_navigation() {
    let tree = normalize_to_tree(&decode_list::<NavModelDto>(payload()));
    let mut summaries: Vec<CriterionModelSummary> = decode_list(json!([
        {"ModelId": 1, "ModelAdi": "SKS Hastane", "BoyutId": 10, "BoyutAdi": "Hasta Güvenliği", "GostergeSayisi": 0}
    ]));
    enrich_indicator_counts(&mut summaries, &tree);
    assert_eq!(summaries[0].indicator_count, 3);
    assert_eq!(summaries[0].level(), "Puanlı");
}
