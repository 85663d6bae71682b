//! Decode → map → filter over realistic tree payloads.

use contracts::domain::a002_dimension::DimensionTreeDto;
use contracts::domain::a003_criterion::CriterionTreeDto;
use contracts::domain::a004_indicator::IndicatorTreeDto;
use contracts::enums::{StatusCode, StatusFilter};
use contracts::shared::catalog::{
    apply_filters, map_tree_rows, search_hints, DisplayRow, FilterParams, LanguageFilter,
    RowSelection,
};
use contracts::shared::wire::decode_list;
use serde_json::json;

fn dimension_payload() -> serde_json::Value {
    json!([
        {
            "BoyutId": 1, "BoyutAdi": "Hasta Güvenliği", "BoyutAllias": "HG",
            "Aktif": "Aktif", "DilAdi": "Türkçe", "OlusturmaZamani": "2024-03-15T08:30:00",
            "Translations": [
                {"BoyutId": 2, "BoyutAdi": "Patient Safety", "BoyutAllias": "PS", "Aktif": "Taslak", "DilAdi": "English"}
            ]
        },
        {
            "boyutId": 3, "boyutAdi": "Tesis Yönetimi", "boyutAllias": "TY",
            "aktif": 0, "dilAdi": "Türkçe", "translations": null
        },
        "not an object"
    ])
}

#[test]
fn english_projection_promotes_translation() {
    let raw: Vec<DimensionTreeDto> = decode_list(dimension_payload());
    let rows = map_tree_rows(&raw);
    assert_eq!(rows.len(), 2);

    let params = FilterParams {
        language_filter: LanguageFilter::Single("English".into()),
        ..Default::default()
    };
    let out = apply_filters(&rows, &params);
    assert_eq!(out.len(), 1);
    match &out[0] {
        DisplayRow::Promoted { row, parent_id } => {
            assert_eq!(*parent_id, 1);
            assert_eq!(row.name, "Patient Safety");
            assert_eq!(row.short_name, "PS");
            assert_eq!(row.status, StatusCode::Draft);
            assert!(row.children.is_empty());
        }
        other => panic!("expected a promoted row, got {:?}", other),
    }
}

#[test]
fn all_filters_off_is_identity() {
    let raw: Vec<DimensionTreeDto> = decode_list(dimension_payload());
    let rows = map_tree_rows(&raw);
    let out = apply_filters(&rows, &FilterParams::default());
    let back: Vec<_> = out.into_iter().map(DisplayRow::into_row).collect();
    assert_eq!(back, rows);
}

#[test]
fn criterion_status_promotion_end_to_end() {
    let raw: Vec<CriterionTreeDto> = decode_list(json!([{
        "kriterId": 10, "kriterAdi": "El Hijyeni", "kriterAlias": "EH", "aktif": 2, "dilAdi": "Türkçe",
        "translations": [
            {"kriterId": 11, "kriterAdi": "Hand Hygiene", "kriterAlias": "HH", "aktif": 1, "dilAdi": "English"},
            {"kriterId": 12, "kriterAdi": "Handhygiene", "kriterAlias": "HD", "aktif": 0, "dilAdi": "Deutsch"}
        ]
    }]));
    let rows = map_tree_rows(&raw);
    let params = FilterParams {
        status_filter: StatusFilter::Multiple,
        selected_statuses: vec![StatusCode::Active],
        promote_children_by_status: true,
        ..Default::default()
    };
    let out = apply_filters(&rows, &params);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].row().id, 11);
    assert_eq!(out[0].parent_id(), Some(10));

    // selecting the promoted row looks up its own id
    let selection = RowSelection::root(out[0].row().id);
    assert_eq!(selection.lookup_id(), 11);
    assert_eq!(selection.row_key(), "root-11");
}

#[test]
fn indicator_search_then_language() {
    let raw: Vec<IndicatorTreeDto> = decode_list(json!([
        {"gostergeId": 1, "gostergeAdi": "Düşme Oranı", "gostergeAllias": "DO", "aktif": 1, "dilAdi": "Türkçe",
         "cevapTuruAdlari": ["Sayısal"],
         "children": [{"gostergeId": 2, "gostergeAdi": "Fall Rate", "gostergeAllias": "FR", "aktif": 1, "dilAdi": "English"}]},
        {"gostergeId": 3, "gostergeAdi": "Bekleme Süresi", "gostergeAllias": "BS", "aktif": 1, "dilAdi": "Türkçe"}
    ]));
    let rows = map_tree_rows(&raw);
    let params = FilterParams {
        search: "fr".into(),
        language_filter: LanguageFilter::Multiple,
        selected_languages: vec!["english".into(), "TÜRKÇE".into()],
        promote_children_by_status: true,
        ..Default::default()
    };
    let out = apply_filters(&rows, &params);
    // "fr" only matches the English short name, which stays a translation
    // of a root that does not match itself
    assert!(out.is_empty());

    let params = FilterParams {
        search: "düşme".into(),
        ..params
    };
    let out = apply_filters(&rows, &params);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].row().children.len(), 1);
    assert_eq!(out[0].row().extra.answer_types, vec!["Sayısal"]);
    assert_eq!(search_hints(&out), vec!["Düşme Oranı"]);
}

#[test]
fn both_short_name_spellings_keep_the_row() {
    let dims: Vec<DimensionTreeDto> = decode_list(json!([
        {"boyutId": 4, "boyutAdi": "Hasta Hakları", "boyutAllias": "HH", "boyutAlias": "HH", "dilAdi": "Türkçe"}
    ]));
    let dim_rows = map_tree_rows(&dims);
    assert_eq!(dim_rows.len(), 1);
    assert_eq!(dim_rows[0].short_name, "HH");

    let criteria: Vec<CriterionTreeDto> = decode_list(json!([
        {
            "kriterId": 10, "kriterAdi": "El Hijyeni", "kriterAlias": "EH", "dilAdi": "Türkçe",
            "translations": [
                {"kriterId": 11, "kriterAdi": "Hand Hygiene", "kriterAlias": "HH", "kriterAllias": null, "dilAdi": "English"}
            ]
        }
    ]));
    let rows = map_tree_rows(&criteria);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].children.len(), 1);
    assert_eq!(rows[0].children[0].short_name, "HH");
}
