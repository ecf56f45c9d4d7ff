use super::{attribute, rate, reference_project};
use crate::*;
use serde_json::json;

#[test]
fn project_round_trips_through_json() {
    let mut project = reference_project();
    project.brands[0].color = Some("#0D1B2A".to_string());
    project.responses[0]
        .importance
        .insert("taste".to_string(), 5);
    project.responses[0].ts = 1_700_000_000_000;

    let text = serde_json::to_string_pretty(&project).unwrap();
    let parsed: Project = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, project);
}

#[test]
fn project_serializes_with_the_established_field_names() {
    let project = reference_project();
    let v = serde_json::to_value(&project).unwrap();

    assert_eq!(v["lang"], json!("en"));
    assert_eq!(v["brands"][0]["name"], json!("A"));
    assert_eq!(v["attributes"][0]["labelEs"], json!("Sabor"));
    assert_eq!(v["attributes"][1]["reversed"], json!(true));
    assert_eq!(v["benchmark"], json!("IDEAL"));
    assert_eq!(v["responses"][0]["performance"]["A"]["taste"], json!(4));
}

#[test]
fn project_parses_with_optional_fields_omitted() {
    let text = r#"{
        "id": "p1",
        "brands": [{ "name": "A" }],
        "attributes": [{ "id": "t", "labelEs": "Sabor", "labelEn": "Taste" }]
    }"#;
    let project: Project = serde_json::from_str(text).unwrap();

    assert_eq!(project.lang, Lang::Es);
    assert_eq!(project.benchmark, None);
    assert!(project.responses.is_empty());
    assert!(!project.attributes[0].reversed);
    assert_eq!(project.brands[0].color, None);
}

#[test]
fn benchmark_name_matches_case_insensitively() {
    let mut project = reference_project();
    project.benchmark = Some("ideal".to_string());
    assert_eq!(project.ideal_index(), Some(2));
}

#[test]
fn ideal_token_in_a_brand_name_is_the_fallback() {
    let mut project = reference_project();
    project.benchmark = None;
    project.brands[2].name = "Perfil ideal".to_string();
    assert_eq!(project.ideal_index(), Some(2));
}

#[test]
fn missing_benchmark_and_token_resolve_to_no_ideal() {
    let mut project = reference_project();
    project.benchmark = None;
    project.brands[2].name = "C".to_string();
    assert_eq!(project.ideal_index(), None);
}

#[test]
fn attribute_labels_follow_the_language() {
    let attr = attribute("taste", "Sabor", "Taste", false);
    assert_eq!(attr.label(Lang::Es), "Sabor");
    assert_eq!(attr.label(Lang::En), "Taste");
}

#[test]
fn duplicate_brand_names_are_rejected() {
    let mut project = reference_project();
    project.brands.push(Brand::new("A"));

    let err = project.validate().unwrap_err();
    assert!(matches!(err, Error::DuplicateBrand { name } if name == "A"));
}

#[test]
fn duplicate_attribute_ids_are_rejected() {
    let mut project = reference_project();
    project
        .attributes
        .push(attribute("taste", "Sabor", "Taste", false));

    let err = project.validate().unwrap_err();
    assert!(matches!(err, Error::DuplicateAttribute { id } if id == "taste"));
}

#[test]
fn sparse_responses_are_valid() {
    let mut project = reference_project();
    project.responses.push(rate(&[("A", &[("taste", 5)])]));
    assert!(project.validate().is_ok());
}
