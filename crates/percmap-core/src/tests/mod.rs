mod project;

use crate::*;
use indexmap::IndexMap;

pub(crate) fn attribute(id: &str, label_es: &str, label_en: &str, reversed: bool) -> Attribute {
    Attribute {
        id: id.to_string(),
        label_es: label_es.to_string(),
        label_en: label_en.to_string(),
        reversed,
    }
}

pub(crate) fn rate(pairs: &[(&str, &[(&str, u8)])]) -> Response {
    let mut performance: IndexMap<String, IndexMap<String, u8>> = IndexMap::new();
    for (brand, ratings) in pairs {
        let by_attr: IndexMap<String, u8> = ratings
            .iter()
            .map(|(id, v)| (id.to_string(), *v))
            .collect();
        performance.insert(brand.to_string(), by_attr);
    }
    Response {
        performance,
        ..Default::default()
    }
}

/// The reference scenario: three brands, taste plus a reversed price
/// attribute, one respondent. After price reversal the aggregated rows are
/// A=(4,4), B=(2,2), IDEAL=(5,5).
pub(crate) fn reference_project() -> Project {
    Project {
        id: "test".to_string(),
        lang: Lang::En,
        brands: vec![Brand::new("A"), Brand::new("B"), Brand::new("IDEAL")],
        attributes: vec![
            attribute("taste", "Sabor", "Taste", false),
            attribute("price", "Precio", "Price", true),
        ],
        benchmark: Some("IDEAL".to_string()),
        responses: vec![rate(&[
            ("A", &[("taste", 4), ("price", 2)]),
            ("B", &[("taste", 2), ("price", 4)]),
            ("IDEAL", &[("taste", 5), ("price", 1)]),
        ])],
    }
}
