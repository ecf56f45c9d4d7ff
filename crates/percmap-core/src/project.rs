//! Survey project model.
//!
//! A `Project` is an immutable snapshot of everything the engine needs:
//! ordered brands and attributes (index identity joins every matrix and
//! output), sparse per-respondent ratings, and an optional benchmark brand
//! name. It round-trips losslessly through JSON so exported project files
//! re-import to an equal value.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display language. Only label text depends on it, never numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

/// A surveyed brand. The name is its identity across responses and outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    /// Optional CSS color for renderers; opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

/// A rated attribute. `reversed` marks scales where a lower raw rating means
/// better standing (e.g. price); the aggregator inverts such ratings before
/// averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    pub label_es: String,
    pub label_en: String,
    #[serde(default)]
    pub reversed: bool,
}

impl Attribute {
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::Es => &self.label_es,
            Lang::En => &self.label_en,
        }
    }
}

/// One respondent's ratings: brand name -> attribute id -> raw rating (1-5).
/// Responses are sparse; a respondent need not rate every pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Attribute importance ratings. Kept for compatibility with existing
    /// project files; the map engine does not read it.
    #[serde(default)]
    pub importance: IndexMap<String, u8>,
    #[serde(default)]
    pub performance: IndexMap<String, IndexMap<String, u8>>,
    /// Submission time, epoch milliseconds.
    #[serde(default)]
    pub ts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Name of the benchmark/ideal brand, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<String>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl Project {
    /// Checks the identity contracts the engine relies on: brand names and
    /// attribute ids must be unique. Sparse or absent ratings are fine.
    pub fn validate(&self) -> Result<()> {
        let mut names: FxHashSet<&str> = FxHashSet::default();
        for b in &self.brands {
            if !names.insert(b.name.as_str()) {
                return Err(Error::DuplicateBrand {
                    name: b.name.clone(),
                });
            }
        }

        let mut ids: FxHashSet<&str> = FxHashSet::default();
        for a in &self.attributes {
            if !ids.insert(a.id.as_str()) {
                return Err(Error::DuplicateAttribute { id: a.id.clone() });
            }
        }

        Ok(())
    }

    /// Resolves the ideal/benchmark brand: the configured benchmark name
    /// (case-insensitive equality) wins, else the first brand whose name
    /// contains the token `IDEAL`.
    pub fn ideal_index(&self) -> Option<usize> {
        if let Some(benchmark) = &self.benchmark {
            let wanted = benchmark.to_uppercase();
            if let Some(i) = self
                .brands
                .iter()
                .position(|b| b.name.to_uppercase() == wanted)
            {
                return Some(i);
            }
        }

        self.brands
            .iter()
            .position(|b| b.name.to_uppercase().contains("IDEAL"))
    }
}
