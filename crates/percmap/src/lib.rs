#![forbid(unsafe_code)]

//! `percmap` is a headless perceptual-map engine for survey data.
//!
//! Feed it a [`Project`] (brands, rated attributes, per-respondent scores)
//! and it returns 2D coordinates for every brand and attribute, ready for any
//! renderer:
//!
//! ```
//! use percmap::{Brand, Engine, Lang, Project};
//!
//! let project = Project {
//!     id: "demo".to_string(),
//!     lang: Lang::En,
//!     brands: vec![Brand::new("A"), Brand::new("B")],
//!     attributes: Vec::new(),
//!     benchmark: None,
//!     responses: Vec::new(),
//! };
//!
//! let map = Engine::new().compute_map(&project)?;
//! assert_eq!(map.brand_coords.len(), 0); // no attributes, no geometry
//! # Ok::<(), percmap::Error>(())
//! ```
//!
//! The numeric stages live in [`solver`] and can be driven directly with
//! matrices when no project model is involved.

pub use percmap_core::*;

/// Re-export of the low-level numeric crate.
pub use percmap_solver as solver;
