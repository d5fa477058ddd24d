//! Reference data model.
//!
//! Layers, checks, radar points, findings, and the catalog that holds the
//! four layers in review order. Everything here is immutable once built.

mod catalog;
mod layer;

pub use catalog::{Catalog, LAYER_COUNT};
pub use layer::{
    Check, CheckStatus, Finding, LayerKind, LayerRecord, MAX_SCORE, RadarPoint, Recommendation,
    Severity,
};
