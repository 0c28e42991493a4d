//! reliefmd - disaster-relief data feeds to Markdown tables
//!
//! Converts structured disaster-relief JSON records (accommodations,
//! pharmacies, phone directories, evacuation points, ...) into
//! publication-ready Markdown tables with deterministic cell
//! normalization and link/phone formatting.

pub mod category;
pub mod format;
pub mod model;
pub mod normalize;
pub mod render;

pub use category::{BuildError, Category};
pub use model::Table;
