//! Allergen taxonomy and ingredient-statement analysis library.
//!
//! This crate provides the two pure building blocks of ingredient
//! resolution: a markup normalizer for free-text ingredient statements
//! and a keyword detector over a fixed allergen taxonomy.
//!
//! # Example
//!
//! ```
//! use allergen::{normalize, Taxonomy};
//!
//! let taxonomy = Taxonomy::korean_default();
//! let text = normalize("<p>원재료: 우유, <b>밀가루</b>, 설탕</p>");
//!
//! let found = taxonomy.detect(&text);
//! assert!(found.contains("우유"));
//! assert!(found.contains("밀"));
//! ```

mod detect;
mod normalize;
mod taxonomy;

pub use detect::{Detection, DetectionResult};
pub use normalize::normalize;
pub use taxonomy::{Category, Taxonomy};
