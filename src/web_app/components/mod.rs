// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Badge, modals)
// - search.rs: Search bar and search mode toggle
// - product.rs: Product search results
// - allergy.rs: Allergy result panel

pub mod common;
pub mod search;
pub mod product;
pub mod allergy;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
pub use allergy::*;
