// web_app/pages/mod.rs - Page components module
//
// - AllergyPage: Product search and allergy check interface

pub mod allergy;

pub use allergy::AllergyPage;
