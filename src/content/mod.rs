//! Static content tables
//!
//! Reference data rendered verbatim by the pages. Nothing here is mutated;
//! prices authored in USD are converted through [`crate::format`].

pub mod crops;
pub mod dashboard;
pub mod home;
pub mod market;
pub mod optimization;
pub mod resources;

pub use crops::{ClimateZone, CropCategory, CropProfile, SoilType, CROP_CATALOG};
pub use resources::{ResourceCategory, ResourceLineItem};
