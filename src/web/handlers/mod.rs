pub mod charts;
pub mod pages;
pub mod prediction;
pub mod resources;
pub mod soil_weather;
