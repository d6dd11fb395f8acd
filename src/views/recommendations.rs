//! Crop Recommendations page: filter selection and crop cards
//!
//! The selected soil type only changes which label is highlighted. The
//! crop list is always the full category.

use serde::Deserialize;

use crate::content::crops::{crops_in, ClimateZone, CropCategory, CropProfile, SoilType};
use crate::format::{format_usd_as_inr_per, FormatError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

impl StarFill {
    pub fn css_class(&self) -> &'static str {
        match self {
            StarFill::Full => "star-full",
            StarFill::Half => "star-half",
            StarFill::Empty => "star-empty",
        }
    }
}

/// Five stars for a 0–5 rating: whole stars, then one half star for any
/// fractional remainder.
pub fn stars(rating: f64) -> [StarFill; 5] {
    let mut out = [StarFill::Empty; 5];
    let whole = rating.floor();
    for (i, star) in out.iter_mut().enumerate() {
        let i = i as f64;
        *star = if i < whole {
            StarFill::Full
        } else if i < rating {
            StarFill::Half
        } else {
            StarFill::Empty
        };
    }
    out
}

/// Query string of the recommendations page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationQuery {
    pub soil: Option<String>,
    pub tab: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationSelection {
    pub soil: SoilType,
    pub category: CropCategory,
}

impl RecommendationSelection {
    /// Unknown keys fall back to the defaults (loamy soil, cereals tab).
    pub fn from_query(query: &RecommendationQuery) -> Self {
        Self {
            soil: query
                .soil
                .as_deref()
                .and_then(SoilType::from_key)
                .unwrap_or_default(),
            category: query
                .tab
                .as_deref()
                .and_then(CropCategory::from_key)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SoilOption {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct CropCard {
    pub name: &'static str,
    pub glyph: &'static str,
    pub rating: f64,
    pub stars: [StarFill; 5],
    pub market_price: String,
    pub growth_period: &'static str,
    pub yield_text: &'static str,
    pub suitability_tags: Vec<&'static str>,
    pub top_benefits: Vec<&'static str>,
}

impl CropCard {
    pub fn from_profile(crop: &CropProfile) -> Result<Self, FormatError> {
        let suitability_tags = crop
            .soil_types
            .iter()
            .map(SoilType::key)
            .chain(crop.climates.iter().map(ClimateZone::key))
            .collect();

        Ok(Self {
            name: crop.name,
            glyph: crop.glyph,
            rating: crop.rating,
            stars: stars(crop.rating),
            market_price: format_usd_as_inr_per(crop.price_usd_per_ton, "ton")?,
            growth_period: crop.growth_period,
            yield_text: crop.yield_text,
            suitability_tags,
            top_benefits: crop.benefits.iter().take(2).copied().collect(),
        })
    }
}

pub fn soil_options(selection: RecommendationSelection) -> Vec<SoilOption> {
    SoilType::ALL
        .iter()
        .map(|soil| SoilOption {
            key: soil.key(),
            label: soil.label(),
            description: soil.description(),
            selected: *soil == selection.soil,
        })
        .collect()
}

pub fn category_tabs(selection: RecommendationSelection) -> Vec<CategoryTab> {
    CropCategory::ALL
        .iter()
        .map(|category| CategoryTab {
            key: category.key(),
            label: category.label(),
            selected: *category == selection.category,
        })
        .collect()
}

/// Cards for the selected tab. The soil selection is not applied.
pub fn crop_cards(selection: RecommendationSelection) -> Result<Vec<CropCard>, FormatError> {
    crops_in(selection.category).map(CropCard::from_profile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_fill() {
        use StarFill::*;
        assert_eq!(stars(4.5), [Full, Full, Full, Full, Half]);
        assert_eq!(stars(4.0), [Full, Full, Full, Full, Empty]);
        assert_eq!(stars(4.9), [Full, Full, Full, Full, Half]);
        assert_eq!(stars(0.0), [Empty; 5]);
    }

    #[test]
    fn test_selection_defaults() {
        let selection = RecommendationSelection::from_query(&RecommendationQuery::default());
        assert_eq!(selection.soil, SoilType::Loamy);
        assert_eq!(selection.category, CropCategory::Cereals);

        let bogus = RecommendationQuery {
            soil: Some("peat".into()),
            tab: Some("nuts".into()),
        };
        assert_eq!(RecommendationSelection::from_query(&bogus), selection);
    }

    #[test]
    fn test_soil_selection_does_not_filter_cards() {
        let sandy = RecommendationSelection {
            soil: SoilType::Sandy,
            category: CropCategory::Cereals,
        };
        let clay = RecommendationSelection {
            soil: SoilType::Clay,
            ..sandy
        };
        let names = |s| crop_cards(s).unwrap().into_iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names(sandy), vec!["Wheat", "Corn", "Rice"]);
        assert_eq!(names(sandy), names(clay));

        let options = soil_options(clay);
        assert!(options.iter().find(|o| o.key == "clay").unwrap().selected);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_crop_card_fields() {
        let selection = RecommendationSelection {
            soil: SoilType::Loamy,
            category: CropCategory::Fruits,
        };
        let cards = crop_cards(selection).unwrap();
        let strawberries = &cards[1];
        assert_eq!(strawberries.market_price, "₹2,08,750/ton");
        assert_eq!(strawberries.top_benefits.len(), 2);
        assert_eq!(strawberries.suitability_tags, vec!["sandy", "loamy", "temperate", "cool"]);
    }
}
