//! Crop catalog, soil types and climate zones for the recommendations page

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    #[default]
    Loamy,
    Clay,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Sandy, SoilType::Loamy, SoilType::Clay];

    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|soil| soil.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy Soil",
            SoilType::Loamy => "Loamy Soil",
            SoilType::Clay => "Clay Soil",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Well-draining, low fertility",
            SoilType::Loamy => "Balanced, fertile, ideal for most crops",
            SoilType::Clay => "Water-retentive, high fertility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Tropical,
    Subtropical,
    Temperate,
    Cool,
    Warm,
}

impl ClimateZone {
    pub const ALL: [ClimateZone; 5] = [
        ClimateZone::Tropical,
        ClimateZone::Subtropical,
        ClimateZone::Temperate,
        ClimateZone::Cool,
        ClimateZone::Warm,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "tropical",
            ClimateZone::Subtropical => "subtropical",
            ClimateZone::Temperate => "temperate",
            ClimateZone::Cool => "cool",
            ClimateZone::Warm => "warm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "Tropical",
            ClimateZone::Subtropical => "Subtropical",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Cool => "Cool",
            ClimateZone::Warm => "Warm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "Hot, humid year-round",
            ClimateZone::Subtropical => "Warm with mild winters",
            ClimateZone::Temperate => "Moderate seasons",
            ClimateZone::Cool => "Cold winters, mild summers",
            ClimateZone::Warm => "Warm temperatures year-round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    #[default]
    Cereals,
    Vegetables,
    Fruits,
}

impl CropCategory {
    pub const ALL: [CropCategory; 3] = [
        CropCategory::Cereals,
        CropCategory::Vegetables,
        CropCategory::Fruits,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "cereals",
            CropCategory::Vegetables => "vegetables",
            CropCategory::Fruits => "fruits",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "Cereals & Grains",
            CropCategory::Vegetables => "Vegetables",
            CropCategory::Fruits => "Fruits",
        }
    }
}

/// Static crop profile. Prices are USD per ton and displayed in INR.
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub glyph: &'static str,
    pub category: CropCategory,
    pub growth_period: &'static str,
    pub yield_text: &'static str,
    pub price_usd_per_ton: f64,
    pub soil_types: &'static [SoilType],
    pub climates: &'static [ClimateZone],
    pub rating: f64,
    pub benefits: &'static [&'static str],
}

pub static CROP_CATALOG: &[CropProfile] = &[
    CropProfile {
        name: "Wheat",
        glyph: "🌾",
        category: CropCategory::Cereals,
        growth_period: "120-150 days",
        yield_text: "4.5 tons/hectare",
        price_usd_per_ton: 280.0,
        soil_types: &[SoilType::Loamy, SoilType::Clay],
        climates: &[ClimateZone::Temperate, ClimateZone::Cool],
        rating: 4.5,
        benefits: &["High market demand", "Good storage life", "Multiple uses"],
    },
    CropProfile {
        name: "Corn",
        glyph: "🌽",
        category: CropCategory::Cereals,
        growth_period: "90-120 days",
        yield_text: "8.2 tons/hectare",
        price_usd_per_ton: 220.0,
        soil_types: &[SoilType::Loamy, SoilType::Sandy],
        climates: &[ClimateZone::Warm, ClimateZone::Temperate],
        rating: 4.8,
        benefits: &["High yield potential", "Versatile crop", "Good feed value"],
    },
    CropProfile {
        name: "Rice",
        glyph: "🌾",
        category: CropCategory::Cereals,
        growth_period: "120-180 days",
        yield_text: "6.8 tons/hectare",
        price_usd_per_ton: 450.0,
        soil_types: &[SoilType::Clay, SoilType::Loamy],
        climates: &[ClimateZone::Tropical, ClimateZone::Subtropical],
        rating: 4.3,
        benefits: &["Stable market", "High nutrition", "Water efficient varieties"],
    },
    CropProfile {
        name: "Tomatoes",
        glyph: "🍅",
        category: CropCategory::Vegetables,
        growth_period: "70-90 days",
        yield_text: "45 tons/hectare",
        price_usd_per_ton: 800.0,
        soil_types: &[SoilType::Loamy, SoilType::Sandy],
        climates: &[ClimateZone::Warm, ClimateZone::Temperate],
        rating: 4.6,
        benefits: &["High value crop", "Year-round demand", "Processing options"],
    },
    CropProfile {
        name: "Potatoes",
        glyph: "🥔",
        category: CropCategory::Vegetables,
        growth_period: "90-120 days",
        yield_text: "35 tons/hectare",
        price_usd_per_ton: 350.0,
        soil_types: &[SoilType::Sandy, SoilType::Loamy],
        climates: &[ClimateZone::Cool, ClimateZone::Temperate],
        rating: 4.4,
        benefits: &["Long storage life", "Multiple varieties", "Steady demand"],
    },
    CropProfile {
        name: "Carrots",
        glyph: "🥕",
        category: CropCategory::Vegetables,
        growth_period: "70-80 days",
        yield_text: "28 tons/hectare",
        price_usd_per_ton: 650.0,
        soil_types: &[SoilType::Sandy, SoilType::Loamy],
        climates: &[ClimateZone::Cool, ClimateZone::Temperate],
        rating: 4.2,
        benefits: &["Health food trend", "Good export potential", "Processing value"],
    },
    CropProfile {
        name: "Apples",
        glyph: "🍎",
        category: CropCategory::Fruits,
        growth_period: "2-3 years to bearing",
        yield_text: "25 tons/hectare",
        price_usd_per_ton: 1200.0,
        soil_types: &[SoilType::Loamy, SoilType::Clay],
        climates: &[ClimateZone::Cool, ClimateZone::Temperate],
        rating: 4.7,
        benefits: &["Premium pricing", "Long productive life", "Export opportunities"],
    },
    CropProfile {
        name: "Strawberries",
        glyph: "🍓",
        category: CropCategory::Fruits,
        growth_period: "60-90 days",
        yield_text: "15 tons/hectare",
        price_usd_per_ton: 2500.0,
        soil_types: &[SoilType::Sandy, SoilType::Loamy],
        climates: &[ClimateZone::Temperate, ClimateZone::Cool],
        rating: 4.9,
        benefits: &["Highest value per hectare", "Quick returns", "Premium market"],
    },
];

/// Crops of one category, in catalog order.
pub fn crops_in(category: CropCategory) -> impl Iterator<Item = &'static CropProfile> {
    CROP_CATALOG.iter().filter(move |crop| crop.category == category)
}

/// Market highlight boxes shown under the crop catalog.
pub struct MarketHighlight {
    pub title: &'static str,
    pub body: &'static str,
    pub tone: &'static str,
}

pub static MARKET_HIGHLIGHTS: &[MarketHighlight] = &[
    MarketHighlight {
        title: "High Demand",
        body: "Organic vegetables, strawberries, and specialty grains showing strong market growth",
        tone: "success",
    },
    MarketHighlight {
        title: "Stable Prices",
        body: "Wheat, corn, and rice maintaining consistent pricing with good export opportunities",
        tone: "warning",
    },
    MarketHighlight {
        title: "Emerging Markets",
        body: "Plant-based proteins and climate-resilient crops gaining market traction",
        tone: "info",
    },
];
