//! Market insight tables: commodity prices, supply/demand, trends, exports

use serde::Serialize;

use crate::format::usd_to_inr_rounded;
use crate::icons::{Icon, Trend};

/// Monthly commodity prices in USD/ton.
pub struct MonthlyPrice {
    pub month: &'static str,
    pub wheat: f64,
    pub corn: f64,
    pub rice: f64,
    pub soybeans: f64,
}

pub static PRICE_HISTORY_USD: &[MonthlyPrice] = &[
    MonthlyPrice { month: "Jan", wheat: 280.0, corn: 220.0, rice: 450.0, soybeans: 380.0 },
    MonthlyPrice { month: "Feb", wheat: 285.0, corn: 225.0, rice: 460.0, soybeans: 390.0 },
    MonthlyPrice { month: "Mar", wheat: 290.0, corn: 230.0, rice: 470.0, soybeans: 385.0 },
    MonthlyPrice { month: "Apr", wheat: 295.0, corn: 235.0, rice: 475.0, soybeans: 395.0 },
    MonthlyPrice { month: "May", wheat: 300.0, corn: 240.0, rice: 480.0, soybeans: 400.0 },
    MonthlyPrice { month: "Jun", wheat: 305.0, corn: 245.0, rice: 485.0, soybeans: 405.0 },
];

/// One point of the price chart, already converted to whole rupees.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricePointInr {
    pub month: &'static str,
    pub wheat: i64,
    pub corn: i64,
    pub rice: i64,
    pub soybeans: i64,
}

pub fn price_series_inr() -> Vec<PricePointInr> {
    PRICE_HISTORY_USD
        .iter()
        .map(|p| PricePointInr {
            month: p.month,
            wheat: usd_to_inr_rounded(p.wheat),
            corn: usd_to_inr_rounded(p.corn),
            rice: usd_to_inr_rounded(p.rice),
            soybeans: usd_to_inr_rounded(p.soybeans),
        })
        .collect()
}

/// Supply vs demand row. Demand and supply are index percentages.
#[derive(Debug, Clone, Serialize)]
pub struct DemandRow {
    pub crop: &'static str,
    pub demand: u32,
    pub supply: u32,
    pub price_inr: i64,
}

impl DemandRow {
    pub fn is_high_demand(&self) -> bool {
        self.demand > self.supply
    }

    pub fn balance_label(&self) -> &'static str {
        if self.is_high_demand() {
            "High Demand"
        } else {
            "Balanced"
        }
    }
}

pub fn demand_rows() -> Vec<DemandRow> {
    const ROWS: [(&str, u32, u32, f64); 6] = [
        ("Wheat", 85, 78, 305.0),
        ("Corn", 92, 88, 245.0),
        ("Rice", 78, 82, 485.0),
        ("Soybeans", 88, 85, 405.0),
        ("Potatoes", 95, 90, 350.0),
        ("Tomatoes", 90, 75, 800.0),
    ];

    ROWS.iter()
        .map(|&(crop, demand, supply, usd)| DemandRow {
            crop,
            demand,
            supply,
            price_inr: usd_to_inr_rounded(usd),
        })
        .collect()
}

pub struct TrendingCrop {
    pub name: &'static str,
    pub growth: &'static str,
    pub price: &'static str,
    pub reason: &'static str,
}

pub struct TrendCategory {
    pub title: &'static str,
    pub trend: Trend,
    pub crops: &'static [TrendingCrop],
}

impl TrendCategory {
    pub fn icon(&self) -> Icon {
        self.trend.icon()
    }
}

pub static MARKET_TRENDS: &[TrendCategory] = &[
    TrendCategory {
        title: "High Demand Crops",
        trend: Trend::Up,
        crops: &[
            TrendingCrop {
                name: "Organic Vegetables",
                growth: "+15%",
                price: "₹66,800-1,00,200/ton",
                reason: "Growing health consciousness and premium market demand",
            },
            TrendingCrop {
                name: "Quinoa",
                growth: "+12%",
                price: "₹2,33,800/ton",
                reason: "Superfood trend and gluten-free diet adoption",
            },
            TrendingCrop {
                name: "Specialty Grains",
                growth: "+8%",
                price: "₹33,400-50,100/ton",
                reason: "Craft food industry and artisanal products growth",
            },
        ],
    },
    TrendCategory {
        title: "Stable Markets",
        trend: Trend::Stable,
        crops: &[
            TrendingCrop {
                name: "Wheat",
                growth: "+2%",
                price: "₹25,468/ton",
                reason: "Consistent global demand and stable supply chains",
            },
            TrendingCrop {
                name: "Corn",
                growth: "+3%",
                price: "₹20,458/ton",
                reason: "Feed industry demand and biofuel applications",
            },
            TrendingCrop {
                name: "Rice",
                growth: "+1%",
                price: "₹40,498/ton",
                reason: "Staple food crop with steady consumption patterns",
            },
        ],
    },
    TrendCategory {
        title: "Declining Markets",
        trend: Trend::Down,
        crops: &[
            TrendingCrop {
                name: "Traditional Tobacco",
                growth: "-8%",
                price: "₹2,67,200/ton",
                reason: "Health regulations and reduced consumption",
            },
            TrendingCrop {
                name: "Sugar Beets",
                growth: "-5%",
                price: "₹15,030/ton",
                reason: "Sugar alternatives and health-conscious trends",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Opportunity {
    High,
    Medium,
    Low,
}

impl Opportunity {
    pub fn label(&self) -> &'static str {
        match self {
            Opportunity::High => "High",
            Opportunity::Medium => "Medium",
            Opportunity::Low => "Low",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Opportunity::High => "badge-default",
            Opportunity::Medium => "badge-secondary",
            Opportunity::Low => "badge-outline",
        }
    }

    pub fn status_icon(&self) -> Icon {
        match self {
            Opportunity::High => Icon::CheckCircle,
            _ => Icon::AlertCircle,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Opportunity::High => "Excellent market conditions and strong demand",
            _ => "Moderate opportunity with stable demand",
        }
    }
}

pub struct ExportOpportunity {
    pub crop: &'static str,
    pub destination: &'static str,
    pub opportunity: Opportunity,
    pub price: &'static str,
    pub volume: &'static str,
    pub trend: &'static str,
}

impl ExportOpportunity {
    pub fn is_growing(&self) -> bool {
        matches!(self.trend, "increasing" | "growing")
    }

    pub fn trend_icon(&self) -> Icon {
        if self.is_growing() {
            Icon::TrendingUp
        } else {
            Icon::Target
        }
    }
}

pub static EXPORT_OPPORTUNITIES: &[ExportOpportunity] = &[
    ExportOpportunity {
        crop: "Soybeans",
        destination: "China",
        opportunity: Opportunity::High,
        price: "₹35,070/ton",
        volume: "2.5M tons",
        trend: "increasing",
    },
    ExportOpportunity {
        crop: "Wheat",
        destination: "Middle East",
        opportunity: Opportunity::Medium,
        price: "₹26,303/ton",
        volume: "1.8M tons",
        trend: "stable",
    },
    ExportOpportunity {
        crop: "Organic Corn",
        destination: "Europe",
        opportunity: Opportunity::High,
        price: "₹31,730/ton",
        volume: "800K tons",
        trend: "increasing",
    },
    ExportOpportunity {
        crop: "Rice",
        destination: "Africa",
        opportunity: Opportunity::Medium,
        price: "₹41,333/ton",
        volume: "1.2M tons",
        trend: "growing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_series_converted() {
        let series = price_series_inr();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].wheat, 23_380);
        // 305 * 83.5 = 25467.5 rounds up
        assert_eq!(series[5].wheat, 25_468);
    }

    #[test]
    fn test_demand_balance() {
        let rows = demand_rows();
        let rice = rows.iter().find(|r| r.crop == "Rice").unwrap();
        assert_eq!(rice.balance_label(), "Balanced");
        let tomatoes = rows.iter().find(|r| r.crop == "Tomatoes").unwrap();
        assert_eq!(tomatoes.balance_label(), "High Demand");
        assert_eq!(tomatoes.price_inr, 66_800);
    }

    #[test]
    fn test_export_trend_icons() {
        let wheat = &EXPORT_OPPORTUNITIES[1];
        assert_eq!(wheat.trend_icon(), Icon::Target);
        assert_eq!(EXPORT_OPPORTUNITIES[3].trend_icon(), Icon::TrendingUp);
        assert_eq!(Opportunity::Medium.status_icon(), Icon::AlertCircle);
    }
}
