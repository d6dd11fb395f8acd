//! Analytics dashboard: stat cards and chart series

use serde::Serialize;

use crate::derived::whole_percent_shares;
use crate::icons::{Icon, Trend};

pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub icon: Icon,
}

pub static STAT_CARDS: &[StatCard] = &[
    StatCard { title: "Average Yield", value: "4.2 T/Ha", change: "+12%", trend: Trend::Up, icon: Icon::Target },
    StatCard { title: "Efficiency Score", value: "87%", change: "+5%", trend: Trend::Up, icon: Icon::Activity },
    StatCard { title: "Soil Health", value: "Good", change: "+8%", trend: Trend::Up, icon: Icon::TrendingUp },
    StatCard { title: "Cost per Hectare", value: "₹1,240", change: "-3%", trend: Trend::Up, icon: Icon::TrendingDown },
];

/// Monthly yield in tons/hectare.
#[derive(Debug, Clone, Serialize)]
pub struct YieldPoint {
    pub month: &'static str,
    pub wheat: f64,
    pub corn: f64,
    pub rice: f64,
}

pub static YIELD_TRENDS: &[YieldPoint] = &[
    YieldPoint { month: "Jan", wheat: 3.2, corn: 7.1, rice: 5.8 },
    YieldPoint { month: "Feb", wheat: 3.5, corn: 7.4, rice: 6.1 },
    YieldPoint { month: "Mar", wheat: 3.8, corn: 7.8, rice: 6.4 },
    YieldPoint { month: "Apr", wheat: 4.1, corn: 8.2, rice: 6.7 },
    YieldPoint { month: "May", wheat: 4.3, corn: 8.5, rice: 6.9 },
    YieldPoint { month: "Jun", wheat: 4.2, corn: 8.3, rice: 6.8 },
];

#[derive(Debug, Clone, Serialize)]
pub struct SoilParameter {
    pub parameter: &'static str,
    pub value: f64,
    pub optimal: f64,
}

pub static SOIL_PARAMETERS: &[SoilParameter] = &[
    SoilParameter { parameter: "pH", value: 6.8, optimal: 7.0 },
    SoilParameter { parameter: "Nitrogen", value: 45.0, optimal: 50.0 },
    SoilParameter { parameter: "Phosphorus", value: 32.0, optimal: 35.0 },
    SoilParameter { parameter: "Potassium", value: 28.0, optimal: 40.0 },
    SoilParameter { parameter: "Organic Matter", value: 3.2, optimal: 4.0 },
];

#[derive(Debug, Clone, Serialize)]
pub struct WeatherDay {
    pub day: &'static str,
    pub temperature: f64,
    pub rainfall: f64,
    pub humidity: f64,
}

pub static WEEKLY_WEATHER: &[WeatherDay] = &[
    WeatherDay { day: "Mon", temperature: 22.0, rainfall: 2.3, humidity: 65.0 },
    WeatherDay { day: "Tue", temperature: 24.0, rainfall: 0.0, humidity: 58.0 },
    WeatherDay { day: "Wed", temperature: 21.0, rainfall: 5.1, humidity: 72.0 },
    WeatherDay { day: "Thu", temperature: 25.0, rainfall: 0.0, humidity: 60.0 },
    WeatherDay { day: "Fri", temperature: 23.0, rainfall: 1.2, humidity: 68.0 },
    WeatherDay { day: "Sat", temperature: 26.0, rainfall: 0.0, humidity: 55.0 },
    WeatherDay { day: "Sun", temperature: 24.0, rainfall: 3.5, humidity: 70.0 },
];

#[derive(Debug, Clone, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

pub static CROP_DISTRIBUTION: &[DistributionSlice] = &[
    DistributionSlice { name: "Wheat", value: 35.0, color: "#8884d8" },
    DistributionSlice { name: "Corn", value: 30.0, color: "#82ca9d" },
    DistributionSlice { name: "Rice", value: 20.0, color: "#ffc658" },
    DistributionSlice { name: "Vegetables", value: 15.0, color: "#ff7c7c" },
];

/// Pie slice with its label, e.g. `"Wheat 35%"`.
#[derive(Debug, Clone, Serialize)]
pub struct LabelledSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
    pub label: String,
}

pub fn labelled_distribution() -> Vec<LabelledSlice> {
    let values: Vec<f64> = CROP_DISTRIBUTION.iter().map(|s| s.value).collect();
    CROP_DISTRIBUTION
        .iter()
        .zip(whole_percent_shares(&values))
        .map(|(slice, share)| LabelledSlice {
            name: slice.name,
            value: slice.value,
            color: slice.color,
            label: match share {
                Some(pct) => format!("{} {}%", slice.name, pct),
                None => slice.name.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_labels() {
        let slices = labelled_distribution();
        assert_eq!(slices[0].label, "Wheat 35%");
        assert_eq!(slices[3].label, "Vegetables 15%");
    }

    #[test]
    fn test_weekly_weather_has_seven_days() {
        assert_eq!(WEEKLY_WEATHER.len(), 7);
        assert_eq!(WEEKLY_WEATHER[0].day, "Mon");
    }
}
