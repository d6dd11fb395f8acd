//! Soil & Weather page state
//!
//! `Idle -> Loading -> Ready`. A blank location never leaves the current
//! phase; it only posts a validation toast. The simulated fetch resolves
//! with fixed mock readings whatever location was entered.

use serde::Serialize;

use super::toasts::{Toast, ToastPolicy, Toaster};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchPhase {
    Idle,
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub rainfall_mm: f64,
    pub condition: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub condition: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilSnapshot {
    pub ph: f64,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
    pub organic_matter_pct: f64,
    pub moisture_pct: f64,
    pub temperature_c: f64,
    pub recommendations: Vec<&'static str>,
}

/// One row of the soil health table.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilReading {
    pub label: &'static str,
    pub value: String,
    pub status: &'static str,
    pub in_range: bool,
}

fn within(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}

impl SoilSnapshot {
    pub fn readings(&self) -> Vec<SoilReading> {
        let ph_ok = within(self.ph, 6.0, 7.5);
        let n_ok = within(self.nitrogen_ppm, 40.0, 60.0);
        let p_ok = within(self.phosphorus_ppm, 25.0, 50.0);
        let k_ok = within(self.potassium_ppm, 30.0, 50.0);
        let om_ok = self.organic_matter_pct >= 2.5;
        let moisture_ok = self.moisture_pct >= 60.0;

        vec![
            SoilReading {
                label: "pH Level",
                value: format!("{}", self.ph),
                status: if ph_ok { "Optimal" } else { "Needs attention" },
                in_range: ph_ok,
            },
            SoilReading {
                label: "Nitrogen (N)",
                value: format!("{} ppm", self.nitrogen_ppm),
                status: if n_ok { "Good" } else { "Low" },
                in_range: n_ok,
            },
            SoilReading {
                label: "Phosphorus (P)",
                value: format!("{} ppm", self.phosphorus_ppm),
                status: if p_ok { "Good" } else { "Low" },
                in_range: p_ok,
            },
            SoilReading {
                label: "Potassium (K)",
                value: format!("{} ppm", self.potassium_ppm),
                status: if k_ok { "Good" } else { "Low" },
                in_range: k_ok,
            },
            SoilReading {
                label: "Organic Matter",
                value: format!("{}%", self.organic_matter_pct),
                status: if om_ok { "Good" } else { "Low" },
                in_range: om_ok,
            },
            SoilReading {
                label: "Moisture",
                value: format!("{}%", self.moisture_pct),
                status: if moisture_ok { "Adequate" } else { "Low" },
                in_range: moisture_ok,
            },
        ]
    }
}

// ============================================================================
// Mock readings
// ============================================================================

pub fn mock_weather(location: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        current: CurrentConditions {
            temperature_c: 24.0,
            humidity_pct: 65.0,
            wind_speed_kmh: 8.0,
            rainfall_mm: 2.3,
            condition: "Partly Cloudy",
        },
        forecast: vec![
            ForecastDay { day: "Today", temperature_c: 24.0, humidity_pct: 65.0, rainfall_mm: 2.3, condition: "Partly Cloudy" },
            ForecastDay { day: "Tomorrow", temperature_c: 26.0, humidity_pct: 58.0, rainfall_mm: 0.0, condition: "Sunny" },
            ForecastDay { day: "Day 3", temperature_c: 22.0, humidity_pct: 72.0, rainfall_mm: 5.1, condition: "Light Rain" },
            ForecastDay { day: "Day 4", temperature_c: 25.0, humidity_pct: 60.0, rainfall_mm: 0.0, condition: "Sunny" },
            ForecastDay { day: "Day 5", temperature_c: 23.0, humidity_pct: 68.0, rainfall_mm: 1.2, condition: "Cloudy" },
        ],
    }
}

pub fn mock_soil() -> SoilSnapshot {
    SoilSnapshot {
        ph: 6.8,
        nitrogen_ppm: 45.0,
        phosphorus_ppm: 32.0,
        potassium_ppm: 28.0,
        organic_matter_pct: 3.2,
        moisture_pct: 68.0,
        temperature_c: 18.0,
        recommendations: vec![
            "Soil pH is optimal for most crops",
            "Consider nitrogen supplementation for heavy feeders",
            "Phosphorus levels are adequate",
            "Potassium could be increased by 15%",
        ],
    }
}

// ============================================================================
// View state
// ============================================================================

/// Outcome of an "Analyze" submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Started,
    Rejected,
    AlreadyLoading,
}

#[derive(Debug)]
pub struct SoilWeatherView {
    phase: FetchPhase,
    location_input: String,
    pending_location: Option<String>,
    weather: Option<WeatherSnapshot>,
    soil: Option<SoilSnapshot>,
    pub toasts: Toaster,
}

impl SoilWeatherView {
    pub fn new(toast_policy: ToastPolicy) -> Self {
        Self {
            phase: FetchPhase::Idle,
            location_input: String::new(),
            pending_location: None,
            weather: None,
            soil: None,
            toasts: Toaster::new(toast_policy),
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn location_input(&self) -> &str {
        &self.location_input
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn soil(&self) -> Option<&SoilSnapshot> {
        self.soil.as_ref()
    }

    pub fn submit(&mut self, location: &str) -> Submission {
        self.location_input = location.to_string();

        if self.phase == FetchPhase::Loading {
            return Submission::AlreadyLoading;
        }

        let trimmed = location.trim();
        if trimmed.is_empty() {
            self.toasts.push(Toast::destructive(
                "Location required",
                "Please enter a location to fetch weather data",
            ));
            return Submission::Rejected;
        }

        self.pending_location = Some(trimmed.to_string());
        self.phase = FetchPhase::Loading;
        Submission::Started
    }

    /// Complete the simulated fetch. No-op unless a fetch is in flight.
    pub fn resolve(&mut self) {
        if self.phase != FetchPhase::Loading {
            return;
        }
        let location = self.pending_location.take().unwrap_or_default();
        self.weather = Some(mock_weather(&location));
        self.soil = Some(mock_soil());
        self.phase = FetchPhase::Ready;
        self.toasts.push(Toast::info(
            "Data fetched successfully",
            "Weather and soil analysis completed",
        ));
    }
}
