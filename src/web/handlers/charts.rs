// Chart series as JSON, for client-side charting of the dashboard and market pages

use axum::{extract::Path, response::Json};
use serde_json::Value;

use crate::content::dashboard::{
    labelled_distribution, SOIL_PARAMETERS, WEEKLY_WEATHER, YIELD_TRENDS,
};
use crate::content::market::{demand_rows, price_series_inr};
use crate::error::AppError;

pub const CHARTS: [&str; 6] = ["yield", "soil", "weather", "distribution", "prices", "demand"];

pub fn chart_series(chart: &str) -> Option<Value> {
    let series = match chart {
        "yield" => serde_json::to_value(YIELD_TRENDS),
        "soil" => serde_json::to_value(SOIL_PARAMETERS),
        "weather" => serde_json::to_value(WEEKLY_WEATHER),
        "distribution" => serde_json::to_value(labelled_distribution()),
        "prices" => serde_json::to_value(price_series_inr()),
        "demand" => serde_json::to_value(demand_rows()),
        _ => return None,
    };
    // Static series always serialize
    series.ok()
}

pub async fn get_chart(Path(chart): Path<String>) -> Result<Json<Value>, AppError> {
    let data = chart_series(&chart)
        .ok_or_else(|| AppError::NotFound(format!("unknown chart: {}", chart)))?;

    Ok(Json(serde_json::json!({
        "chart": chart,
        "rows": data.as_array().map(Vec::len).unwrap_or(0),
        "data": data,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_has_rows() {
        for chart in CHARTS {
            let data = chart_series(chart).unwrap();
            assert!(!data.as_array().unwrap().is_empty(), "{}", chart);
        }
        assert!(chart_series("rainfall").is_none());
    }

    #[test]
    fn test_price_series_in_rupees() {
        let prices = chart_series("prices").unwrap();
        assert_eq!(prices[0]["month"], "Jan");
        assert_eq!(prices[0]["wheat"], 23_380);
    }
}
