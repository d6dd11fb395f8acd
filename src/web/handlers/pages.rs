// Page handlers for the static catalog pages, rendered with Askama

use askama::Template;
use axum::{
    extract::Query,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::content::crops::{ClimateZone, MarketHighlight, MARKET_HIGHLIGHTS};
use crate::content::dashboard::{
    labelled_distribution, LabelledSlice, SoilParameter, StatCard, WeatherDay, YieldPoint,
    SOIL_PARAMETERS, STAT_CARDS, WEEKLY_WEATHER, YIELD_TRENDS,
};
use crate::content::home::{Feature, HeadlineStat, BENEFITS, FEATURES, HEADLINE_STATS};
use crate::content::market::{
    demand_rows, price_series_inr, DemandRow, ExportOpportunity, PricePointInr, TrendCategory,
    EXPORT_OPPORTUNITIES, MARKET_TRENDS,
};
use crate::content::optimization::{
    resource_metrics, Priority, SuggestionCategory, LONG_TERM_IMPROVEMENTS, QUICK_WINS,
    SUGGESTION_CATEGORIES,
};
use crate::error::AppError;
use crate::format::format_inr;
use crate::icons::Icon;
use crate::views::recommendations::{
    category_tabs, crop_cards, soil_options, CategoryTab, CropCard, RecommendationQuery,
    RecommendationSelection, SoilOption,
};
use crate::views::toasts::VisibleToast;
use crate::views::Route;
use crate::web::{no_toasts, render, Shell};

/// `?tab=` selector shared by the tabbed pages.
#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TabLink {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Tab strip for `tabs`, selecting `requested` when it names one of them and
/// the first tab otherwise. Returns the strip and the selected key.
pub fn tab_links(
    tabs: &[(&'static str, &'static str)],
    requested: Option<&str>,
) -> (Vec<TabLink>, &'static str) {
    let selected = tabs
        .iter()
        .map(|(key, _)| *key)
        .find(|key| Some(*key) == requested)
        .or_else(|| tabs.first().map(|(key, _)| *key))
        .unwrap_or_default();

    let links = tabs
        .iter()
        .map(|&(key, label)| TabLink {
            key,
            label,
            selected: key == selected,
        })
        .collect();
    (links, selected)
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub features: &'static [Feature],
    pub stats: &'static [HeadlineStat],
    pub benefits: &'static [&'static str],
}

pub async fn home_page() -> Result<Html<String>, AppError> {
    render(&HomeTemplate {
        shell: Shell::for_route(Route::Home),
        toasts: no_toasts(),
        features: FEATURES,
        stats: HEADLINE_STATS,
        benefits: BENEFITS,
    })
}

// ============================================================================
// Crop Recommendations
// ============================================================================

#[derive(Debug, Clone)]
pub struct ClimateNote {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Template)]
#[template(path = "pages/recommendations.html")]
pub struct RecommendationsTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub soil_key: &'static str,
    pub soils: Vec<SoilOption>,
    pub climates: Vec<ClimateNote>,
    pub tabs: Vec<CategoryTab>,
    pub cards: Vec<CropCard>,
    pub highlights: &'static [MarketHighlight],
}

pub async fn recommendations_page(
    Query(query): Query<RecommendationQuery>,
) -> Result<Html<String>, AppError> {
    let selection = RecommendationSelection::from_query(&query);
    render(&RecommendationsTemplate {
        shell: Shell::for_route(Route::Recommendations),
        toasts: no_toasts(),
        soil_key: selection.soil.key(),
        soils: soil_options(selection),
        climates: ClimateZone::ALL
            .iter()
            .map(|zone| ClimateNote {
                label: zone.label(),
                description: zone.description(),
            })
            .collect(),
        tabs: category_tabs(selection),
        cards: crop_cards(selection)?,
        highlights: MARKET_HIGHLIGHTS,
    })
}

// ============================================================================
// Optimization
// ============================================================================

pub struct SuggestionCard {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub timeline: &'static str,
    pub cost: String,
    pub confidence: u32,
}

pub struct SuggestionBlock {
    pub title: &'static str,
    pub icon: Icon,
    pub priority: Priority,
    pub suggestions: Vec<SuggestionCard>,
}

impl SuggestionBlock {
    fn build(category: &SuggestionCategory) -> Result<Self, AppError> {
        let suggestions = category
            .suggestions
            .iter()
            .map(|s| {
                Ok(SuggestionCard {
                    title: s.title,
                    description: s.description,
                    impact: s.impact,
                    timeline: s.timeline,
                    cost: s.cost.display()?,
                    confidence: s.confidence,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Self {
            title: category.title,
            icon: category.icon,
            priority: category.priority,
            suggestions,
        })
    }
}

pub struct MetricRow {
    pub resource: &'static str,
    pub current: String,
    pub target: String,
    pub trend: &'static str,
    /// Bar width in percent; zero when the ratio is undefined
    pub fill: String,
}

#[derive(Template)]
#[template(path = "pages/optimization.html")]
pub struct OptimizationTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub tabs: Vec<TabLink>,
    pub tab: &'static str,
    pub blocks: Vec<SuggestionBlock>,
    pub metrics: Vec<MetricRow>,
    pub quick_wins: &'static [&'static str],
    pub long_term: &'static [&'static str],
}

const OPTIMIZATION_TABS: [(&str, &str); 3] = [
    ("suggestions", "AI Suggestions"),
    ("resources", "Resource Efficiency"),
    ("implementation", "Implementation"),
];

pub async fn optimization_page(Query(query): Query<TabQuery>) -> Result<Html<String>, AppError> {
    let (tabs, tab) = tab_links(&OPTIMIZATION_TABS, query.tab.as_deref());

    let blocks = SUGGESTION_CATEGORIES
        .iter()
        .map(SuggestionBlock::build)
        .collect::<Result<Vec<_>, _>>()?;

    let metrics = resource_metrics()
        .iter()
        .map(|m| {
            Ok(MetricRow {
                resource: m.resource,
                current: m.current_display()?,
                target: m.target_display()?,
                trend: m.trend,
                fill: format!("{:.1}", m.progress().unwrap_or(0.0)),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    render(&OptimizationTemplate {
        shell: Shell::for_route(Route::Optimization),
        toasts: no_toasts(),
        tabs,
        tab,
        blocks,
        metrics,
        quick_wins: QUICK_WINS,
        long_term: LONG_TERM_IMPROVEMENTS,
    })
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub stats: &'static [StatCard],
    pub yields: &'static [YieldPoint],
    pub soil: &'static [SoilParameter],
    pub weather: &'static [WeatherDay],
    pub distribution: Vec<LabelledSlice>,
}

pub async fn dashboard_page() -> Result<Html<String>, AppError> {
    render(&DashboardTemplate {
        shell: Shell::for_route(Route::Dashboard),
        toasts: no_toasts(),
        stats: STAT_CARDS,
        yields: YIELD_TRENDS,
        soil: SOIL_PARAMETERS,
        weather: WEEKLY_WEATHER,
        distribution: labelled_distribution(),
    })
}

// ============================================================================
// Market Insights
// ============================================================================

pub struct DemandView {
    pub row: DemandRow,
    pub price: String,
}

#[derive(Template)]
#[template(path = "pages/market.html")]
pub struct MarketTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub tabs: Vec<TabLink>,
    pub tab: &'static str,
    pub prices: Vec<PricePointInr>,
    pub demand: Vec<DemandView>,
    pub trends: &'static [TrendCategory],
    pub exports: &'static [ExportOpportunity],
}

const MARKET_TABS: [(&str, &str); 4] = [
    ("prices", "Price Trends"),
    ("demand", "Supply & Demand"),
    ("trends", "Market Trends"),
    ("exports", "Export Opportunities"),
];

pub async fn market_page(Query(query): Query<TabQuery>) -> Result<Html<String>, AppError> {
    let (tabs, tab) = tab_links(&MARKET_TABS, query.tab.as_deref());

    let demand = demand_rows()
        .into_iter()
        .map(|row| {
            let price = format!("{}/ton", format_inr(row.price_inr as f64)?);
            Ok(DemandView { row, price })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    render(&MarketTemplate {
        shell: Shell::for_route(Route::Market),
        toasts: no_toasts(),
        tabs,
        tab,
        prices: price_series_inr(),
        demand,
        trends: MARKET_TRENDS,
        exports: EXPORT_OPPORTUNITIES,
    })
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub path: String,
}

pub async fn not_found_page(uri: Uri) -> Result<impl IntoResponse, AppError> {
    let path = urlencoding::decode(uri.path())
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| uri.path().to_string());
    tracing::warn!("404: user attempted to access non-existent route: {}", path);

    let page = render(&NotFoundTemplate {
        shell: Shell::for_path(Route::NotFound.title(), &path),
        toasts: no_toasts(),
        path,
    })?;
    Ok((StatusCode::NOT_FOUND, page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_links_select_requested() {
        let (links, selected) = tab_links(&MARKET_TABS, Some("exports"));
        assert_eq!(selected, "exports");
        assert_eq!(links.iter().filter(|l| l.selected).count(), 1);
        assert!(links[3].selected);
    }

    #[test]
    fn test_tab_links_fall_back_to_first() {
        let (_, selected) = tab_links(&MARKET_TABS, Some("futures"));
        assert_eq!(selected, "prices");
        let (_, selected) = tab_links(&OPTIMIZATION_TABS, None);
        assert_eq!(selected, "suggestions");
    }
}
