// Resource Management page: cost tracking and the project calculator

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Form,
};

use crate::api_server::AppState;
use crate::content::resources::{find_category, resource_categories, total_costs, ResourceCategory};
use crate::derived::{roi_percent, share_of_total, EXPECTED_REVENUE_INR};
use crate::error::AppError;
use crate::format::{format_inr, format_percent};
use crate::icons::Icon;
use crate::views::calculator::{CalculatorField, CalculatorForm, CalculatorSummary};
use crate::views::toasts::VisibleToast;
use crate::views::{ResourceView, Route};
use crate::web::handlers::pages::{tab_links, TabLink, TabQuery};
use crate::web::{render, Shell};

const NOT_AVAILABLE: &str = "N/A";

fn percent_or_na(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ============================================================================
// View models
// ============================================================================

pub struct OverviewCard {
    pub title: &'static str,
    pub value: String,
    pub icon: Icon,
}

pub struct LineItemRow {
    pub name: &'static str,
    pub quantity: String,
    pub cost_per_unit: String,
    pub total: String,
    pub share: String,
}

pub struct CategoryPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub total: String,
    pub items: Vec<LineItemRow>,
}

impl CategoryPanel {
    fn build(category: &ResourceCategory, grand_total: f64) -> Result<Self, AppError> {
        let items = category
            .items
            .iter()
            .map(|item| {
                Ok(LineItemRow {
                    name: item.name,
                    quantity: format!("{} {}", item.quantity, item.unit),
                    cost_per_unit: format_inr(item.cost_per_unit)?,
                    total: format_inr(item.total())?,
                    share: percent_or_na(share_of_total(item.total(), grand_total)),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Self {
            key: category.key,
            title: category.title,
            icon: category.icon,
            total: format_inr(category.total())?,
            items,
        })
    }
}

pub struct FieldInput {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "fragments/calculator_summary.html")]
pub struct CalculatorSummaryFragment {
    pub total: String,
    pub per_hectare: String,
    pub roi: String,
    pub rejected: Vec<&'static str>,
    pub toasts: Vec<VisibleToast>,
    pub oob: bool,
}

impl CalculatorSummaryFragment {
    fn build(view: &mut ResourceView, summary: CalculatorSummary, oob: bool) -> Result<Self, AppError> {
        Ok(Self {
            total: format_inr(summary.total)?,
            per_hectare: format_inr(summary.per_hectare)?,
            roi: percent_or_na(summary.roi_pct),
            rejected: view.rejected().iter().map(CalculatorField::label).collect(),
            toasts: view.toasts.visible(),
            oob,
        })
    }
}

/// Toast region only; returned by actions with no other visible effect.
#[derive(Template)]
#[template(path = "fragments/toasts_oob.html")]
pub struct ToastsFragment {
    pub toasts: Vec<VisibleToast>,
}

#[derive(Template)]
#[template(path = "pages/resources.html")]
pub struct ResourcesTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub view_id: String,
    pub tabs: Vec<TabLink>,
    pub tab: &'static str,
    pub overview: Vec<OverviewCard>,
    pub categories: Vec<CategoryPanel>,
    pub fields: Vec<FieldInput>,
    pub summary: CalculatorSummaryFragment,
}

const RESOURCE_TABS: [(&str, &str); 2] = [
    ("tracking", "Cost Tracking"),
    ("calculator", "Project Calculator"),
];

fn overview_cards(total_cost: f64) -> Result<Vec<OverviewCard>, AppError> {
    Ok(vec![
        OverviewCard {
            title: "Total Costs",
            value: format_inr(total_cost)?,
            icon: Icon::DollarSign,
        },
        OverviewCard {
            title: "Expected Revenue",
            value: format_inr(EXPECTED_REVENUE_INR)?,
            icon: Icon::TrendingUp,
        },
        OverviewCard {
            title: "Net Profit",
            value: format_inr(EXPECTED_REVENUE_INR - total_cost)?,
            icon: Icon::Target,
        },
        OverviewCard {
            title: "ROI",
            value: percent_or_na(roi_percent(EXPECTED_REVENUE_INR, total_cost)),
            icon: Icon::BarChart3,
        },
    ])
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn resources_page(
    State(state): State<AppState>,
    Query(query): Query<TabQuery>,
) -> Result<Response, AppError> {
    let (tabs, tab) = tab_links(&RESOURCE_TABS, query.tab.as_deref());

    let categories = resource_categories();
    let grand_total = total_costs(&categories);
    let panels = categories
        .iter()
        .map(|c| CategoryPanel::build(c, grand_total))
        .collect::<Result<Vec<_>, _>>()?;

    let view = state
        .resource_views
        .mount(ResourceView::new(state.config.toast_policy))
        .await;
    tracing::debug!(view = %view.id(), "mounted resource view");

    let mut guard = view.lock().await;
    let fields = CalculatorField::ALL
        .iter()
        .map(|field| FieldInput {
            key: field.key(),
            label: field.label(),
            value: String::new(),
        })
        .collect();
    let summary = guard.inputs().summary();
    let summary = CalculatorSummaryFragment::build(&mut guard, summary, false)?;

    let page = render(&ResourcesTemplate {
        shell: Shell::for_route(Route::Resources).with_view(view.id()),
        toasts: Vec::new(),
        view_id: view.id().to_string(),
        tabs,
        tab,
        overview: overview_cards(grand_total)?,
        categories: panels,
        fields,
        summary,
    })?;
    Ok(page.into_response())
}

/// Recompute the calculator from the full form on every input change.
pub async fn calculator(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    Form(form): Form<CalculatorForm>,
) -> Result<Response, AppError> {
    let view = state
        .resource_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let mut guard = view.lock().await;
    let summary = guard.apply(&form);
    let fragment = CalculatorSummaryFragment::build(&mut guard, summary, true)?;
    Ok(render(&fragment)?.into_response())
}

/// "Add" button on a cost-tracking category.
pub async fn add_resource(
    State(state): State<AppState>,
    Path((view_id, category)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let view = state
        .resource_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let categories = resource_categories();
    let category = find_category(&categories, &category)
        .ok_or_else(|| AppError::NotFound(format!("unknown resource category: {}", category)))?;

    let mut guard = view.lock().await;
    guard.add_resource(category.title);
    Ok(render(&ToastsFragment {
        toasts: guard.toasts.visible(),
    })?
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ToastPolicy;

    #[test]
    fn test_overview_with_zero_costs() {
        let cards = overview_cards(0.0).unwrap();
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["₹0", "₹0", "₹0", "N/A"]);
    }

    #[test]
    fn test_summary_fragment_formats_values() {
        let mut view = ResourceView::new(ToastPolicy::default());
        let summary = view.apply(&CalculatorForm {
            seeds: "100".into(),
            fertilizer: "200".into(),
            labor: "lots".into(),
            ..Default::default()
        });
        let fragment = CalculatorSummaryFragment::build(&mut view, summary, true).unwrap();
        assert_eq!(fragment.total, "₹300");
        assert_eq!(fragment.per_hectare, "₹30");
        assert_eq!(fragment.roi, "-100.0%");
        assert_eq!(fragment.rejected, vec!["Labor Cost (₹)"]);
    }

    #[test]
    fn test_outlook_cards_are_fixed() {
        let mut view = ResourceView::new(ToastPolicy::default());
        for seeds in ["0", "5000", "1e12"] {
            let summary = view.apply(&CalculatorForm {
                seeds: seeds.into(),
                ..Default::default()
            });
            let html = CalculatorSummaryFragment::build(&mut view, summary, false)
                .unwrap()
                .render()
                .unwrap();
            assert!(html.contains("3.2 T/Ha"));
            assert!(html.contains("At ₹33,400/ton"));
            assert!(html.contains("28%"));
            assert!(html.contains("At 4.5 T/Ha yield"));
        }
    }

    #[test]
    fn test_share_is_na_when_nothing_tracked() {
        let categories = resource_categories();
        let panel = CategoryPanel::build(&categories[0], 0.0).unwrap();
        assert_eq!(panel.items[0].share, "N/A");
        assert_eq!(panel.total, "₹0");
    }
}
