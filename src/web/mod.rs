//! Server-rendered HTML: askama templates and htmx fragment handlers

pub mod handlers;

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::views::toasts::VisibleToast;
use crate::views::{nav_items, NavItem, Route};

/// Layout data shared by every full page (`base.html`).
#[derive(Debug, Clone)]
pub struct Shell {
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    /// Set on interactive pages so the page-leave beacon can unmount the view
    pub view_id: Option<String>,
}

impl Shell {
    pub fn for_route(route: Route) -> Self {
        Self::for_path(route.title(), route.path())
    }

    pub fn for_path(title: &'static str, path: &str) -> Self {
        Self {
            title,
            nav: nav_items(path),
            view_id: None,
        }
    }

    pub fn with_view(mut self, view_id: &str) -> Self {
        self.view_id = Some(view_id.to_string());
        self
    }
}

/// Render a template, mapping askama failures to a 500.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// Toast list for static pages, which never post any.
pub fn no_toasts() -> Vec<VisibleToast> {
    Vec::new()
}
