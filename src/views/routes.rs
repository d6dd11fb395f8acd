//! Page routes and navigation entries

use crate::icons::Icon;

/// Every page the router can select. Unmatched paths fall back to `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Prediction,
    SoilWeather,
    Recommendations,
    Optimization,
    Dashboard,
    Resources,
    Market,
    NotFound,
}

impl Route {
    /// Routed pages in navigation order (excludes `NotFound`).
    pub const PAGES: [Route; 8] = [
        Route::Home,
        Route::Prediction,
        Route::SoilWeather,
        Route::Recommendations,
        Route::Optimization,
        Route::Dashboard,
        Route::Resources,
        Route::Market,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Prediction => "/prediction",
            Route::SoilWeather => "/soil-weather",
            Route::Recommendations => "/recommendations",
            Route::Optimization => "/optimization",
            Route::Dashboard => "/dashboard",
            Route::Resources => "/resources",
            Route::Market => "/market",
            Route::NotFound => "*",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Prediction => "Yield Prediction",
            Route::SoilWeather => "Soil & Weather",
            Route::Recommendations => "Crop Recommendations",
            Route::Optimization => "Optimization",
            Route::Dashboard => "Dashboard",
            Route::Resources => "Resources",
            Route::Market => "Market Insights",
            Route::NotFound => "Not Found",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Route::Home => Icon::Home,
            Route::Prediction => Icon::TrendingUp,
            Route::SoilWeather => Icon::CloudSun,
            Route::Recommendations => Icon::Sprout,
            Route::Optimization => Icon::Settings,
            Route::Dashboard => Icon::BarChart3,
            Route::Resources => Icon::DollarSign,
            Route::Market => Icon::Leaf,
            Route::NotFound => Icon::AlertCircle,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "KisanSahay - AI-Powered Farming",
            Route::Prediction => "AI Crop Yield Prediction",
            Route::SoilWeather => "Soil & Weather Analysis",
            Route::Recommendations => "Crop Recommendation System",
            Route::Optimization => "AI-Powered Optimization",
            Route::Dashboard => "Analytics Dashboard",
            Route::Resources => "Resource Management",
            Route::Market => "Market Insights & Pricing",
            Route::NotFound => "Page not found",
        }
    }

    /// Whether this route's nav entry is active for `path`.
    ///
    /// Active when the path equals the route or continues it at a segment
    /// boundary, so `/` is only active at the root.
    pub fn is_active_for(&self, path: &str) -> bool {
        if *self == Route::NotFound {
            return false;
        }
        let path = normalize(path);
        let own = self.path();
        if path == own {
            return true;
        }
        own != "/"
            && path
                .strip_prefix(own)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Navigation entry as rendered in the header.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub active: bool,
}

/// Fixed, ordered navigation list with the active entry flagged.
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    Route::PAGES
        .iter()
        .map(|route| NavItem {
            path: route.path(),
            label: route.nav_label(),
            icon: route.icon(),
            active: route.is_active_for(current_path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let mut paths: Vec<_> = Route::PAGES.iter().map(Route::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Route::PAGES.len());
        assert!(!Route::PAGES.contains(&Route::NotFound));
    }

    #[test]
    fn test_exactly_one_active_entry() {
        for route in Route::PAGES {
            let items = nav_items(route.path());
            let active: Vec<_> = items.iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1, "path {}", route.path());
            assert_eq!(active[0].path, route.path());
        }
    }

    #[test]
    fn test_root_not_active_on_subpages() {
        assert!(!Route::Home.is_active_for("/dashboard"));
        assert!(Route::Prediction.is_active_for("/prediction/abc"));
        assert!(!Route::Prediction.is_active_for("/predictionx"));
        assert!(nav_items("/unknown-xyz").iter().all(|i| !i.active));
    }
}
