//! Icon set used by navigation and content tables
//!
//! Content tables reference icons as data. Every variant maps to a lucide
//! icon name, rendered client-side from `<i data-lucide="...">`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Home,
    Leaf,
    TrendingUp,
    TrendingDown,
    CloudSun,
    Sprout,
    Settings,
    BarChart3,
    DollarSign,
    Beaker,
    Droplets,
    Thermometer,
    Wind,
    MapPin,
    Calendar,
    Clock,
    Target,
    Activity,
    Award,
    Users,
    Globe,
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Lightbulb,
    Upload,
    Calculator,
    Plus,
    ArrowRight,
}

impl Icon {
    pub fn lucide_name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Leaf => "leaf",
            Icon::TrendingUp => "trending-up",
            Icon::TrendingDown => "trending-down",
            Icon::CloudSun => "cloud-sun",
            Icon::Sprout => "sprout",
            Icon::Settings => "settings",
            Icon::BarChart3 => "bar-chart-3",
            Icon::DollarSign => "dollar-sign",
            Icon::Beaker => "beaker",
            Icon::Droplets => "droplets",
            Icon::Thermometer => "thermometer",
            Icon::Wind => "wind",
            Icon::MapPin => "map-pin",
            Icon::Calendar => "calendar",
            Icon::Clock => "clock",
            Icon::Target => "target",
            Icon::Activity => "activity",
            Icon::Award => "award",
            Icon::Users => "users",
            Icon::Globe => "globe",
            Icon::CheckCircle => "check-circle",
            Icon::AlertCircle => "alert-circle",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Lightbulb => "lightbulb",
            Icon::Upload => "upload",
            Icon::Calculator => "calculator",
            Icon::Plus => "plus",
            Icon::ArrowRight => "arrow-right",
        }
    }
}

/// Direction of a trend as shown by arrows and badge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    pub fn icon(&self) -> Icon {
        match self {
            Trend::Up => Icon::TrendingUp,
            Trend::Down => Icon::TrendingDown,
            Trend::Stable => Icon::Target,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-success",
            Trend::Down => "text-destructive",
            Trend::Stable => "text-muted-foreground",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Trend::Up => "badge-default",
            Trend::Down => "badge-destructive",
            Trend::Stable => "badge-secondary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_icons() {
        assert_eq!(Trend::Up.icon(), Icon::TrendingUp);
        assert_eq!(Trend::Down.icon(), Icon::TrendingDown);
        assert_eq!(Trend::Stable.icon().lucide_name(), "target");
    }
}
