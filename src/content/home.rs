//! Landing page content

use crate::icons::Icon;

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::TrendingUp,
        title: "AI Crop Yield Prediction",
        description: "Advanced machine learning algorithms analyze soil data, weather patterns, and historical yields to predict crop performance with 90%+ accuracy.",
        link: "/prediction",
    },
    Feature {
        icon: Icon::CloudSun,
        title: "Soil & Weather Analysis",
        description: "Real-time monitoring of soil health parameters and weather conditions to optimize farming decisions and resource allocation.",
        link: "/soil-weather",
    },
    Feature {
        icon: Icon::Sprout,
        title: "Smart Crop Recommendations",
        description: "Get personalized crop suggestions based on your soil type, climate conditions, and current market trends for maximum profitability.",
        link: "/recommendations",
    },
    Feature {
        icon: Icon::BarChart3,
        title: "Market Insights & Analytics",
        description: "Access comprehensive market data, pricing trends, and export opportunities to make informed business decisions.",
        link: "/market",
    },
];

pub struct HeadlineStat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub static HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { number: "90%+", label: "Prediction Accuracy", icon: Icon::Award },
    HeadlineStat { number: "10K+", label: "Active Farmers", icon: Icon::Users },
    HeadlineStat { number: "25%", label: "Average Yield Increase", icon: Icon::TrendingUp },
    HeadlineStat { number: "50+", label: "Countries Served", icon: Icon::Globe },
];

pub static BENEFITS: &[&str] = &[
    "Increase crop yields by up to 25% with AI predictions",
    "Reduce resource waste and optimize input costs",
    "Make data-driven decisions with real-time insights",
    "Access global market trends and pricing data",
    "Get personalized recommendations for your farm",
    "Monitor and improve soil health continuously",
];
