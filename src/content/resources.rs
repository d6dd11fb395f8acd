//! Resource cost-tracking line items
//!
//! Quantities and unit costs are placeholders (zero) until inventory entry
//! exists; every total below is a reduction recomputed on each render.

use crate::icons::Icon;

#[derive(Debug, Clone)]
pub struct ResourceLineItem {
    pub name: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
    pub cost_per_unit: f64,
}

impl ResourceLineItem {
    const fn placeholder(name: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            quantity: 0.0,
            unit,
            cost_per_unit: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }
}

#[derive(Debug, Clone)]
pub struct ResourceCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub items: Vec<ResourceLineItem>,
}

impl ResourceCategory {
    pub fn total(&self) -> f64 {
        self.items.iter().map(ResourceLineItem::total).sum()
    }
}

pub fn resource_categories() -> Vec<ResourceCategory> {
    vec![
        ResourceCategory {
            key: "seeds",
            title: "Seeds",
            icon: Icon::Sprout,
            items: vec![
                ResourceLineItem::placeholder("Wheat Seeds (Premium)", "kg"),
                ResourceLineItem::placeholder("Corn Seeds (Hybrid)", "kg"),
                ResourceLineItem::placeholder("Rice Seeds (High Yield)", "kg"),
            ],
        },
        ResourceCategory {
            key: "fertilizers",
            title: "Fertilizers",
            icon: Icon::Beaker,
            items: vec![
                ResourceLineItem::placeholder("NPK 15-15-15", "kg"),
                ResourceLineItem::placeholder("Urea (46% N)", "kg"),
                ResourceLineItem::placeholder("Phosphate Rock", "kg"),
            ],
        },
        ResourceCategory {
            key: "water",
            title: "Water & Irrigation",
            icon: Icon::Droplets,
            items: vec![
                ResourceLineItem::placeholder("Irrigation Water", "cubic meters"),
                ResourceLineItem::placeholder("Drip Irrigation Maintenance", "season"),
                ResourceLineItem::placeholder("Pump Operation", "hours"),
            ],
        },
        ResourceCategory {
            key: "labor",
            title: "Labor",
            icon: Icon::Calendar,
            items: vec![
                ResourceLineItem::placeholder("Planting & Seeding", "hours"),
                ResourceLineItem::placeholder("Harvesting", "hours"),
                ResourceLineItem::placeholder("General Maintenance", "hours"),
            ],
        },
    ]
}

/// Grand total over every category and line item.
pub fn total_costs(categories: &[ResourceCategory]) -> f64 {
    categories.iter().map(ResourceCategory::total).sum()
}

pub fn find_category<'a>(categories: &'a [ResourceCategory], key: &str) -> Option<&'a ResourceCategory> {
    categories.iter().find(|c| c.key == key)
}
