//! Resource Management page state: the project cost calculator
//!
//! Five independent rupee fields. Text that does not parse to a finite
//! number counts as zero, as does a value that would push the projected
//! total past the finite range. Rejected fields are reported back so the
//! silent zero is visible to the user.

use serde::Deserialize;

use super::toasts::{Toast, ToastPolicy, Toaster};
use crate::derived::{cost_per_hectare, roi_percent, EXPECTED_REVENUE_INR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    Seeds,
    Fertilizer,
    Water,
    Labor,
    Equipment,
}

impl CalculatorField {
    pub const ALL: [CalculatorField; 5] = [
        CalculatorField::Seeds,
        CalculatorField::Fertilizer,
        CalculatorField::Water,
        CalculatorField::Labor,
        CalculatorField::Equipment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CalculatorField::Seeds => "seeds",
            CalculatorField::Fertilizer => "fertilizer",
            CalculatorField::Water => "water",
            CalculatorField::Labor => "labor",
            CalculatorField::Equipment => "equipment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculatorField::Seeds => "Seeds Cost (₹)",
            CalculatorField::Fertilizer => "Fertilizer Cost (₹)",
            CalculatorField::Water => "Water & Irrigation (₹)",
            CalculatorField::Labor => "Labor Cost (₹)",
            CalculatorField::Equipment => "Equipment & Machinery (₹)",
        }
    }
}

/// Parse a numeric field. Blank, malformed, NaN and infinite input → `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raw form submission, one string per field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub seeds: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub labor: String,
    #[serde(default)]
    pub equipment: String,
}

impl CalculatorForm {
    pub fn raw(&self, field: CalculatorField) -> &str {
        match field {
            CalculatorField::Seeds => &self.seeds,
            CalculatorField::Fertilizer => &self.fertilizer,
            CalculatorField::Water => &self.water,
            CalculatorField::Labor => &self.labor,
            CalculatorField::Equipment => &self.equipment,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculatorInputs {
    pub seeds: f64,
    pub fertilizer: f64,
    pub water: f64,
    pub labor: f64,
    pub equipment: f64,
}

impl CalculatorInputs {
    pub fn get(&self, field: CalculatorField) -> f64 {
        match field {
            CalculatorField::Seeds => self.seeds,
            CalculatorField::Fertilizer => self.fertilizer,
            CalculatorField::Water => self.water,
            CalculatorField::Labor => self.labor,
            CalculatorField::Equipment => self.equipment,
        }
    }

    fn slot(&mut self, field: CalculatorField) -> &mut f64 {
        match field {
            CalculatorField::Seeds => &mut self.seeds,
            CalculatorField::Fertilizer => &mut self.fertilizer,
            CalculatorField::Water => &mut self.water,
            CalculatorField::Labor => &mut self.labor,
            CalculatorField::Equipment => &mut self.equipment,
        }
    }

    /// Update one field. Returns `false` when the text was rejected and
    /// the field fell back to zero.
    pub fn set(&mut self, field: CalculatorField, raw: &str) -> bool {
        let parsed = parse_amount(raw);
        *self.slot(field) = parsed.unwrap_or(0.0);
        parsed.is_some() || raw.trim().is_empty()
    }

    pub fn projected_total(&self) -> f64 {
        CalculatorField::ALL.iter().map(|f| self.get(*f)).sum()
    }

    pub fn summary(&self) -> CalculatorSummary {
        let total = self.projected_total();
        CalculatorSummary {
            total,
            per_hectare: cost_per_hectare(total),
            roi_pct: roi_percent(EXPECTED_REVENUE_INR, total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorSummary {
    pub total: f64,
    pub per_hectare: f64,
    /// `None` while the total is zero
    pub roi_pct: Option<f64>,
}

#[derive(Debug)]
pub struct ResourceView {
    inputs: CalculatorInputs,
    rejected: Vec<CalculatorField>,
    pub toasts: Toaster,
}

impl ResourceView {
    pub fn new(toast_policy: ToastPolicy) -> Self {
        Self {
            inputs: CalculatorInputs::default(),
            rejected: Vec::new(),
            toasts: Toaster::new(toast_policy),
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn rejected(&self) -> &[CalculatorField] {
        &self.rejected
    }

    /// Apply a full form submission and return the recomputed summary.
    ///
    /// The projected total is always finite afterwards.
    pub fn apply(&mut self, form: &CalculatorForm) -> CalculatorSummary {
        self.rejected.clear();
        let mut running = 0.0;
        for field in CalculatorField::ALL {
            let accepted = self.inputs.set(field, form.raw(field));
            let value = self.inputs.get(field);
            if accepted && (running + value).is_finite() {
                running += value;
            } else {
                *self.inputs.slot(field) = 0.0;
                self.rejected.push(field);
            }
        }
        if !self.rejected.is_empty() {
            tracing::warn!(fields = ?self.rejected, "calculator input unusable, counted as zero");
            let labels: Vec<_> = self.rejected.iter().map(CalculatorField::label).collect();
            self.toasts.push(Toast::warning(
                "Invalid number",
                format!("{} counted as ₹0", labels.join(", ")),
            ));
        }
        self.inputs.summary()
    }

    /// "Add" on a cost-tracking category.
    pub fn add_resource(&mut self, category_title: &str) {
        self.toasts.push(Toast::info(
            "Resource Added",
            format!(
                "New {} resource has been added to your inventory",
                category_title.to_lowercase()
            ),
        ));
    }
}
