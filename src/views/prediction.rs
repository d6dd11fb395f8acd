//! Yield Prediction page state
//!
//! `NoFile -> FileSelected -> Predicting -> Predicted`. Only the selected
//! file's name and size are kept; its contents are never inspected.

use serde::Serialize;

use super::toasts::{Toast, ToastPolicy, Toaster};
use crate::format::format_kib;

/// `accept` hint offered to the browser. Not enforced server-side.
pub const ACCEPTED_EXTENSIONS: &str = ".csv,.xlsx,.xls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionPhase {
    NoFile,
    FileSelected,
    Predicting,
    Predicted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub name: String,
    pub size_bytes: u64,
}

impl FileRef {
    pub fn size_display(&self) -> String {
        format_kib(self.size_bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Optimal,
    Good,
    Low,
}

impl FactorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FactorStatus::Optimal => "optimal",
            FactorStatus::Good => "good",
            FactorStatus::Low => "low",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            FactorStatus::Optimal => "badge-default",
            _ => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionFactor {
    pub name: &'static str,
    pub value: &'static str,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub crop: &'static str,
    pub predicted_yield_t_ha: f64,
    pub confidence_pct: u32,
    pub factors: Vec<PredictionFactor>,
    pub recommendations: Vec<&'static str>,
}

pub fn mock_prediction() -> PredictionResult {
    PredictionResult {
        crop: "Wheat",
        predicted_yield_t_ha: 4.2,
        confidence_pct: 87,
        factors: vec![
            PredictionFactor { name: "Soil pH", value: "6.8", status: FactorStatus::Optimal },
            PredictionFactor { name: "Nitrogen", value: "45 kg/ha", status: FactorStatus::Good },
            PredictionFactor { name: "Rainfall", value: "650mm", status: FactorStatus::Optimal },
            PredictionFactor { name: "Temperature", value: "22°C avg", status: FactorStatus::Good },
        ],
        recommendations: vec![
            "Consider increasing phosphorus fertilizer by 10%",
            "Optimal planting window: March 15-30",
            "Monitor for pest activity in week 8-12",
        ],
    }
}

/// Outcome of a "Run Prediction" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRequest {
    Started,
    MissingFile,
    AlreadyPredicting,
}

#[derive(Debug)]
pub struct YieldPredictionView {
    phase: PredictionPhase,
    file: Option<FileRef>,
    result: Option<PredictionResult>,
    pub toasts: Toaster,
}

impl YieldPredictionView {
    pub fn new(toast_policy: ToastPolicy) -> Self {
        Self {
            phase: PredictionPhase::NoFile,
            file: None,
            result: None,
            toasts: Toaster::new(toast_policy),
        }
    }

    pub fn phase(&self) -> PredictionPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&FileRef> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Record the selected file. A selection during an in-flight prediction
    /// replaces the reference but leaves the prediction running.
    pub fn select_file(&mut self, file: FileRef) {
        self.toasts.push(Toast::info(
            "File uploaded",
            format!("{} ready for analysis", file.name),
        ));
        self.file = Some(file);
        if self.phase == PredictionPhase::NoFile {
            self.phase = PredictionPhase::FileSelected;
        }
    }

    pub fn run(&mut self) -> RunRequest {
        if self.file.is_none() {
            self.toasts.push(Toast::destructive(
                "No file selected",
                "Please upload a CSV file with your crop data",
            ));
            return RunRequest::MissingFile;
        }
        if self.phase == PredictionPhase::Predicting {
            return RunRequest::AlreadyPredicting;
        }
        self.phase = PredictionPhase::Predicting;
        RunRequest::Started
    }

    /// Complete the simulated prediction, overwriting any previous result.
    pub fn resolve(&mut self) {
        if self.phase != PredictionPhase::Predicting {
            return;
        }
        self.result = Some(mock_prediction());
        self.phase = PredictionPhase::Predicted;
        self.toasts.push(Toast::info(
            "Prediction Complete",
            "AI analysis has been generated successfully",
        ));
    }
}
