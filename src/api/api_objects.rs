use serde::{Deserialize, Serialize};

use crate::messages::Language;
use crate::pages::{Page, Section};
use crate::risk_prediction::risk_prediction::Recommendation;
use crate::risk_prediction::risk_prediction_utils::{CognitiveExercise, JobStatus, FEATURE_NAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body of every `/api/predict` answer, success or error
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl PredictionResponse {
    pub fn success(recommendation: Recommendation, language: Language) -> Self {
        PredictionResponse {
            status: ResponseStatus::Success,
            message: recommendation.message(language).to_string(),
            recommendation: Some(recommendation),
            fields: Vec::new(),
        }
    }

    pub fn error(message: String, fields: Vec<String>) -> Self {
        PredictionResponse {
            status: ResponseStatus::Error,
            message,
            recommendation: None,
            fields,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl PageResponse {
    pub fn new(page: Page, language: Language) -> Self {
        PageResponse {
            id: page.slug(),
            title: page.title(language),
            sections: page.sections(language),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Float,
    Select,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Description of one input control for the form renderer
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl FormField {
    /// Widgets for all fourteen inputs, in feature order
    pub fn schema(language: Language) -> Vec<FormField> {
        FEATURE_NAMES
            .iter()
            .map(|&name| {
                let (kind, min, max, step) = match name {
                    "age" => (FieldKind::Integer, Some(20.0), Some(100.0), Some(1.0)),
                    // Smallest value the encoder accepts
                    "bmi" => (FieldKind::Float, Some(0.1), None, Some(0.1)),
                    "sleep_duration" => (FieldKind::Integer, Some(1.0), Some(24.0), Some(1.0)),
                    "screen_time" => (FieldKind::Integer, Some(1.0), Some(20.0), Some(1.0)),
                    "daily_steps" => (FieldKind::Integer, Some(1.0), None, Some(100.0)),
                    "social_interaction" | "processed_food_frequency" => {
                        (FieldKind::Integer, Some(1.0), None, Some(1.0))
                    }
                    "job_status" | "cognitive_exercise" => (FieldKind::Select, None, None, None),
                    // 0-5 severity scales
                    _ => (FieldKind::Integer, Some(0.0), Some(5.0), Some(1.0)),
                };
                let options = match name {
                    "job_status" => JobStatus::ALL
                        .into_iter()
                        .map(|status| FieldOption {
                            value: status.key(),
                            label: language.job_status_label(status),
                        })
                        .collect(),
                    "cognitive_exercise" => CognitiveExercise::ALL
                        .into_iter()
                        .map(|exercise| FieldOption {
                            value: exercise.key(),
                            label: language.cognitive_exercise_label(exercise),
                        })
                        .collect(),
                    _ => Vec::new(),
                };
                FormField {
                    name,
                    label: language.field_label(name),
                    kind,
                    min,
                    max,
                    step,
                    options,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub model_loaded: bool,
}
