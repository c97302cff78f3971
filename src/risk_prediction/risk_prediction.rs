use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::messages::Language;
use crate::risk_prediction::classifier::{Classifier, InferenceError, ModelStatus};
use crate::risk_prediction::risk_prediction_utils::{encode, EncodeError, PredictionForm, RiskFeatures};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ConsultDoctor,
    NoConsultation,
}

impl Recommendation {
    pub fn from_label(label: i64) -> Result<Self, InferenceError> {
        match label {
            1 => Ok(Recommendation::ConsultDoctor),
            0 => Ok(Recommendation::NoConsultation),
            other => Err(InferenceError::UnexpectedLabel(other)),
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        match self {
            Recommendation::ConsultDoctor => language.consult_doctor(),
            Recommendation::NoConsultation => language.no_consultation(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model not available ({reason})")]
    ModelUnavailable { model_path: PathBuf, reason: String },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Runs the classifier on one encoded submission
pub fn predict_risk(classifier: &dyn Classifier, features: &RiskFeatures) -> Result<Recommendation, InferenceError> {
    let label = classifier.predict(&features.to_vec())?;
    Recommendation::from_label(label)
}

/// Entry point for one form submission: validate, encode, infer.
/// Holds the model handle loaded at startup and nothing else.
pub struct RiskPredictor {
    model: ModelStatus,
    language: Language,
}

impl RiskPredictor {
    pub fn new(model: ModelStatus, language: Language) -> Self {
        RiskPredictor { model, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_ready()
    }

    pub fn handle_submission(&self, form: &PredictionForm) -> Result<Recommendation, PredictionError> {
        let classifier = match &self.model {
            ModelStatus::Ready(classifier) => classifier,
            ModelStatus::Unavailable { model_path, reason } => {
                return Err(PredictionError::ModelUnavailable {
                    model_path: model_path.clone(),
                    reason: reason.clone(),
                });
            }
        };

        let features = encode(form)?;
        let recommendation = predict_risk(classifier.as_ref(), &features)?;
        tracing::debug!(?recommendation, "prediction completed");
        Ok(recommendation)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::risk_prediction::risk_prediction_utils::tests::sample_form;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Returns a fixed label and remembers every row it was given
    pub(crate) struct StubClassifier {
        pub label: i64,
        pub calls: AtomicUsize,
        pub last_row: Mutex<Vec<f32>>,
    }

    impl StubClassifier {
        pub(crate) fn new(label: i64) -> Arc<Self> {
            Arc::new(StubClassifier {
                label,
                calls: AtomicUsize::new(0),
                last_row: Mutex::new(Vec::new()),
            })
        }
    }

    impl Classifier for StubClassifier {
        fn predict(&self, features: &[f32]) -> Result<i64, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_row.lock().unwrap() = features.to_vec();
            Ok(self.label)
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _features: &[f32]) -> Result<i64, InferenceError> {
            Err(InferenceError::UnsupportedOutput("string tensor".to_string()))
        }
    }

    fn predictor_with(classifier: Arc<dyn Classifier>) -> RiskPredictor {
        RiskPredictor::new(ModelStatus::Ready(classifier), Language::English)
    }

    #[test]
    fn test_labels_map_to_recommendations() {
        assert_eq!(Recommendation::from_label(1).unwrap(), Recommendation::ConsultDoctor);
        assert_eq!(Recommendation::from_label(0).unwrap(), Recommendation::NoConsultation);
        assert!(matches!(
            Recommendation::from_label(2),
            Err(InferenceError::UnexpectedLabel(2))
        ));
        assert_eq!(
            Recommendation::ConsultDoctor.message(Language::English),
            "It is recommended to consult a doctor."
        );
        assert_eq!(
            Recommendation::NoConsultation.message(Language::Indonesian),
            "Tidak disarankan untuk konsultasi ke dokter."
        );
    }

    #[test]
    fn test_submission_passes_encoded_row() {
        let stub = StubClassifier::new(1);
        let predictor = predictor_with(stub.clone());

        let recommendation = predictor.handle_submission(&sample_form()).unwrap();
        assert_eq!(recommendation, Recommendation::ConsultDoctor);
        assert_eq!(
            *stub.last_row.lock().unwrap(),
            vec![70.0, 4.0, 24.5, 6.0, 3.0, 1.0, 5.0, 2000.0, 3.0, 2.0, 1.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_invalid_submission_never_reaches_classifier() {
        let stub = StubClassifier::new(1);
        let predictor = predictor_with(stub.clone());
        let mut form = sample_form();
        form.sleep_duration = Some(0);

        let err = predictor.handle_submission(&form).unwrap_err();
        assert!(matches!(err, PredictionError::Encode(EncodeError::Validation(_))));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_identical_submissions_give_identical_results() {
        let predictor = predictor_with(StubClassifier::new(0));
        let first = predictor.handle_submission(&sample_form()).unwrap();
        let second = predictor.handle_submission(&sample_form()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Recommendation::NoConsultation);
    }

    #[test]
    fn test_unexpected_label_is_an_error() {
        let predictor = predictor_with(StubClassifier::new(7));
        assert!(matches!(
            predictor.handle_submission(&sample_form()),
            Err(PredictionError::Inference(InferenceError::UnexpectedLabel(7)))
        ));
    }

    #[test]
    fn test_inference_failure_keeps_cause() {
        let predictor = predictor_with(Arc::new(FailingClassifier));
        let err = predictor.handle_submission(&sample_form()).unwrap_err();
        assert!(err.to_string().contains("string tensor"), "{err}");
    }

    #[test]
    fn test_unavailable_model_rejects_submissions() {
        let predictor = RiskPredictor::new(
            ModelStatus::Unavailable {
                model_path: PathBuf::from("RFModel.onnx"),
                reason: "model file not found: RFModel.onnx".to_string(),
            },
            Language::English,
        );
        assert!(!predictor.is_ready());
        assert!(matches!(
            predictor.handle_submission(&sample_form()),
            Err(PredictionError::ModelUnavailable { .. })
        ));
    }
}
