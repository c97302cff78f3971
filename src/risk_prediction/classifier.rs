use ndarray::Array;
use ort::{inputs, session::Session, value::Tensor};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("failed to load model from {}: {source}", .path.display())]
    ArtifactInvalid {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    #[error("model {} declares no inputs", .0.display())]
    NoInputs(PathBuf),

    #[error("model {} declares no outputs", .0.display())]
    NoOutputs(PathBuf),
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference runtime error: {0}")]
    Runtime(#[from] ort::Error),

    #[error("could not shape input: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("unsupported model output: {0}")]
    UnsupportedOutput(String),

    #[error("unexpected class label {0}, expected 0 or 1")]
    UnexpectedLabel(i64),

    #[error("model session is unusable after an earlier panic")]
    SessionPoisoned,
}

/// A loaded binary classifier. `predict` receives one row of features and
/// returns the raw class label.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError>;
}

/// Classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    // ort needs `&mut Session` to run
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let model_path = model_path.as_ref();

        // Check if file exists first so a missing artifact is told apart from a corrupt one
        if !model_path.is_file() {
            return Err(ModelLoadError::ArtifactMissing(model_path.to_path_buf()));
        }

        let session = Session::builder()
            .and_then(|builder| builder.commit_from_file(model_path))
            .map_err(|source| ModelLoadError::ArtifactInvalid {
                path: model_path.to_path_buf(),
                source,
            })?;

        let input_name = match session.inputs.first() {
            Some(input) => input.name.clone(),
            None => return Err(ModelLoadError::NoInputs(model_path.to_path_buf())),
        };
        let output_name = match session.outputs.first() {
            Some(output) => output.name.clone(),
            None => return Err(ModelLoadError::NoOutputs(model_path.to_path_buf())),
        };

        tracing::info!(
            path = %model_path.display(),
            input = %input_name,
            output = %output_name,
            "classifier loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError> {
        // Single-row batch of shape (1, num_features)
        let input_array = Array::from_shape_vec((1, features.len()), features.to_vec())?;
        let input_value = Tensor::from_array(input_array)?;

        let mut session = self.session.lock().map_err(|_| InferenceError::SessionPoisoned)?;
        let outputs = session.run(inputs![self.input_name.as_str() => input_value])?;
        let output = &outputs[self.output_name.as_str()];

        // Label tensors come out as i64; probability tensors as f32 with one column per class
        if let Ok((_shape, data)) = output.try_extract_tensor::<i64>() {
            return label_from_labels(data);
        }

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::UnsupportedOutput(e.to_string()))?;
        label_from_probabilities(shape, data)
    }
}

fn label_from_labels(data: &[i64]) -> Result<i64, InferenceError> {
    data.first()
        .copied()
        .ok_or_else(|| InferenceError::UnsupportedOutput("empty label tensor".to_string()))
}

/// Argmax over the first row of a two-class probability tensor; ties go to class 0
fn label_from_probabilities(shape: &[i64], data: &[f32]) -> Result<i64, InferenceError> {
    match (shape.last(), data) {
        (Some(2), [prob_class_0, prob_class_1, ..]) => Ok(if prob_class_0 >= prob_class_1 { 0 } else { 1 }),
        _ => Err(InferenceError::UnsupportedOutput(format!(
            "probability tensor of shape {:?}",
            shape
        ))),
    }
}

/// Outcome of the startup load. Prediction stays disabled when the model
/// could not be loaded; there is no retry.
#[derive(Clone)]
pub enum ModelStatus {
    Ready(Arc<dyn Classifier>),
    Unavailable { model_path: PathBuf, reason: String },
}

impl ModelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready(_))
    }
}

pub fn load_model(model_path: &Path) -> ModelStatus {
    match OnnxClassifier::load(model_path) {
        Ok(classifier) => ModelStatus::Ready(Arc::new(classifier)),
        Err(e) => {
            tracing::error!(error = %e, "prediction disabled, model could not be loaded");
            ModelStatus::Unavailable {
                model_path: model_path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}
