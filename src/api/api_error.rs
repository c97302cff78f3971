use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::api::api_objects::PredictionResponse;
use crate::messages::Language;
use crate::risk_prediction::classifier::InferenceError;
use crate::risk_prediction::risk_prediction::PredictionError;
use crate::risk_prediction::risk_prediction_utils::EncodeError;

/// Errors surfaced to the client. All of them are rendered with the same
/// body as a successful prediction.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Inference(String),

    #[error("{0}")]
    ModelUnavailable(String),
}

impl ApiError {
    pub fn from_prediction(err: PredictionError, language: Language) -> Self {
        match err {
            PredictionError::ModelUnavailable { model_path, .. } => {
                ApiError::ModelUnavailable(language.model_not_found(&model_path))
            }
            PredictionError::Encode(EncodeError::Validation(fields)) => ApiError::Validation {
                message: language.fill_all_fields().to_string(),
                fields: fields.into_iter().map(str::to_string).collect(),
            },
            PredictionError::Encode(e @ EncodeError::UnknownCategory { .. }) => {
                ApiError::BadRequest(language.unexpected_error(&e.to_string()))
            }
            PredictionError::Inference(
                e @ (InferenceError::UnexpectedLabel(_) | InferenceError::SessionPoisoned),
            ) => ApiError::Inference(language.unexpected_error(&e.to_string())),
            PredictionError::Inference(e) => ApiError::Inference(language.prediction_failed(&e.to_string())),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), message = %self, "request rejected");
        }

        let fields = match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            _ => Vec::new(),
        };
        HttpResponse::build(status).json(PredictionResponse::error(self.to_string(), fields))
    }
}
