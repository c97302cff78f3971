use actix_web::{App, HttpServer, error::JsonPayloadError, web};

use crate::api::api_error::ApiError;
use crate::api::api_handlers::{
    handle_form_schema, handle_get_page, handle_health, handle_list_pages, handle_predict,
};
use crate::risk_prediction::risk_prediction::RiskPredictor;
use crate::utils::Config;

/// Undecodable bodies get the same JSON error shape as every other failure
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        ApiError::BadRequest(format!("Invalid form data: {err}")).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handle_list_pages))
        .route("/pages/{page}", web::get().to(handle_get_page))
        .route("/api/form", web::get().to(handle_form_schema))
        .route("/api/predict", web::post().to(handle_predict))
        .route("/health", web::get().to(handle_health));
}

pub async fn run_server(config: &Config, predictor: RiskPredictor) -> std::io::Result<()> {
    let predictor = web::Data::new(predictor);

    tracing::info!(bind_addr = %config.bind_addr, workers = config.workers, "starting server");
    HttpServer::new(move || App::new().app_data(predictor.clone()).configure(configure))
        .workers(config.workers.max(1))
        .bind(&config.bind_addr)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::api_objects::{PredictionResponse, ResponseStatus};
    use crate::messages::Language;
    use crate::risk_prediction::classifier::ModelStatus;
    use crate::risk_prediction::risk_prediction::Recommendation;
    use crate::risk_prediction::risk_prediction::tests::StubClassifier;
    use crate::risk_prediction::risk_prediction_utils::tests::sample_form;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;

    fn ready_predictor(label: i64) -> (RiskPredictor, std::sync::Arc<StubClassifier>) {
        let stub = StubClassifier::new(label);
        let predictor = RiskPredictor::new(ModelStatus::Ready(stub.clone()), Language::English);
        (predictor, stub)
    }

    #[actix_web::test]
    async fn test_predict_returns_consult_message() {
        let (predictor, _stub) = ready_predictor(1);
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(sample_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: PredictionResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, ResponseStatus::Success);
        assert_eq!(body.recommendation, Some(Recommendation::ConsultDoctor));
        assert_eq!(body.message, "It is recommended to consult a doctor.");
    }

    #[actix_web::test]
    async fn test_predict_is_repeatable() {
        let (predictor, stub) = ready_predictor(0);
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let mut messages = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/predict")
                .set_json(sample_form())
                .to_request();
            let body: PredictionResponse = test::call_and_read_body_json(&app, req).await;
            messages.push(body.message);
        }
        assert_eq!(messages[0], messages[1]);
        assert_eq!(messages[0], "Consulting a doctor is not recommended.");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_invalid_form_is_rejected_before_inference() {
        let (predictor, stub) = ready_predictor(1);
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let mut form = sample_form();
        form.daily_steps = Some(0);
        form.job_status = None;
        let req = test::TestRequest::post().uri("/api/predict").set_json(form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: PredictionResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, ResponseStatus::Error);
        assert_eq!(body.message, "Please fill in all fields before predicting!");
        assert_eq!(body.fields, vec!["job_status", "daily_steps"]);
        assert!(body.recommendation.is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_error_shape() {
        let (predictor, stub) = ready_predictor(1);
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"age": "seventy"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: PredictionResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, ResponseStatus::Error);
        assert!(body.message.starts_with("Invalid form data"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_missing_model_disables_prediction() {
        let predictor = RiskPredictor::new(
            ModelStatus::Unavailable {
                model_path: PathBuf::from("RFModel.onnx"),
                reason: "model file not found: RFModel.onnx".to_string(),
            },
            Language::English,
        );
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(sample_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: PredictionResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.message,
            "Model not found. Make sure the file 'RFModel.onnx' is available in the expected directory."
        );

        // Pages stay reachable
        let req = test::TestRequest::get().uri("/pages/explanation").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health["model_loaded"], false);
    }

    #[actix_web::test]
    async fn test_pages_and_form_schema() {
        let (predictor, _stub) = ready_predictor(0);
        let app = test::init_service(
            App::new().app_data(web::Data::new(predictor)).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let pages: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pages[0]["id"], "explanation");
        assert_eq!(pages[1]["id"], "prediction");

        let req = test::TestRequest::get().uri("/pages/prediction").to_request();
        let page: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["title"], "Alzheimer's Risk Prediction");

        let req = test::TestRequest::get().uri("/pages/settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/form").to_request();
        let schema: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(schema.as_array().unwrap().len(), 14);
        assert_eq!(schema[1]["kind"], "select");
    }
}
