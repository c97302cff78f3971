use actix_web::{HttpResponse, Responder, web};

use crate::api::api_error::ApiError;
use crate::api::api_objects::{FormField, HealthStatus, PageResponse, PageSummary, PredictionResponse};
use crate::pages::Page;
use crate::risk_prediction::risk_prediction::RiskPredictor;
use crate::risk_prediction::risk_prediction_utils::PredictionForm;

/// Page selector: the pages a client can navigate between
pub async fn handle_list_pages(predictor: web::Data<RiskPredictor>) -> impl Responder {
    let language = predictor.language();
    let pages: Vec<PageSummary> = Page::ALL
        .into_iter()
        .map(|page| PageSummary {
            id: page.slug(),
            title: page.title(language),
        })
        .collect();
    HttpResponse::Ok().json(pages)
}

pub async fn handle_get_page(
    path: web::Path<String>,
    predictor: web::Data<RiskPredictor>,
) -> Result<HttpResponse, ApiError> {
    let page: Page = path.into_inner().parse().map_err(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(PageResponse::new(page, predictor.language())))
}

pub async fn handle_form_schema(predictor: web::Data<RiskPredictor>) -> impl Responder {
    HttpResponse::Ok().json(FormField::schema(predictor.language()))
}

/// One submission of the prediction form
pub async fn handle_predict(
    form: web::Json<PredictionForm>,
    predictor: web::Data<RiskPredictor>,
) -> Result<HttpResponse, ApiError> {
    let language = predictor.language();
    let recommendation = predictor
        .handle_submission(&form.into_inner())
        .map_err(|e| ApiError::from_prediction(e, language))?;
    tracing::info!(?recommendation, "prediction served");
    Ok(HttpResponse::Ok().json(PredictionResponse::success(recommendation, language)))
}

pub async fn handle_health(predictor: web::Data<RiskPredictor>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: predictor.is_ready(),
    })
}
