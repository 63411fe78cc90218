//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::calculate::{CalculateError, CalculationInput, calculate};
use crate::domain::{Postcode, format_postcode};
use crate::travel::TravelCostError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/calculate", post(calculate_form))
        .route("/api/calculate", post(calculate_json))
        .route("/api/postcode/format", get(format_postcode_value))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Calculator page with an empty form.
async fn index_page() -> Result<Html<String>, AppError> {
    render(&IndexTemplate::default())
}

/// Handle a form submission, re-rendering the page with the outcome.
async fn calculate_form(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Result<Response, AppError> {
    let outcome = calculate(state.travel.as_ref(), &CalculationInput::from(&form)).await;

    let mut template = IndexTemplate {
        start_postcode: format_postcode(&form.start_postcode),
        end_postcode: format_postcode(&form.end_postcode),
        hourly_rate: form.hourly_rate,
        ..Default::default()
    };

    let status = match outcome {
        Ok(calc) => {
            template.breakdown = Some(BreakdownView::from_calculation(&calc));
            StatusCode::OK
        }
        Err(e) => {
            let status = status_for(&e);
            log_failure(status, &e);
            template.error = Some(e.user_message().to_string());
            status
        }
    };

    Ok((status, render(&template)?).into_response())
}

/// JSON calculation endpoint.
async fn calculate_json(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
        field: None,
    })?;

    let calc = calculate(state.travel.as_ref(), &CalculationInput::from(req)).await?;

    Ok(Json(CalculateResponse::from_calculation(&calc, Utc::now())))
}

/// Format a partially typed postcode and report whether it is valid.
async fn format_postcode_value(
    Query(query): Query<FormatPostcodeQuery>,
) -> Json<FormatPostcodeResponse> {
    Json(FormatPostcodeResponse {
        formatted: format_postcode(&query.value),
        valid: Postcode::parse(&query.value).is_ok(),
    })
}

/// Fallback for unknown routes.
async fn not_found() -> Result<Response, AppError> {
    let html = render(&ErrorTemplate {
        title: "Page not found".to_string(),
        message: "There is nothing at this address.".to_string(),
    })?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// HTTP status for a failed calculation.
fn status_for(err: &CalculateError) -> StatusCode {
    match err {
        CalculateError::Validation(_) => StatusCode::BAD_REQUEST,
        CalculateError::Travel(TravelCostError::InvalidUrl(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        CalculateError::Travel(_) => StatusCode::BAD_GATEWAY,
    }
}

fn log_failure(status: StatusCode, err: &CalculateError) {
    if status.is_server_error() {
        error!(%status, error = %err, "calculation failed");
    } else {
        warn!(%status, error = %err, "calculation rejected");
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        field: Option<&'static str>,
    },
    BadGateway {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl From<CalculateError> for AppError {
    fn from(e: CalculateError) -> Self {
        log_failure(status_for(&e), &e);
        let message = e.user_message().to_string();
        match e {
            CalculateError::Validation(v) => AppError::BadRequest {
                message,
                field: Some(v.field()),
            },
            CalculateError::Travel(TravelCostError::InvalidUrl(_)) => AppError::Internal { message },
            CalculateError::Travel(_) => AppError::BadGateway { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self {
            AppError::BadRequest { message, field } => (StatusCode::BAD_REQUEST, message, field),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message, None),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = Json(ErrorResponse {
            error: message,
            field,
        });
        (status, body).into_response()
    }
}
