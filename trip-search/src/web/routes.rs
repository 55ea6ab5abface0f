//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::criteria::{CriteriaStore, validate};
use crate::domain::{CalendarDate, ValidationFailure, format_iso_date};
use crate::query::{SerializedQuery, decode_for_display, submit_target};

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
        .route("/search", get(results_page))
        .route("/search/submit", post(submit_search))
        .route("/api/locations/search", get(search_locations))
        .route("/api/criteria/validate", post(validate_criteria))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// The calendar day validation runs against.
fn today() -> CalendarDate {
    Local::now().date_naive()
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with an empty search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_form(&state, &CriteriaStore::new(), &[])
}

fn render_form(
    state: &AppState,
    store: &CriteriaStore,
    failures: &[ValidationFailure],
) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        form: FormView::from_store(store, failures),
        today: format_iso_date(today()),
        options: LocationOptionView::all(&state.catalog),
    };
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Handle a search form post.
///
/// The swap button re-renders the form with endpoints exchanged. The search
/// button validates: success redirects to the results view, failure
/// re-renders the form with the posted values and the failure messages.
async fn submit_search(
    State(state): State<AppState>,
    Form(req): Form<SearchFormRequest>,
) -> Result<Response, AppError> {
    let today = today();
    let mut store = req.to_store();

    if req.wants_swap() {
        store.discard_pending();
        store.swap_endpoints();
        store.revalidate(today);
        debug!(errors = store.errors().len(), "swapped endpoints");
        return Ok(render_form(&state, &store, &[])?.into_response());
    }

    match validate(store.criteria(), today) {
        Ok(criteria) => {
            let target = submit_target(&criteria, &state.config);
            let uri = target.uri();
            info!(%uri, trip_type = %criteria.trip_type(), "search submitted");
            Ok(Redirect::to(&uri).into_response())
        }
        Err(failures) => {
            store.revalidate(today);
            let html = render_form(&state, &store, failures.as_slice())?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response())
        }
    }
}

/// Results page, decoded leniently from the raw query string.
async fn results_page(RawQuery(query): RawQuery) -> Result<Html<String>, AppError> {
    let query = SerializedQuery::parse(query.as_deref().unwrap_or_default());
    let fields = decode_for_display(&query);

    let template = ResultsTemplate {
        results: ResultsView::from_fields(&fields),
    };
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Search locations by code or name.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let limit = state.config.suggestion_limit(req.limit);
    let locations = state
        .catalog
        .search(&req.q, limit)
        .into_iter()
        .map(LocationResult::from_location)
        .collect();

    Json(LocationSearchResponse { locations })
}

/// Validate criteria and return the results URI or the failures.
async fn validate_criteria(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ValidateCriteriaRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(&body), "invalid JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let store = req.to_store().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    match validate(store.criteria(), today()) {
        Ok(criteria) => {
            let target = submit_target(&criteria, &state.config);
            Ok(Json(ValidateCriteriaResponse {
                ok: true,
                uri: Some(target.uri()),
                query: Some(target.query.to_query_string()),
                failures: Vec::new(),
            })
            .into_response())
        }
        Err(failures) => {
            let body = ValidateCriteriaResponse {
                ok: false,
                uri: None,
                query: None,
                failures: failures.iter().map(FailureResult::from_failure).collect(),
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response())
        }
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Fallback for unknown routes.
async fn not_found(headers: HeaderMap, uri: Uri) -> Response {
    let message = format!("No page at {}", uri.path());

    if accepts_html(&headers) {
        let template = ErrorTemplate {
            title: "Page not found".to_string(),
            message,
        };
        return match template.render() {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => AppError::Internal {
                message: format!("Template error: {}", e),
            }
            .into_response(),
        };
    }

    AppError::NotFound { message }.into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
