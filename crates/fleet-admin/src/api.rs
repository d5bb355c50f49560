use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, put},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::state::AppState;
use application::export::{ExportError, ExportFile};
use application::pages::{FuelView, PrestartView, UsageView};
use application::provider::ProviderView;
use application::view::{FuelFilter, PrestartFilter, ProviderFilter, UsageFilter};
use application::{FormError, FormMode, ProviderFields};
use domain::{DomainError, HireProvider};

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/fuel-transactions", get(get_fuel_transactions))
        .route("/api/fuel-transactions/export", get(export_fuel_transactions))
        .route("/api/prestart-checks", get(get_prestart_checks))
        .route("/api/prestart-checks/export", get(export_prestart_checks))
        .route("/api/usage-records", get(get_usage_records))
        .route("/api/usage-records/export", get(export_usage_records))
        .route(
            "/api/hire-providers",
            get(get_hire_providers).post(create_hire_provider),
        )
        .route("/api/hire-providers/{id}", put(update_hire_provider))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Error body is always `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
            ApiError::Internal(m) => {
                error!("❌ Request failed: {}", m);
                (StatusCode::INTERNAL_SERVER_ERROR, m)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            DomainError::MissingField(_)
            | DomainError::InvalidValue(_)
            | DomainError::UnsupportedSort { .. } => ApiError::BadRequest(e.to_string()),
            DomainError::Store(_) | DomainError::Delivery(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::SubmissionInFlight(_) => ApiError::Conflict(e.to_string()),
            FormError::InvalidStatus(_) => ApiError::BadRequest(e.to_string()),
            FormError::Domain(inner) => inner.into(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::Domain(inner) => inner.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

/// `?refresh=true` drops cached lists before reading
#[derive(Debug, Default, Deserialize)]
struct ListOptions {
    #[serde(default)]
    refresh: bool,
}

type FilterQuery<F> = Result<Query<F>, QueryRejection>;

fn parse<F: DeserializeOwned>(query: FilterQuery<F>) -> Result<F, ApiError> {
    let Query(filter) = query?;
    Ok(filter)
}

fn csv_attachment(file: ExportFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.content,
    )
        .into_response()
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_fuel_transactions(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<FuelFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Json<FuelView>, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.fuel.refresh();
    }
    Ok(Json(state.fuel.view(&filter).await?))
}

async fn export_fuel_transactions(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<FuelFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Response, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.fuel.refresh();
    }
    let file = state.fuel.export(&filter, today()).await?;
    Ok(csv_attachment(file))
}

async fn get_prestart_checks(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<PrestartFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Json<PrestartView>, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.prestarts.refresh();
    }
    Ok(Json(state.prestarts.view(&filter).await?))
}

async fn export_prestart_checks(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<PrestartFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Response, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.prestarts.refresh();
    }
    let file = state.prestarts.export(&filter, today()).await?;
    Ok(csv_attachment(file))
}

async fn get_usage_records(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<UsageFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Json<UsageView>, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.usage.refresh();
    }
    Ok(Json(state.usage.view(&filter).await?))
}

async fn export_usage_records(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<UsageFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Response, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.usage.refresh();
    }
    let file = state.usage.export(&filter, today()).await?;
    Ok(csv_attachment(file))
}

async fn get_hire_providers(
    State(state): State<Arc<AppState>>,
    filter: FilterQuery<ProviderFilter>,
    options: FilterQuery<ListOptions>,
) -> Result<Json<ProviderView>, ApiError> {
    let filter = parse(filter)?;
    if parse(options)?.refresh {
        state.providers.refresh();
    }
    Ok(Json(state.providers.view(&filter).await?))
}

async fn create_hire_provider(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ProviderFields>, JsonRejection>,
) -> Result<(StatusCode, Json<HireProvider>), ApiError> {
    let Json(fields) = body?;
    let provider = state
        .providers
        .submit(&FormMode::Creating, &fields)
        .await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

async fn update_hire_provider(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<ProviderFields>, JsonRejection>,
) -> Result<Json<HireProvider>, ApiError> {
    let Json(fields) = body?;
    let provider = state
        .providers
        .submit(&FormMode::Editing { id }, &fields)
        .await?;
    Ok(Json(provider))
}
