// HTTP request handlers
use crate::application::warnings_service::WarningsService;
use crate::domain::about::About;
use crate::domain::dashboard::Dashboard;
use crate::domain::observation::ObservationEntry;
use crate::domain::table::FilterSelection;
use crate::domain::warning::WarningRecord;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Comma-separated selections; a missing parameter selects nothing.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub types: Option<String>,
    pub levels: Option<String>,
}

impl SelectionQuery {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection::new(split_list(self.types.as_deref()), split_list(self.levels.as_deref()))
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Choices {
    pub types: BTreeSet<String>,
    pub levels: BTreeSet<String>,
    pub areas: BTreeSet<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub records: usize,
    pub choices: Choices,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResult {
    pub entries: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn about() -> Json<About> {
    Json(About::default())
}

/// Fetch the feed and replace the session's table.
///
/// The session lock is not held while the feed is being fetched, and a
/// failed fetch leaves the previous table in place.
pub async fn refresh_warnings(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshSummary>, ApiError> {
    let table = state.warnings_service.load_warnings().await?;

    let summary = RefreshSummary {
        records: table.len(),
        choices: Choices {
            types: WarningsService::list_types(&table),
            levels: WarningsService::list_levels(&table),
            areas: WarningsService::list_areas(&table),
        },
    };

    state
        .sessions
        .with_session(&id, |session| session.replace_table(table))
        .await;

    Ok(Json(summary))
}

pub async fn list_choices(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Choices>, ApiError> {
    state
        .sessions
        .read(&id, |session| -> Result<Json<Choices>, ApiError> {
            let table = session.and_then(|s| s.table()).ok_or(ApiError::NotLoaded)?;
            Ok(Json(Choices {
                types: WarningsService::list_types(table),
                levels: WarningsService::list_levels(table),
                areas: WarningsService::list_areas(table),
            }))
        })
        .await
}

pub async fn list_warnings(
    Path(id): Path<String>,
    Query(query): Query<SelectionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WarningRecord>>, ApiError> {
    let selection = query.to_selection();
    state
        .sessions
        .read(&id, |session| -> Result<Json<Vec<WarningRecord>>, ApiError> {
            let table = session.and_then(|s| s.table()).ok_or(ApiError::NotLoaded)?;
            let view = WarningsService::apply_filter(table, &selection);
            Ok(Json(view.rows().iter().copied().cloned().collect()))
        })
        .await
}

pub async fn charts(
    Path(id): Path<String>,
    Query(query): Query<SelectionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let selection = query.to_selection();
    state
        .sessions
        .read(&id, |session| -> Result<Json<Dashboard>, ApiError> {
            let table = session.and_then(|s| s.table()).ok_or(ApiError::NotLoaded)?;
            let view = WarningsService::apply_filter(table, &selection);
            let series = WarningsService::compute_aggregates(table, &view);
            Ok(Json(Dashboard::from_aggregates(&series)))
        })
        .await
}

pub async fn submit_observation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ObservationEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResult>), ApiError> {
    let Json(entry) = payload?;
    state
        .sessions
        .with_session(&id, |session| -> Result<(StatusCode, Json<SubmitResult>), ApiError> {
            WarningsService::submit_observation(session.log_mut(), entry)?;
            Ok((
                StatusCode::CREATED,
                Json(SubmitResult {
                    entries: session.log().len(),
                }),
            ))
        })
        .await
}

pub async fn list_observations(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ObservationEntry>> {
    let entries = state
        .sessions
        .read(&id, |session| {
            session
                .map(|s| WarningsService::export_log(s.log()))
                .unwrap_or_default()
        })
        .await;
    Json(entries)
}
