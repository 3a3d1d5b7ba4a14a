//! Class schedule handlers

use axum::{
    Json,
    extract::{Query, State},
};
use domain::ScheduleRow;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::{error::ApiError, state::AppState};

/// One schedule slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleRowResponse {
    pub class_type: String,
    pub date: String,
    pub time: String,
    pub availability: bool,
}

impl From<&ScheduleRow> for ScheduleRowResponse {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            class_type: row.class_type.clone(),
            date: row.date.clone(),
            time: row.time.clone(),
            availability: row.availability,
        }
    }
}

/// Availability query; all three keys are required and compared verbatim
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Class name, e.g. `Yoga`
    pub class_type: Option<String>,
    /// Date exactly as written in the schedule, e.g. `2023-12-25`
    pub date: Option<String>,
    /// Time exactly as written in the schedule, e.g. `10:00`
    pub time: Option<String>,
}

/// Availability answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub class_type: String,
    pub date: String,
    pub time: String,
    pub available: bool,
}

fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("Missing query parameter: {name}")))
}

/// List the loaded schedule
#[utoipa::path(
    get,
    path = "/v1/schedule",
    tag = "schedule",
    responses(
        (status = 200, description = "Schedule rows in source order", body = Vec<ScheduleRowResponse>)
    )
)]
pub async fn list_schedule(State(state): State<AppState>) -> Json<Vec<ScheduleRowResponse>> {
    Json(
        state
            .schedule_service
            .rows()
            .iter()
            .map(ScheduleRowResponse::from)
            .collect(),
    )
}

/// Check whether a class slot is open
#[utoipa::path(
    get,
    path = "/v1/schedule/availability",
    tag = "schedule",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability of the slot", body = AvailabilityResponse),
        (status = 400, description = "Missing query parameter", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, query))]
pub async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let class_type = required(query.class_type, "class_type")?;
    let date = required(query.date, "date")?;
    let time = required(query.time, "time")?;

    let available = state
        .schedule_service
        .check_availability(&class_type, &date, &time);
    debug!(class_type = %class_type, date = %date, time = %time, available, "Availability checked");

    Ok(Json(AvailabilityResponse {
        class_type,
        date,
        time,
        available,
    }))
}
