//! Request handlers
//!
//! Each handler extracts state, delegates to the core crates, and maps the
//! outcome onto a status code. Field presence is validated here; everything
//! else (amount ceilings, route existence, pool totals) is the core's call.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use fueleu_banking::{BankEntry, Transfer};
use fueleu_compliance::{compare_to_baseline, compute_cb, AdjustedBalance, BaselineComparison, ComplianceBalance};
use fueleu_core::Route;
use fueleu_pooling::{MemberBalance, Pool};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Liveness probe: `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// All registered routes: `GET /routes`
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    let catalog = state.catalog.read().unwrap();
    Json(catalog.routes().to_vec())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBaselineResponse {
    pub success: bool,
    pub route_id: String,
}

/// Reassign the baseline: `POST /routes/:route_id/baseline`
pub async fn set_baseline(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> ApiResult<Json<SetBaselineResponse>> {
    let mut catalog = state.catalog.write().unwrap();
    catalog.set_baseline(&route_id)?;
    Ok(Json(SetBaselineResponse {
        success: true,
        route_id,
    }))
}

/// All routes vs the current baseline: `GET /routes/comparison`
pub async fn comparison(State(state): State<AppState>) -> Json<Vec<BaselineComparison>> {
    let catalog = state.catalog.read().unwrap();
    let baseline = catalog.current_baseline();
    let records = catalog
        .routes()
        .iter()
        .map(|route| compare_to_baseline(route, baseline))
        .collect();
    Json(records)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CbQuery {
    pub ship_id: Option<String>,
    pub year: Option<i32>,
}

/// Compliance balance for one ship-year: `GET /compliance/cb`
pub async fn get_cb(
    State(state): State<AppState>,
    Query(query): Query<CbQuery>,
) -> ApiResult<Json<ComplianceBalance>> {
    let (ship_id, year) = match (query.ship_id, query.year) {
        (Some(ship_id), Some(year)) => (ship_id, year),
        _ => return Err(ApiError::BadRequest("shipId and year are required".into())),
    };

    let catalog = state.catalog.read().unwrap();
    let route = catalog.lookup(&ship_id, Some(year))?;
    Ok(Json(compute_cb(route)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedCbQuery {
    pub year: Option<i32>,
    pub ship_id: Option<String>,
}

/// Adjusted CB response: one record when `shipId` is given, otherwise all
/// routes of the year.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AdjustedCbResponse {
    One(Box<AdjustedBalance>),
    Many(Vec<AdjustedBalance>),
}

/// CB plus net banked: `GET /compliance/adjusted-cb`
pub async fn adjusted_cb(
    State(state): State<AppState>,
    Query(query): Query<AdjustedCbQuery>,
) -> ApiResult<Json<AdjustedCbResponse>> {
    let year = query
        .year
        .ok_or_else(|| ApiError::BadRequest("year is required".into()))?;

    let catalog = state.catalog.read().unwrap();
    let banking = state.banking.read().unwrap();
    let build = |route: &Route| {
        let cb = compute_cb(route);
        let net = banking.net_banked(&route.route_id, year);
        AdjustedBalance::new(cb, net)
    };

    let response = match query.ship_id {
        Some(ship_id) => {
            let route = catalog.lookup(&ship_id, Some(year))?;
            AdjustedCbResponse::One(Box::new(build(route)))
        }
        None => AdjustedCbResponse::Many(catalog.routes_for_year(year).into_iter().map(build).collect()),
    };
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsQuery {
    pub ship_id: Option<String>,
    pub year: Option<i32>,
}

/// Banking entries for a ship-year, newest first: `GET /banking/records`
pub async fn banking_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> ApiResult<Json<Vec<BankEntry>>> {
    let (ship_id, year) = match (query.ship_id, query.year) {
        (Some(ship_id), Some(year)) => (ship_id, year),
        _ => return Err(ApiError::BadRequest("shipId and year are required".into())),
    };

    let banking = state.banking.read().unwrap();
    Ok(Json(banking.records(&ship_id, year)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRequest {
    pub ship_id: Option<String>,
    pub year: Option<i32>,
    pub amount: Option<f64>,
}

/// Bank a surplus: `POST /banking/bank`
pub async fn bank_surplus(
    State(state): State<AppState>,
    Json(req): Json<BankRequest>,
) -> ApiResult<(StatusCode, Json<BankEntry>)> {
    let (ship_id, year, amount) = match (req.ship_id, req.year, req.amount) {
        (Some(ship_id), Some(year), Some(amount)) => (ship_id, year, amount),
        _ => {
            return Err(ApiError::BadRequest(
                "shipId, year and amount are required".into(),
            ))
        }
    };

    let catalog = state.catalog.read().unwrap();
    let mut banking = state.banking.write().unwrap();
    let entry = banking.bank_surplus(&catalog, &ship_id, year, amount)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_ship_id: Option<String>,
    pub to_ship_id: Option<String>,
    pub year: Option<i32>,
    pub amount: Option<f64>,
}

/// Transfer banked surplus between ships: `POST /banking/apply`
pub async fn transfer_banked(
    State(state): State<AppState>,
    Json(req): Json<TransferRequest>,
) -> ApiResult<(StatusCode, Json<Transfer>)> {
    let (from_ship_id, to_ship_id, year, amount) =
        match (req.from_ship_id, req.to_ship_id, req.year, req.amount) {
            (Some(from), Some(to), Some(year), Some(amount)) => (from, to, year, amount),
            _ => {
                return Err(ApiError::BadRequest(
                    "fromShipId, toShipId, year and amount are required".into(),
                ))
            }
        };

    let catalog = state.catalog.read().unwrap();
    let mut banking = state.banking.write().unwrap();
    let transfer = banking.transfer_banked(&catalog, &from_ship_id, &to_ship_id, year, amount)?;
    Ok((StatusCode::CREATED, Json(transfer)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub year: Option<i32>,
    #[serde(default)]
    pub members: Vec<MemberBalance>,
}

/// Create a pool for a year: `POST /pools`
pub async fn create_pool(
    State(state): State<AppState>,
    Json(req): Json<CreatePoolRequest>,
) -> ApiResult<(StatusCode, Json<Pool>)> {
    let year = req
        .year
        .ok_or_else(|| ApiError::BadRequest("year and members array required".into()))?;

    let mut pools = state.pools.write().unwrap();
    let pool = pools.create_pool(year, &req.members)?;
    Ok((StatusCode::CREATED, Json(pool)))
}
