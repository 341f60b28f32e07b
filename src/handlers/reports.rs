use axum::{
    Json,
    extract::{FromRequestParts, Query, State},
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AreaCompliance, BrandCompliance, ProductBrand, StoreArea},
    query::ReportFilter,
};

/// Report filters from the query string. Unreadable query strings surface
/// as an [`AppError`] instead of axum's plain-text 400.
#[derive(FromRequestParts, serde::Deserialize)]
#[serde(transparent)]
#[from_request(via(Query), rejection(AppError))]
pub struct Filters(pub ReportFilter);

pub async fn list_areas(State(state): State<AppState>) -> AppResult<Json<Vec<StoreArea>>> {
    let areas = state.report_service.list_areas().await?;

    Ok(Json(areas))
}

pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<Vec<ProductBrand>>> {
    let brands = state.report_service.list_brands().await?;

    Ok(Json(brands))
}

pub async fn compliance_report(
    State(state): State<AppState>,
    Filters(filter): Filters,
) -> AppResult<Json<Vec<AreaCompliance>>> {
    let rows = state.report_service.compliance_by_area(filter).await?;

    Ok(Json(rows))
}

pub async fn brand_compliance(
    State(state): State<AppState>,
    Filters(filter): Filters,
) -> AppResult<Json<Vec<BrandCompliance>>> {
    let rows = state.report_service.compliance_by_brand(filter).await?;

    Ok(Json(rows))
}
