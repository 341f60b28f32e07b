use opentelemetry::KeyValue;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{AreaCompliance, BrandCompliance, ProductBrand, StoreArea},
    query::ReportFilter,
    repository::{AreaRepository, BrandRepository, ComplianceRepository},
    telemetry::{REPORT_QUERIES_TOTAL, REPORT_QUERY_ERRORS, REPORT_ROWS_RETURNED},
};

#[derive(Clone)]
pub struct ReportService {
    area_repo: AreaRepository,
    brand_repo: BrandRepository,
    compliance_repo: ComplianceRepository,
}

impl ReportService {
    pub fn new(
        area_repo: AreaRepository,
        brand_repo: BrandRepository,
        compliance_repo: ComplianceRepository,
    ) -> Self {
        Self {
            area_repo,
            brand_repo,
            compliance_repo,
        }
    }

    #[instrument(name = "report.list_areas", skip(self))]
    pub async fn list_areas(&self) -> AppResult<Vec<StoreArea>> {
        record("list_areas", self.area_repo.list().await)
    }

    #[instrument(name = "report.list_brands", skip(self))]
    pub async fn list_brands(&self) -> AppResult<Vec<ProductBrand>> {
        record("list_brands", self.brand_repo.list().await)
    }

    #[instrument(name = "report.compliance_by_area", skip(self))]
    pub async fn compliance_by_area(&self, filter: ReportFilter) -> AppResult<Vec<AreaCompliance>> {
        record(
            "compliance_by_area",
            self.compliance_repo.by_area(&filter).await,
        )
    }

    #[instrument(name = "report.compliance_by_brand", skip(self))]
    pub async fn compliance_by_brand(
        &self,
        filter: ReportFilter,
    ) -> AppResult<Vec<BrandCompliance>> {
        record(
            "compliance_by_brand",
            self.compliance_repo.by_brand(&filter).await,
        )
    }
}

fn record<T>(operation: &'static str, result: Result<Vec<T>, sqlx::Error>) -> AppResult<Vec<T>> {
    let attributes = [KeyValue::new("report.operation", operation)];
    REPORT_QUERIES_TOTAL.add(1, &attributes);

    match result {
        Ok(rows) => {
            REPORT_ROWS_RETURNED.record(rows.len() as f64, &attributes);
            tracing::debug!(operation, rows = rows.len(), "Report served");
            Ok(rows)
        }
        Err(e) => {
            REPORT_QUERY_ERRORS.add(1, &attributes);
            Err(e.into())
        }
    }
}
