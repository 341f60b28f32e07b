use serde::Serialize;
use sqlx::FromRow;

/// Compliance totals for one store area.
///
/// `compliance_percentage` is rounded to one decimal place by the store and
/// is `None` only when the group has no reports.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AreaCompliance {
    pub area_name: String,
    pub total_reports: i64,
    pub compliant_reports: i64,
    pub compliance_percentage: Option<f64>,
}

/// Compliance totals for one brand within one store area, with the
/// percentage rounded to a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct BrandCompliance {
    pub brand_name: String,
    pub area_name: String,
    pub total_reports: i64,
    pub compliant_reports: i64,
    pub compliance_percentage: Option<i64>,
}
