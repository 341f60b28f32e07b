mod health;
mod reports;

pub use health::health_check;
pub use reports::{brand_compliance, compliance_report, list_areas, list_brands};
