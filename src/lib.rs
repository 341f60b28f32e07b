pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod query;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;

pub use config::Config;

use repository::{AreaRepository, BrandRepository, ComplianceRepository};
use services::ReportService;
use sqlx::MySqlPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        let report_service = ReportService::new(
            AreaRepository::new(pool.clone()),
            BrandRepository::new(pool.clone()),
            ComplianceRepository::new(pool.clone()),
        );

        Self {
            pool,
            report_service,
        }
    }
}
