use sqlx::{FromRow, MySql, MySqlPool, mysql::MySqlRow};
use tracing::instrument;

use crate::{
    models::{AreaCompliance, BrandCompliance},
    query::{Grouping, ReportFilter, ReportQuery},
};

#[derive(Clone)]
pub struct ComplianceRepository {
    pool: MySqlPool,
}

impl ComplianceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "db.report_product.by_area", skip(self))]
    pub async fn by_area(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<AreaCompliance>, sqlx::Error> {
        self.fetch(ReportQuery::compliance(Grouping::Area, filter))
            .await
    }

    #[instrument(name = "db.report_product.by_brand", skip(self))]
    pub async fn by_brand(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<BrandCompliance>, sqlx::Error> {
        self.fetch(ReportQuery::compliance(Grouping::BrandArea, filter))
            .await
    }

    async fn fetch<T>(&self, query: ReportQuery) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        tracing::debug!(sql = %query.sql, binds = query.binds.len(), "Running compliance query");

        let mut statement = sqlx::query_as::<MySql, T>(&query.sql);
        for value in &query.binds {
            statement = statement.bind(value.as_str());
        }

        statement.fetch_all(&self.pool).await
    }
}
