use sqlx::MySqlPool;
use tracing::instrument;

use crate::models::StoreArea;

#[derive(Clone)]
pub struct AreaRepository {
    pool: MySqlPool,
}

impl AreaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "db.store_area.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<StoreArea>, sqlx::Error> {
        sqlx::query_as::<_, StoreArea>(
            "SELECT area_id, area_name FROM store_area ORDER BY area_name",
        )
        .fetch_all(&self.pool)
        .await
    }
}
