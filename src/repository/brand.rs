use sqlx::MySqlPool;
use tracing::instrument;

use crate::models::ProductBrand;

#[derive(Clone)]
pub struct BrandRepository {
    pool: MySqlPool,
}

impl BrandRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "db.product_brand.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductBrand>, sqlx::Error> {
        sqlx::query_as::<_, ProductBrand>(
            "SELECT brand_id, brand_name FROM product_brand ORDER BY brand_name",
        )
        .fetch_all(&self.pool)
        .await
    }
}
