use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ProductBrand {
    pub brand_id: i64,
    pub brand_name: String,
}
