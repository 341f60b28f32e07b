use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct StoreArea {
    pub area_id: i64,
    pub area_name: String,
}
