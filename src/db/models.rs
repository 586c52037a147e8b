use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted row of the `items` table. Also the HTTP response shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbItem {
    pub id: i64,
    pub name: String,
    pub description: String,
}
