use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

/// Category as returned to API clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: CategoryId,
    pub version: i32,
    pub name: String,
    pub created_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            version: category.version,
            name: category.name.into_inner(),
            created_date: category.created_at,
            update_date: category.updated_at,
        }
    }
}
