use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BeerId, CategoryId, CategoryName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub version: i32,
    pub name: CategoryName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: CategoryName,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: CategoryName) -> Self {
        Self { name }
    }
}

/// Link between a beer and a category, backed by its own association row.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BeerCategory {
    pub beer_id: BeerId,
    pub category_id: CategoryId,
}
