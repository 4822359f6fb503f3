//! Diesel models representing categories and their beer links.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    BeerCategory as DomainBeerCategory, Category as DomainCategory,
    NewCategory as DomainNewCategory,
};
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};
use crate::models::beer::Beer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
/// Insertable form of [`Category`].
pub struct NewCategory<'a> {
    pub id: String,
    pub version: i32,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Associations, Identifiable, Insertable)]
#[diesel(primary_key(beer_id, category_id))]
#[diesel(belongs_to(Beer, foreign_key = beer_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(table_name = crate::schema::beer_category)]
/// Association row linking a beer to a category.
pub struct BeerCategory {
    pub beer_id: String,
    pub category_id: String,
}

impl<'a> NewCategory<'a> {
    pub fn new(id: CategoryId, category: &'a DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            version: 0,
            name: category.name.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.parse::<CategoryId>()?,
            version: category.version,
            name: CategoryName::new(category.name)?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl From<DomainBeerCategory> for BeerCategory {
    fn from(link: DomainBeerCategory) -> Self {
        Self {
            beer_id: link.beer_id.to_string(),
            category_id: link.category_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::BeerId;

    #[test]
    fn link_uses_string_ids() {
        let link = DomainBeerCategory {
            beer_id: BeerId::new(),
            category_id: CategoryId::new(),
        };

        let row = BeerCategory::from(link);

        assert_eq!(row.beer_id, link.beer_id.to_string());
        assert_eq!(row.category_id, link.category_id.to_string());
    }
}
