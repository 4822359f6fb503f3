//! Repository implementation for categories and beer/category links.
//!
//! Links live only in `beer_category`; adding or removing one touches a
//! single row, so both directions of the relation stay consistent.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::beer::Beer;
use crate::domain::category::{BeerCategory, Category, NewCategory};
use crate::domain::types::{BeerId, CategoryId};
use crate::models::beer::Beer as DbBeer;
use crate::models::category::{
    BeerCategory as DbBeerCategory, Category as DbCategory, NewCategory as DbNewCategory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};
use crate::schema::{beer_category, beers, categories};

/// Orders rows loaded by id by their Unicode-folded name, then converts them.
fn categories_into_domain(mut rows: Vec<DbCategory>) -> RepositoryResult<Vec<Category>> {
    rows.sort_by_cached_key(|row| row.name.to_lowercase());
    rows.into_iter()
        .map(|row| Category::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;
        categories::table
            .find(id.to_string())
            .first::<DbCategory>(&mut conn)
            .optional()?
            .map(|row| Category::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut conn = self.conn()?;
        let rows = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;
        categories_into_domain(rows)
    }

    fn list_beer_categories(&self, beer_id: BeerId) -> RepositoryResult<Vec<Category>> {
        let mut conn = self.conn()?;
        let rows = categories::table
            .inner_join(beer_category::table)
            .filter(beer_category::beer_id.eq(beer_id.to_string()))
            .order(categories::id.asc())
            .select(categories::all_columns)
            .load::<DbCategory>(&mut conn)?;
        categories_into_domain(rows)
    }

    fn list_category_beers(&self, category_id: CategoryId) -> RepositoryResult<Vec<Beer>> {
        let mut conn = self.conn()?;
        beers::table
            .inner_join(beer_category::table)
            .filter(beer_category::category_id.eq(category_id.to_string()))
            .order((
                beers::beer_name_search.asc(),
                beers::beer_name.asc(),
                beers::id.asc(),
            ))
            .select(beers::all_columns)
            .load::<DbBeer>(&mut conn)?
            .into_iter()
            .map(|row| Beer::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let row = DbNewCategory::new(CategoryId::new(), new_category, Utc::now().naive_utc());

        let created = diesel::insert_into(categories::table)
            .values(&row)
            .get_result::<DbCategory>(&mut conn)?;

        Category::try_from(created).map_err(RepositoryError::from)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;
        let key = id.to_string();

        conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            diesel::delete(beer_category::table.filter(beer_category::category_id.eq(key.as_str())))
                .execute(conn)?;
            let deleted = diesel::delete(categories::table.find(key.as_str())).execute(conn)?;
            Ok(deleted > 0)
        })
        .map_err(RepositoryError::from)
    }

    fn add_beer_category(&self, beer_id: BeerId, category_id: CategoryId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let link = DbBeerCategory::from(BeerCategory {
            beer_id,
            category_id,
        });

        diesel::insert_into(beer_category::table)
            .values(&link)
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }

    fn remove_beer_category(
        &self,
        beer_id: BeerId,
        category_id: CategoryId,
    ) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            beer_category::table
                .filter(beer_category::beer_id.eq(beer_id.to_string()))
                .filter(beer_category::category_id.eq(category_id.to_string())),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
