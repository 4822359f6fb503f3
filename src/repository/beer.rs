//! Repository implementation for the beer catalogue.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::beer::{Beer, NewBeer, UpdateBeer};
use crate::domain::types::{BeerId, BeerStyle};
use crate::models::beer::{
    Beer as DbBeer, NewBeer as DbNewBeer, UpdateBeer as DbUpdateBeer, search_key,
};
use crate::pagination::{Page, PageRequest, SortProperty};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BeerReader, BeerWriter, DieselRepository};
use crate::schema::{beer_category, beers};

/// Folds the fragment like the stored `beer_name_search` column and wraps it
/// in `%` wildcards, escaping the LIKE metacharacters it contains so they
/// match literally.
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in search_key(fragment).chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn filtered(name: Option<&str>, style: Option<BeerStyle>) -> beers::BoxedQuery<'static, Sqlite> {
    let mut query = beers::table.into_boxed();
    if let Some(name) = name {
        query = query.filter(
            beers::beer_name_search
                .like(like_pattern(name))
                .escape('\\'),
        );
    }
    if let Some(style) = style {
        query = query.filter(beers::beer_style.eq(style.as_str()));
    }
    query
}

fn into_domain(rows: Vec<DbBeer>) -> RepositoryResult<Vec<Beer>> {
    rows.into_iter()
        .map(|row| Beer::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl DieselRepository {
    fn load_beer_page(
        &self,
        name: Option<&str>,
        style: Option<BeerStyle>,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Beer>> {
        let mut conn = self.conn()?;

        let total = filtered(name, style).count().get_result::<i64>(&mut conn)?;

        let mut query = filtered(name, style);
        for order in page.sort() {
            query = match order.property {
                SortProperty::Name => query
                    .then_order_by(beers::beer_name_search.asc())
                    .then_order_by(beers::beer_name.asc()),
            };
        }

        // Equal names would otherwise come back in storage order.
        let rows = query
            .then_order_by(beers::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .load::<DbBeer>(&mut conn)?;

        Ok(Page::new(into_domain(rows)?, page, total as usize))
    }
}

impl BeerReader for DieselRepository {
    fn get_beer_by_id(&self, id: BeerId) -> RepositoryResult<Option<Beer>> {
        let mut conn = self.conn()?;
        let row = beers::table
            .find(id.to_string())
            .first::<DbBeer>(&mut conn)
            .optional()?;

        row.map(|row| Beer::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_all_beers(&self, page: &PageRequest) -> RepositoryResult<Page<Beer>> {
        self.load_beer_page(None, None, page)
    }

    fn list_beers_by_name(&self, name: &str, page: &PageRequest) -> RepositoryResult<Page<Beer>> {
        self.load_beer_page(Some(name), None, page)
    }

    fn list_beers_by_style(
        &self,
        style: BeerStyle,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Beer>> {
        self.load_beer_page(None, Some(style), page)
    }

    fn list_beers_by_name_and_style(
        &self,
        name: &str,
        style: BeerStyle,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Beer>> {
        self.load_beer_page(Some(name), Some(style), page)
    }

    fn count_beers(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total = beers::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}

impl BeerWriter for DieselRepository {
    fn create_beer(&self, new_beer: &NewBeer) -> RepositoryResult<Beer> {
        let mut conn = self.conn()?;
        let row = DbNewBeer::new(BeerId::new(), new_beer, Utc::now().naive_utc());

        let created = diesel::insert_into(beers::table)
            .values(&row)
            .get_result::<DbBeer>(&mut conn)?;

        Beer::try_from(created).map_err(RepositoryError::from)
    }

    fn update_beer(
        &self,
        id: BeerId,
        expected_version: i32,
        updates: &UpdateBeer,
    ) -> RepositoryResult<Beer> {
        let mut conn = self.conn()?;
        let key = id.to_string();
        let changes = DbUpdateBeer::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(
            beers::table
                .filter(beers::id.eq(key.as_str()))
                .filter(beers::version.eq(expected_version)),
        )
        .set((beers::version.eq(beers::version + 1), &changes))
        .get_result::<DbBeer>(&mut conn)
        .optional()?;

        if let Some(row) = updated {
            return Beer::try_from(row).map_err(RepositoryError::from);
        }

        let exists = diesel::select(diesel::dsl::exists(beers::table.find(key.as_str())))
            .get_result::<bool>(&mut conn)?;
        if exists {
            Err(RepositoryError::Conflict(format!(
                "beer {id} was modified concurrently (expected version {expected_version})"
            )))
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn delete_beer(&self, id: BeerId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;
        let key = id.to_string();

        conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            diesel::delete(beer_category::table.filter(beer_category::beer_id.eq(key.as_str())))
                .execute(conn)?;
            let deleted = diesel::delete(beers::table.find(key.as_str())).execute(conn)?;
            Ok(deleted > 0)
        })
        .map_err(RepositoryError::from)
    }
}
