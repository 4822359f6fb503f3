//! Persistence boundary of the service.
//!
//! Every aggregate gets a reader and a writer trait so services can ask for
//! exactly the capabilities they need. [`DieselRepository`] implements all of
//! them on top of the SQLite pool.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::beer::{Beer, NewBeer, UpdateBeer};
use crate::domain::category::{Category, NewCategory};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{BeerId, BeerStyle, CategoryId, CustomerId};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;

pub mod beer;
pub mod category;
pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Read side of the beer catalogue.
///
/// Listing comes in four explicit shapes; the caller picks one and hands in
/// the page request. The name fragment is matched case-insensitively as a
/// substring.
pub trait BeerReader {
    fn get_beer_by_id(&self, id: BeerId) -> RepositoryResult<Option<Beer>>;
    fn list_all_beers(&self, page: &PageRequest) -> RepositoryResult<Page<Beer>>;
    fn list_beers_by_name(&self, name: &str, page: &PageRequest) -> RepositoryResult<Page<Beer>>;
    fn list_beers_by_style(
        &self,
        style: BeerStyle,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Beer>>;
    fn list_beers_by_name_and_style(
        &self,
        name: &str,
        style: BeerStyle,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Beer>>;
    fn count_beers(&self) -> RepositoryResult<usize>;
}

pub trait BeerWriter {
    fn create_beer(&self, new_beer: &NewBeer) -> RepositoryResult<Beer>;
    /// Overwrites the mutable fields if the stored version still equals
    /// `expected_version`, incrementing it.
    ///
    /// Fails with `NotFound` when the beer is gone and with `Conflict` when
    /// another writer got there first.
    fn update_beer(
        &self,
        id: BeerId,
        expected_version: i32,
        updates: &UpdateBeer,
    ) -> RepositoryResult<Beer>;
    /// Returns `false` when nothing was deleted.
    fn delete_beer(&self, id: BeerId) -> RepositoryResult<bool>;
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    fn count_customers(&self) -> RepositoryResult<usize>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        id: CustomerId,
        expected_version: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool>;
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn list_beer_categories(&self, beer_id: BeerId) -> RepositoryResult<Vec<Category>>;
    fn list_category_beers(&self, category_id: CategoryId) -> RepositoryResult<Vec<Beer>>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<bool>;
    /// Links the beer to the category; linking twice is a no-op.
    fn add_beer_category(&self, beer_id: BeerId, category_id: CategoryId) -> RepositoryResult<()>;
    /// Removes the single association row; `false` when there was none.
    fn remove_beer_category(
        &self,
        beer_id: BeerId,
        category_id: CategoryId,
    ) -> RepositoryResult<bool>;
}
