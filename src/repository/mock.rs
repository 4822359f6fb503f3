//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::beer::{Beer, NewBeer, UpdateBeer};
use crate::domain::category::{Category, NewCategory};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{BeerId, BeerStyle, CategoryId, CustomerId};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BeerReader, BeerWriter, CategoryReader, CategoryWriter, CustomerReader, CustomerWriter,
};

mock! {
    pub Repository {}

    impl BeerReader for Repository {
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

    impl BeerWriter for Repository {
        fn create_beer(&self, new_beer: &NewBeer) -> RepositoryResult<Beer>;
        fn update_beer(
            &self,
            id: BeerId,
            expected_version: i32,
            updates: &UpdateBeer,
        ) -> RepositoryResult<Beer>;
        fn delete_beer(&self, id: BeerId) -> RepositoryResult<bool>;
    }

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
        fn count_customers(&self) -> RepositoryResult<usize>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: CustomerId,
            expected_version: i32,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool>;
    }

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn list_beer_categories(&self, beer_id: BeerId) -> RepositoryResult<Vec<Category>>;
        fn list_category_beers(&self, category_id: CategoryId) -> RepositoryResult<Vec<Beer>>;
    }

    impl CategoryWriter for Repository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, id: CategoryId) -> RepositoryResult<bool>;
        fn add_beer_category(&self, beer_id: BeerId, category_id: CategoryId) -> RepositoryResult<()>;
        fn remove_beer_category(
            &self,
            beer_id: BeerId,
            category_id: CategoryId,
        ) -> RepositoryResult<bool>;
    }
}
