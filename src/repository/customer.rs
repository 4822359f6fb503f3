//! Repository implementation for customers.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};
use crate::schema::customers;

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let mut conn = self.conn()?;
        let row = customers::table
            .find(id.to_string())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(
                Customer::try_from(row).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        let mut conn = self.conn()?;
        let mut rows = customers::table
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?;
        // SQLite collations only fold ASCII; order by the Unicode-folded name,
        // keeping id order between equal names.
        rows.sort_by_cached_key(|row| row.name.to_lowercase());

        rows.into_iter()
            .map(|row| Customer::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total: i64 = customers::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut conn = self.conn()?;
        let row = DbNewCustomer::new(CustomerId::new(), new_customer, Utc::now().naive_utc());

        let created = diesel::insert_into(customers::table)
            .values(&row)
            .get_result::<DbCustomer>(&mut conn)?;

        Customer::try_from(created).map_err(RepositoryError::from)
    }

    fn update_customer(
        &self,
        id: CustomerId,
        expected_version: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        let mut conn = self.conn()?;
        let key = id.to_string();
        let changes = DbUpdateCustomer::new(updates, Utc::now().naive_utc());

        conn.transaction::<Customer, RepositoryError, _>(|conn| {
            let updated = diesel::update(
                customers::table
                    .filter(customers::id.eq(key.as_str()))
                    .filter(customers::version.eq(expected_version)),
            )
            .set((customers::version.eq(customers::version + 1), &changes))
            .get_result::<DbCustomer>(conn)
            .optional()?;

            match updated {
                Some(row) => Customer::try_from(row).map_err(RepositoryError::from),
                None => {
                    let exists =
                        diesel::select(diesel::dsl::exists(customers::table.find(key.as_str())))
                            .get_result::<bool>(conn)?;
                    if exists {
                        Err(RepositoryError::Conflict(format!(
                            "customer {id} was modified concurrently (expected version {expected_version})"
                        )))
                    } else {
                        Err(RepositoryError::NotFound)
                    }
                }
            }
        })
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(customers::table.find(id.to_string())).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}
