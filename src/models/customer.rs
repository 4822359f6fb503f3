use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CustomerId, CustomerName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub id: String,
    pub version: i32,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record. The version is bumped in
/// SQL by the repository.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewCustomer<'a> {
    pub fn new(id: CustomerId, customer: &'a DomainNewCustomer, now: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            version: 0,
            name: customer.name.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateCustomer<'a> {
    pub fn new(customer: &'a DomainUpdateCustomer, now: NaiveDateTime) -> Self {
        Self {
            name: customer.name.as_str(),
            updated_at: now,
        }
    }
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: customer.id.parse::<CustomerId>()?,
            version: customer.version,
            name: CustomerName::new(customer.name)?,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        })
    }
}
