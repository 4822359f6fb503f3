use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;

/// Customer as returned to API clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub version: i32,
    pub name: String,
    pub created_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            version: customer.version,
            name: customer.name.into_inner(),
            created_date: customer.created_at,
            update_date: customer.updated_at,
        }
    }
}
