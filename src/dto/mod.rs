//! Wire representations exchanged with API clients.

pub mod beer;
pub mod category;
pub mod customer;
