//! Business operations invoked by the HTTP handlers.
//!
//! Every function is generic over the repository traits it needs so it can
//! run against [`crate::repository::DieselRepository`] or a mock.

pub mod beer;
pub mod bootstrap;
pub mod category;
pub mod customer;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
