//! Service layer for the contact book.
//! - Repository trait separating business rules from SeaORM access.
//! - `ContactService` owns the existence/uniqueness rules the HTTP layer reports.
//! - One error type (`ServiceError`) for the server crate to map onto status codes.

pub mod errors;
pub mod contact;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
