//! Domain layer: the upstream gateway client and the error tree the web
//! layer maps onto HTTP responses.

pub mod error;
pub mod gateway;
