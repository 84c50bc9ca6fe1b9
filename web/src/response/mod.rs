//! Typed response bodies returned to the frontend, projected from the
//! upstream payloads.

pub(crate) mod config;
pub(crate) mod meeting;
pub(crate) mod user;
