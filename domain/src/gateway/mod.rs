//! HTTP clients for the upstream provider APIs.

pub mod zoom;
