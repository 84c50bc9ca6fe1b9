//! This module holds typed parameters for various endpoint inputs.
//!
//! By using typed parameters we ensure the inputs are validated (by type) and
//! correctly shaped before they reach the application logic.

pub(crate) mod oauth;
