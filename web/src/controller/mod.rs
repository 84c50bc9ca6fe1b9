pub(crate) mod config_controller;
pub(crate) mod health_check_controller;
pub(crate) mod meeting_controller;
pub(crate) mod oauth_controller;
pub(crate) mod user_controller;
