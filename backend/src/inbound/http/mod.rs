//! HTTP inbound adapter exposing REST endpoints.
//!
//! All business routes live under `/api`; probes sit at the root.

pub mod applications;
pub mod auth;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor configuration mapping body failures to `400 {message}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(validation::json_error_handler)
}

/// Register every `/api` route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(auth::signup_sme)
        .service(auth::signup_investor)
        .service(auth::login_sme)
        .service(auth::login_investor)
        .service(applications::submit_application)
        .service(applications::list_applications)
        .service(applications::get_application);
}
