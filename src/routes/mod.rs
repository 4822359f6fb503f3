//! HTTP handlers of the JSON API.

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod beer;
pub mod category;
pub mod customer;

/// Registers every handler under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(beer::list_beers)
            .service(beer::create_beer)
            .service(beer::get_beer)
            .service(beer::update_beer)
            .service(beer::patch_beer)
            .service(beer::delete_beer)
            .service(customer::list_customers)
            .service(customer::create_customer)
            .service(customer::get_customer)
            .service(customer::update_customer)
            .service(customer::patch_customer)
            .service(customer::delete_customer)
            .service(category::list_categories)
            .service(category::create_category)
            .service(category::get_category)
            .service(category::delete_category)
            .service(category::list_category_beers)
            .service(category::list_beer_categories)
            .service(category::add_beer_category)
            .service(category::remove_beer_category),
    );
}

/// Maps a service failure onto its HTTP status.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "message": message }))
        }
        ServiceError::Conflict(message) => {
            log::warn!("Conflict while trying to {action}: {message}");
            HttpResponse::Conflict().json(json!({ "message": message }))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Empty `201 Created` pointing at the new resource.
pub fn created(location: String) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((actix_web::http::header::LOCATION, location))
        .finish()
}
