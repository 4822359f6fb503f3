use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::domain::types::{BeerId, CategoryId};
use crate::forms::category::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::{created, error_response};
use crate::services::category as category_service;

#[get("/category")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match category_service::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, "list categories"),
    }
}

#[get("/category/{category_id}")]
pub async fn get_category(
    repo: web::Data<DieselRepository>,
    category_id: web::Path<CategoryId>,
) -> impl Responder {
    match category_service::get_category(repo.get_ref(), category_id.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, "get category"),
    }
}

#[post("/category")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match category_service::create_category(repo.get_ref(), form) {
        Ok(category) => created(format!("/api/v1/category/{}", category.id)),
        Err(err) => error_response(err, "create category"),
    }
}

#[delete("/category/{category_id}")]
pub async fn delete_category(
    repo: web::Data<DieselRepository>,
    category_id: web::Path<CategoryId>,
) -> impl Responder {
    match category_service::delete_category(repo.get_ref(), category_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete category"),
    }
}

#[get("/category/{category_id}/beer")]
pub async fn list_category_beers(
    repo: web::Data<DieselRepository>,
    category_id: web::Path<CategoryId>,
) -> impl Responder {
    match category_service::list_category_beers(repo.get_ref(), category_id.into_inner()) {
        Ok(beers) => HttpResponse::Ok().json(beers),
        Err(err) => error_response(err, "list category beers"),
    }
}

#[get("/beer/{beer_id}/category")]
pub async fn list_beer_categories(
    repo: web::Data<DieselRepository>,
    beer_id: web::Path<BeerId>,
) -> impl Responder {
    match category_service::list_beer_categories(repo.get_ref(), beer_id.into_inner()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, "list beer categories"),
    }
}

#[put("/beer/{beer_id}/category/{category_id}")]
pub async fn add_beer_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<(BeerId, CategoryId)>,
) -> impl Responder {
    let (beer_id, category_id) = path.into_inner();
    match category_service::add_beer_category(repo.get_ref(), beer_id, category_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "link beer to category"),
    }
}

#[delete("/beer/{beer_id}/category/{category_id}")]
pub async fn remove_beer_category(
    repo: web::Data<DieselRepository>,
    path: web::Path<(BeerId, CategoryId)>,
) -> impl Responder {
    let (beer_id, category_id) = path.into_inner();
    match category_service::remove_beer_category(repo.get_ref(), beer_id, category_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "unlink beer from category"),
    }
}
