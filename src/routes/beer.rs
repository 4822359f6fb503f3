use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};
use validator::Validate;

use crate::domain::types::BeerId;
use crate::dto::beer::BeerListQuery;
use crate::forms::beer::{BeerForm, BeerPatchForm};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response};
use crate::services::beer as beer_service;

#[get("/beer")]
pub async fn list_beers(
    repo: web::Data<DieselRepository>,
    query: web::Query<BeerListQuery>,
) -> impl Responder {
    match beer_service::list_beers(repo.get_ref(), query.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list beers"),
    }
}

#[get("/beer/{beer_id}")]
pub async fn get_beer(
    repo: web::Data<DieselRepository>,
    beer_id: web::Path<BeerId>,
) -> impl Responder {
    match beer_service::get_beer(repo.get_ref(), beer_id.into_inner()) {
        Ok(beer) => HttpResponse::Ok().json(beer),
        Err(err) => error_response(err, "get beer"),
    }
}

#[post("/beer")]
pub async fn create_beer(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BeerForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match beer_service::create_beer(repo.get_ref(), form) {
        Ok(beer) => created(format!("/api/v1/beer/{}", beer.id)),
        Err(err) => error_response(err, "create beer"),
    }
}

#[put("/beer/{beer_id}")]
pub async fn update_beer(
    repo: web::Data<DieselRepository>,
    beer_id: web::Path<BeerId>,
    web::Json(form): web::Json<BeerForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match beer_service::update_beer(repo.get_ref(), beer_id.into_inner(), form) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "update beer"),
    }
}

#[patch("/beer/{beer_id}")]
pub async fn patch_beer(
    repo: web::Data<DieselRepository>,
    beer_id: web::Path<BeerId>,
    web::Json(form): web::Json<BeerPatchForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match beer_service::patch_beer(repo.get_ref(), beer_id.into_inner(), form) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "patch beer"),
    }
}

#[delete("/beer/{beer_id}")]
pub async fn delete_beer(
    repo: web::Data<DieselRepository>,
    beer_id: web::Path<BeerId>,
) -> impl Responder {
    match beer_service::delete_beer(repo.get_ref(), beer_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete beer"),
    }
}
