use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};
use validator::Validate;

use crate::domain::types::CustomerId;
use crate::forms::customer::{CustomerForm, CustomerPatchForm};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response};
use crate::services::customer as customer_service;

#[get("/customer")]
pub async fn list_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match customer_service::list_customers(repo.get_ref()) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response(err, "list customers"),
    }
}

#[get("/customer/{customer_id}")]
pub async fn get_customer(
    repo: web::Data<DieselRepository>,
    customer_id: web::Path<CustomerId>,
) -> impl Responder {
    match customer_service::get_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err, "get customer"),
    }
}

#[post("/customer")]
pub async fn create_customer(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CustomerForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match customer_service::create_customer(repo.get_ref(), form) {
        Ok(customer) => created(format!("/api/v1/customer/{}", customer.id)),
        Err(err) => error_response(err, "create customer"),
    }
}

#[put("/customer/{customer_id}")]
pub async fn update_customer(
    repo: web::Data<DieselRepository>,
    customer_id: web::Path<CustomerId>,
    web::Json(form): web::Json<CustomerForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match customer_service::update_customer(repo.get_ref(), customer_id.into_inner(), form) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "update customer"),
    }
}

#[patch("/customer/{customer_id}")]
pub async fn patch_customer(
    repo: web::Data<DieselRepository>,
    customer_id: web::Path<CustomerId>,
    web::Json(form): web::Json<CustomerPatchForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match customer_service::patch_customer(repo.get_ref(), customer_id.into_inner(), form) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "patch customer"),
    }
}

#[delete("/customer/{customer_id}")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    customer_id: web::Path<CustomerId>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete customer"),
    }
}
