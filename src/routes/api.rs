use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::forms::list::ListQueryForm;
use crate::models::state::AdminState;
use crate::routes::{list_query, service_error_response};
use crate::services::{reservations as reservations_service, users as users_service};

#[get("/v1/users")]
pub async fn api_v1_users(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
) -> impl Responder {
    let query = match list_query(params.into_inner()) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match users_service::load_users_page(state.users.as_ref(), state.page_size, &query, Utc::now())
    {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(err),
    }
}

#[get("/v1/users/{id}")]
pub async fn api_v1_user(path: web::Path<i64>, state: web::Data<AdminState>) -> impl Responder {
    match users_service::find_user(state.users.as_ref(), path.into_inner()) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => service_error_response(err),
    }
}

#[get("/v1/reservations")]
pub async fn api_v1_reservations(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
) -> impl Responder {
    let query = match list_query(params.into_inner()) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match reservations_service::load_reservations_page(
        state.reservations.as_ref(),
        state.page_size,
        &query,
        Utc::now(),
    ) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(err),
    }
}

#[get("/v1/reservations/{id}")]
pub async fn api_v1_reservation(
    path: web::Path<i64>,
    state: web::Data<AdminState>,
) -> impl Responder {
    match reservations_service::find_reservation(state.reservations.as_ref(), path.into_inner()) {
        Ok(reservation) => HttpResponse::Ok().json(reservation),
        Err(err) => service_error_response(err),
    }
}
