use actix_web::{Responder, get, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::reservation::{PaymentStatus, ReservationStatus};
use crate::dto::list::CategoryOption;
use crate::forms::list::ListQueryForm;
use crate::models::state::AdminState;
use crate::routes::{csv_attachment, list_query, render_template, service_error_response};
use crate::services::reservations as reservations_service;

#[get("/admin/reservations")]
pub async fn show_reservations(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
    tera: web::Data<Tera>,
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
        Ok(data) => {
            let values: Vec<&str> = ReservationStatus::ALL.iter().map(|s| s.as_str()).collect();
            let statuses = CategoryOption::for_field(&data, "status", &values);
            let values: Vec<&str> = PaymentStatus::ALL.iter().map(|s| s.as_str()).collect();
            let payment_statuses = CategoryOption::for_field(&data, "paymentStatus", &values);
            let mut context = Context::new();
            context.insert("current_page", "reservations");
            context.insert("list", &data);
            context.insert("statuses", &statuses);
            context.insert("payment_statuses", &payment_statuses);
            render_template(&tera, "admin/reservations.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/admin/reservations/export")]
pub async fn export_reservations(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
) -> impl Responder {
    let query = match list_query(params.into_inner()) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match reservations_service::export_reservations(state.reservations.as_ref(), &query, Utc::now())
    {
        Ok(body) => csv_attachment("reservations.csv", body),
        Err(err) => service_error_response(err),
    }
}
