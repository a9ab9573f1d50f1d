//! HTTP handlers for the admin screens and the JSON API.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get};
use tera::{Context, Tera};

use crate::dto::list::ListPageQuery;
use crate::forms::list::ListQueryForm;
use crate::services::ServiceError;

pub mod api;
pub mod reservations;
pub mod users;

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/admin/reservations")
}

/// Maps a service failure to the response status the admin screens use.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::TypeConstraint(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Source(err) => {
            log::error!("Data source failed: {err}");
            HttpResponse::ServiceUnavailable().finish()
        }
        ServiceError::Internal(message) => {
            log::error!("Internal error: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Validates the list query string, answering 400 on failure.
pub(crate) fn list_query(form: ListQueryForm) -> Result<ListPageQuery, HttpResponse> {
    ListPageQuery::try_from(form).map_err(|err| {
        log::warn!("Rejected list query: {err}");
        service_error_response(ServiceError::from(err))
    })
}

pub(crate) fn csv_attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body)
}
