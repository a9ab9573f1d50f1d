use actix_web::{Responder, get, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::user::UserStatus;
use crate::dto::list::CategoryOption;
use crate::forms::list::ListQueryForm;
use crate::models::state::AdminState;
use crate::routes::{csv_attachment, list_query, render_template, service_error_response};
use crate::services::users as users_service;

#[get("/admin/users")]
pub async fn show_users(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = match list_query(params.into_inner()) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match users_service::load_users_page(state.users.as_ref(), state.page_size, &query, Utc::now())
    {
        Ok(data) => {
            let values: Vec<&str> = UserStatus::ALL.iter().map(|s| s.as_str()).collect();
            let statuses = CategoryOption::for_field(&data, "status", &values);
            let mut context = Context::new();
            context.insert("current_page", "users");
            context.insert("list", &data);
            context.insert("statuses", &statuses);
            render_template(&tera, "admin/users.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/admin/users/export")]
pub async fn export_users(
    params: web::Query<ListQueryForm>,
    state: web::Data<AdminState>,
) -> impl Responder {
    let query = match list_query(params.into_inner()) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match users_service::export_users(state.users.as_ref(), &query, Utc::now()) {
        Ok(body) => csv_attachment("users.csv", body),
        Err(err) => service_error_response(err),
    }
}
