#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod source;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use chrono::Utc;
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::models::state::AdminState;
    use crate::routes::api::{
        api_v1_reservation, api_v1_reservations, api_v1_user, api_v1_users,
    };
    use crate::routes::index;
    use crate::routes::reservations::{export_reservations, show_reservations};
    use crate::routes::users::{export_users, show_users};
    use crate::source::sample;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Sample data is generated once and shared by every worker.
        let now = Utc::now();
        let users = sample::users_source(server_config.sample_users, server_config.seed, now)
            .map_err(|e| std::io::Error::other(format!("Failed to generate users: {e}")))?;
        let reservations = sample::reservations_source(
            server_config.sample_reservations,
            server_config.seed.map(|seed| seed.wrapping_add(1)),
            now,
        )
        .map_err(|e| std::io::Error::other(format!("Failed to generate reservations: {e}")))?;

        log::info!(
            "Serving {} users and {} reservations",
            users.len(),
            reservations.len()
        );

        let state = AdminState::new(
            Arc::new(users),
            Arc::new(reservations),
            server_config.page_size,
        );

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allowed_origin(&server_config.frontend_url)
                .allowed_methods(vec!["GET"])
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", server_config.assets_dir.clone()))
                .service(
                    web::scope("/api")
                        .service(api_v1_users)
                        .service(api_v1_user)
                        .service(api_v1_reservations)
                        .service(api_v1_reservation),
                )
                .service(index)
                .service(export_users)
                .service(show_users)
                .service(export_reservations)
                .service(show_reservations)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
