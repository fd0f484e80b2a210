//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create_post))
                .route("", web::get().to(posts::list_posts))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}
