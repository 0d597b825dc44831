//! HTTP handlers and route configuration.

mod admin;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes - the admin scope must be registered before the
            // catch-all {slug} route
            .service(
                web::scope("/posts")
                    .service(
                        web::scope("/admin")
                            .route("", web::get().to(admin::listing))
                            .route("/new", web::post().to(admin::create))
                            .route("/{slug}", web::post().to(admin::edit)),
                    )
                    .route("", web::get().to(posts::list))
                    .route("/{slug}", web::get().to(posts::detail)),
            ),
    );
}
