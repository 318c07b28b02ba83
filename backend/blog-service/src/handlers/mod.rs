/// HTTP handlers for the blog service
///
/// Handlers only extract input, call into the service layer, and shape the
/// JSON response. Route paths and response bodies match what existing
/// clients already use.
pub mod auth;
pub mod content;

pub use auth::{login, logout, register};
pub use content::{create_comment, create_post, delete_content, edit_content, get_post, list_posts};

use actix_web::web;

/// Register the public HTTP surface. Shared by `main` and the integration
/// tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(auth::register)))
        .service(web::resource("/login").route(web::post().to(auth::login)))
        .service(web::resource("/logout").route(web::get().to(auth::logout)))
        .service(
            web::resource("/publicaciones")
                .route(web::get().to(content::list_posts))
                .route(web::post().to(content::create_post)),
        )
        .service(web::resource("/publicaciones/{id}").route(web::get().to(content::get_post)))
        .service(web::resource("/comentar/{post_id}").route(web::post().to(content::create_comment)))
        .service(web::resource("/editar/{id}").route(web::put().to(content::edit_content)))
        .service(web::resource("/eliminar/{id}").route(web::delete().to(content::delete_content)));
}
