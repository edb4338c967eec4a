use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::posts::model::{CreatePostDto, Post, UpdatePostDto};
use crate::modules::users::model::{
    CreateUserDto, LoginUserDto, RegisterUserDto, TokenResponse, User, UserRole, UserSummary,
};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::create_user,
        crate::modules::posts::controller::list_my_posts,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::update_post,
        crate::modules::posts::controller::get_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::posts::controller::list_user_posts,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserSummary,
            RegisterUserDto,
            CreateUserDto,
            LoginUserDto,
            TokenResponse,
            Post,
            CreatePostDto,
            UpdatePostDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login, and user listing"),
        (name = "Posts", description = "Post management and visibility-filtered reads")
    ),
    info(
        title = "Inkpost API",
        version = "0.1.0",
        description = "A blogging REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication and role-based post visibility.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
