use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::users::controller::{create_user, list_users, login_user, register_user};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}
