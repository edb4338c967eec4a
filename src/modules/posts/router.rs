use axum::{Router, routing::get};

use crate::modules::posts::controller::{
    create_post, delete_post, get_post, list_my_posts, list_user_posts, update_post,
};
use crate::state::AppState;

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_posts).post(create_post).put(update_post))
        .route("/{id}", get(get_post).delete(delete_post))
        .route("/user/{author_id}", get(list_user_posts))
}
