pub mod posts;
pub mod users;

pub use self::posts::model::Post;
pub use self::users::model::User;
