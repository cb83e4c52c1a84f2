pub mod user;

pub use user::UserDocument;
