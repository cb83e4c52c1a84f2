pub mod post;

pub use post::PostDocument;
