pub mod build;
pub mod post;
pub mod source;

pub use build::BuildResult;
pub use post::CanonicalPost;
pub use source::FeedSource;
