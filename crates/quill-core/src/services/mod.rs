//! Application services - orchestration between transport and persistence.

mod post;

pub use post::{DefaultPostService, PostService};
