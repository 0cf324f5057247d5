use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - the persistence gateway for the `posts` table.
///
/// Each method maps to exactly one parameterized statement.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch the post with the given id.
    ///
    /// Returns [`RepoError::NotFound`] when no row matches.
    async fn find_by_id(&self, id: Uuid) -> Result<Post, RepoError>;

    /// Insert a new row. Fails with [`RepoError::Constraint`] if the id is taken.
    async fn create(&self, post: &Post) -> Result<(), RepoError>;

    /// Replace title and content of the row addressed by `id`.
    ///
    /// `post.id` is ignored. Matching zero rows is not an error.
    async fn update(&self, id: Uuid, post: &Post) -> Result<(), RepoError>;

    /// Delete the row addressed by `id`. Matching zero rows is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
