use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Post use cases exposed to the transport layer.
///
/// Mirrors [`PostRepository`] one-to-one. Business rules (authorization,
/// validation, caching) belong here once they exist.
#[async_trait]
pub trait PostService: Send + Sync {
    async fn get_post(&self, id: Uuid) -> Result<Post, DomainError>;

    async fn create_post(&self, post: &Post) -> Result<(), DomainError>;

    async fn update_post(&self, id: Uuid, post: &Post) -> Result<(), DomainError>;

    async fn delete_post(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Pass-through [`PostService`] backed by any [`PostRepository`].
pub struct DefaultPostService {
    repo: Arc<dyn PostRepository>,
}

impl DefaultPostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PostService for DefaultPostService {
    async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo.find_by_id(id).await.map_err(|err| match err {
            RepoError::NotFound(id) => DomainError::NotFound {
                entity_type: "post",
                id,
            },
            other => DomainError::persistence(format!("fetch post {id}"), other),
        })
    }

    async fn create_post(&self, post: &Post) -> Result<(), DomainError> {
        self.repo
            .create(post)
            .await
            .map_err(|err| DomainError::persistence(format!("create post {}", post.id), err))
    }

    async fn update_post(&self, id: Uuid, post: &Post) -> Result<(), DomainError> {
        self.repo
            .update(id, post)
            .await
            .map_err(|err| DomainError::persistence(format!("update post {id}"), err))
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|err| DomainError::persistence(format!("delete post {id}"), err))
    }
}
