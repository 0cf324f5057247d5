//! In-memory post repository - used when PostgreSQL is not compiled in,
//! and as a stand-in store for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Post store backed by a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Post, RepoError> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn create(&self, post: &Post) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!(
                "failed to create post {}: id already exists",
                post.id
            )));
        }
        store.insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, post: &Post) -> Result<(), RepoError> {
        if let Some(existing) = self.store.write().await.get_mut(&id) {
            existing.title = post.title.clone();
            existing.content = post.content.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str) -> Post {
        Post::new(title.to_string(), content.to_string())
    }

    #[tokio::test]
    async fn create_then_find() {
        let repo = InMemoryPostRepository::new();
        let post = post("A", "B");

        repo.create(&post).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        let post = post("A", "B");
        repo.create(&post).await.unwrap();

        let err = repo.create(&post).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_keeps_the_addressed_id() {
        let repo = InMemoryPostRepository::new();
        let original = post("A", "B");
        repo.create(&original).await.unwrap();

        let replacement = post("C", "D");
        repo.update(original.id, &replacement).await.unwrap();

        let stored = repo.find_by_id(original.id).await.unwrap();
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.title, "C");
        assert_eq!(stored.content, "D");
        assert!(matches!(
            repo.find_by_id(replacement.id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_rows_succeed() {
        let repo = InMemoryPostRepository::new();
        let missing = Uuid::new_v4();

        repo.update(missing, &post("A", "B")).await.unwrap();
        repo.delete(missing).await.unwrap();
        repo.delete(missing).await.unwrap();

        assert!(repo.is_empty().await);
    }
}
