//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, SqlErr};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository over a pooled SeaORM connection.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn repo_error(context: String, err: DbErr) -> RepoError {
    let sql_err = err.sql_err();
    classify_db_err(&context, &err, sql_err)
}

/// Classify a driver error, prefixing it with what was being attempted.
///
/// `sql_err` is the backend-level classification of `err`, as returned by
/// [`DbErr::sql_err`].
pub(super) fn classify_db_err(context: &str, err: &DbErr, sql_err: Option<SqlErr>) -> RepoError {
    match (err, sql_err) {
        (DbErr::Conn(_) | DbErr::ConnectionAcquire(_), _) => {
            RepoError::Connection(format!("{context}: {err}"))
        }
        (_, Some(SqlErr::UniqueConstraintViolation(detail))) => {
            RepoError::Constraint(format!("{context}: {detail}"))
        }
        _ => RepoError::Query(format!("{context}: {err}")),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Post, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| repo_error(format!("failed to fetch post with ID {id}"), e))?;

        model.map(Into::into).ok_or(RepoError::NotFound(id))
    }

    async fn create(&self, post: &Post) -> Result<(), RepoError> {
        let active_model: post::ActiveModel = post.clone().into();

        PostEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| repo_error(format!("failed to create post {}", post.id), e))?;

        Ok(())
    }

    async fn update(&self, id: Uuid, post: &Post) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(post.title.clone()))
            .col_expr(post::Column::Content, Expr::value(post.content.clone()))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| repo_error(format!("failed to update post {id}"), e))?;

        tracing::debug!(post_id = %id, rows_affected = result.rows_affected, "Post update executed");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| repo_error(format!("failed to delete post {id}"), e))?;

        tracing::debug!(post_id = %id, rows_affected = result.rows_affected, "Post delete executed");
        Ok(())
    }
}
