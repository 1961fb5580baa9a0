use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use cms_core::RecordId;
use cms_core::error::RepoError;
use cms_core::ports::BaseRepository;

/// Ties a table to the domain record it stores and the draft it is created from.
pub trait Resource: EntityTrait {
    type Record: From<Self::Model> + Send + Sync + 'static;
    type Draft: Into<Self::ActiveModel> + Send + 'static;
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

/// Classify a driver error. Key and foreign-key violations become
/// [`RepoError::Constraint`], pool failures [`RepoError::Connection`].
pub(crate) fn repo_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return RepoError::Constraint(detail);
        }
        _ => {}
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E> BaseRepository<E::Record, E::Draft> for PostgresBaseRepository<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = RecordId>,
{
    async fn find_by_id(&self, id: RecordId) -> Result<Option<E::Record>, RepoError> {
        let result = E::find_by_id(id).one(self.db.as_ref()).await.map_err(repo_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, draft: E::Draft) -> Result<E::Record, RepoError> {
        let active_model: E::ActiveModel = draft.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(repo_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: RecordId) -> Result<u64, RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.rows_affected)
    }
}
