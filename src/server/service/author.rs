//! Author business logic.
//!
//! Wraps `AuthorRepository` with the id checks, existence checks and transactions the
//! author endpoints need. Read failures surface as `AppError::DbErr`; failures while
//! writing or committing surface as `AppError::SaveFailed`.

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::author::AuthorRepository,
    error::AppError,
    model::{
        author::{Author, AuthorsResourceParam, CreateAuthorParam},
        pagination::PagedList,
    },
    util::parse::ensure_id,
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of authors for the listing parameters.
    pub async fn get_paged(&self, param: &AuthorsResourceParam) -> Result<PagedList<Author>, AppError> {
        let repo = AuthorRepository::new(self.db);

        let (authors, total) = repo.get_paged(param).await?;

        Ok(PagedList::new(
            authors,
            total,
            param.page_number,
            param.page_size,
        ))
    }

    /// Gets an author by id, `None` when it does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Author>, AppError> {
        ensure_id(id, "authorId")?;

        let repo = AuthorRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates an author and its initial courses in one transaction.
    pub async fn create(&self, param: CreateAuthorParam) -> Result<Author, AppError> {
        let txn = self.db.begin().await.map_err(AppError::SaveFailed)?;

        let author = AuthorRepository::new(&txn)
            .create(param)
            .await
            .map_err(AppError::SaveFailed)?;

        txn.commit().await.map_err(AppError::SaveFailed)?;

        tracing::info!("Created author {} ({})", author.full_name(), author.id);

        Ok(author)
    }

    /// Deletes an author together with its courses.
    ///
    /// Returns false if the author doesn't exist.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        ensure_id(id, "authorId")?;

        if !AuthorRepository::new(self.db).exists(id).await? {
            return Ok(false);
        }

        let txn = self.db.begin().await.map_err(AppError::SaveFailed)?;

        let deleted = AuthorRepository::new(&txn)
            .delete(id)
            .await
            .map_err(AppError::SaveFailed)?;

        txn.commit().await.map_err(AppError::SaveFailed)?;

        if deleted {
            tracing::info!("Deleted author {}", id);
        }

        Ok(deleted)
    }

    /// Gets a set of authors by id, ordered by first name then last name.
    ///
    /// Repeated ids are only looked up once.
    ///
    /// # Returns
    /// - `Ok(Vec<Author>)` - Every requested author
    /// - `Err(AppError::BadRequest)` - No ids given or a nil id
    /// - `Err(AppError::NotFound)` - At least one id is unknown
    pub async fn get_collection(&self, ids: &[Uuid]) -> Result<Vec<Author>, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest("No ids were provided".to_string()));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        let mut unique: Vec<Uuid> = Vec::with_capacity(ids.len());
        for &id in ids {
            ensure_id(id, "ids")?;
            if seen.insert(id) {
                unique.push(id);
            }
        }

        let authors = AuthorRepository::new(self.db).get_by_ids(&unique).await?;

        if authors.len() != unique.len() {
            return Err(AppError::NotFound(
                "One or more authors were not found".to_string(),
            ));
        }

        Ok(authors)
    }

    /// Creates several authors in one transaction.
    ///
    /// Either every author is stored or none is. An empty collection is rejected.
    pub async fn create_collection(
        &self,
        params: Vec<CreateAuthorParam>,
    ) -> Result<Vec<Author>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No authors were provided".to_string()));
        }

        let txn = self.db.begin().await.map_err(AppError::SaveFailed)?;

        let repo = AuthorRepository::new(&txn);
        let mut authors = Vec::with_capacity(params.len());
        for param in params {
            authors.push(repo.create(param).await.map_err(AppError::SaveFailed)?);
        }

        txn.commit().await.map_err(AppError::SaveFailed)?;

        tracing::info!("Created collection of {} authors", authors.len());

        Ok(authors)
    }
}
