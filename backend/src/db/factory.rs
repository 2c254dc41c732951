//! Repository factory for dependency injection.
//!
//! Creates the configured storage backend and, when a seed file is
//! configured, pre-populates it.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use super::seed::{apply_seed, SeedData};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = RepositoryError;

    /// Accepts "local", "memory" and "in-memory", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            other => Err(RepositoryError::ConfigurationError {
                message: format!("Unknown repository type: {}", other),
                context: ErrorContext::new("parse_repository_type"),
            }),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use colegio_backend::db::{CatalogRepository, RepositoryFactory, RepositoryType};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = RepositoryFactory::create(RepositoryType::Local, None).await.unwrap();
/// assert!(repo.health_check().await.unwrap());
/// # });
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository, seeding it from `seed_file` when given.
    pub async fn create(
        repo_type: RepositoryType,
        seed_file: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo = match repo_type {
            RepositoryType::Local => Self::create_local(),
        };

        if let Some(path) = seed_file {
            let seed = SeedData::from_file(path)?;
            apply_seed(repo.as_ref(), &seed)
                .await
                .map_err(|e| e.with_operation("seed_repository"))?;
        }

        Ok(repo)
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }
}
