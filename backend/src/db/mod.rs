//! Storage for schools, courses and rooms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, seed loader)              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Rules           │
//! │  - Input normalization and validation                   │
//! │  - Secret hashing                                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - CatalogRepository (create/list)                      │
//! │  - StructureRepository (distribution snapshot)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use colegio_backend::db::{services, RepositoryFactory, RepositoryType};
//!
//! let repo = RepositoryFactory::create(RepositoryType::Local, None).await?;
//! let schools = services::list_schools(repo.as_ref()).await?;
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod secret;
pub mod seed;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    CatalogRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    StructureRepository,
};
pub use secret::hash_secret;
pub use seed::{apply_seed, SeedData, SeedSummary};
