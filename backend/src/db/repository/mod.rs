//! Repository trait definitions for database operations.
//!
//! Storage is split into two focused traits:
//!
//! - [`CatalogRepository`]: create/read operations for schools, courses and rooms
//! - [`StructureRepository`]: the read-only snapshot of one school's courses and
//!   rooms consumed by the distribution core
//!
//! # Convenience Trait Bound
//!
//! For code that needs both, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn seed<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let school = repo.create_school(&new_school, &hash).await?;
//!     let structure = repo.fetch_school_structure(school.id).await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod structure;

pub use catalog::CatalogRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use structure::StructureRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: CatalogRepository + StructureRepository {}

// Blanket implementation: anything implementing both traits is a FullRepository
impl<T> FullRepository for T where T: CatalogRepository + StructureRepository {}
