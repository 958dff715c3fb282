//! Users Domain
//!
//! Persistence and query logic for user records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← filter dispatch, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, filter options
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserRepository, UserFilter, UserService};
//!
//! # async fn example() -> domain_users::UserResult<()> {
//! let service = UserService::new(InMemoryUserRepository::new());
//!
//! service.create_user("John Doe", "john@example.com").await?;
//! let does = service.filter_users(UserFilter::name_containing("doe")).await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, FilterCriterion, User, UserFilter};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
