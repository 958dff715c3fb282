use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, FilterCriterion, User, UserFilter};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every user
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Look up a user by exact email
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository.find_by_email(email).await
    }

    /// Query users by the highest-priority option set in `filter`
    ///
    /// Exactly one repository query runs. See [`UserFilter::criterion`] for
    /// the precedence.
    #[tracing::instrument(skip(self))]
    pub async fn filter_users(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        match filter.criterion() {
            FilterCriterion::Email(email) => Ok(self
                .repository
                .find_by_email(&email)
                .await?
                .into_iter()
                .collect()),
            FilterCriterion::Name(name) => self.repository.find_by_name(&name).await,
            FilterCriterion::NameContains(fragment) => {
                self.repository.find_by_name_containing(&fragment).await
            }
            FilterCriterion::EmailDomain(domain) => {
                self.repository.find_by_email_domain(&domain).await
            }
            FilterCriterion::All => self.repository.find_all().await,
        }
    }

    /// Create a user; a taken email is rejected by the store, not here
    pub async fn create_user(&self, name: &str, email: &str) -> UserResult<User> {
        self.repository.create(CreateUser::new(name, email)).await
    }

    /// Delete a user by id; unknown ids succeed silently
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        self.repository.delete(id).await
    }
}
