use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
///
/// Read operations return users in ascending id order. Callers must not rely
/// on any particular order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users; empty when none exist
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// The user with exactly this email (case-sensitive), if any
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Users whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> UserResult<Vec<User>>;

    /// Users whose name contains `fragment`, ignoring case
    async fn find_by_name_containing(&self, fragment: &str) -> UserResult<Vec<User>>;

    /// Users whose email contains `@domain`, ignoring case
    ///
    /// This is a substring match, not a suffix match: `example.com` also
    /// matches `x@example.com.evil.org`.
    async fn find_by_email_domain(&self, domain: &str) -> UserResult<Vec<User>>;

    /// Persist a new user and return it with its generated id
    ///
    /// Email uniqueness is left to the store.
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Remove the user with this id; unknown ids are not an error
    async fn delete(&self, id: i32) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Mirrors the Postgres table: serial ids starting at 1 and a unique email.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&User) -> bool) -> Vec<User> {
        let table = self.table.read().await;
        table.rows.values().filter(|u| predicate(u)).cloned().collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        Ok(self.select(|u| u.email == email).await.into_iter().next())
    }

    async fn find_by_name(&self, name: &str) -> UserResult<Vec<User>> {
        Ok(self.select(|u| u.name == name).await)
    }

    async fn find_by_name_containing(&self, fragment: &str) -> UserResult<Vec<User>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .select(|u| u.name.to_lowercase().contains(&needle))
            .await)
    }

    async fn find_by_email_domain(&self, domain: &str) -> UserResult<Vec<User>> {
        let needle = format!("@{}", domain.to_lowercase());
        Ok(self
            .select(|u| u.email.to_lowercase().contains(&needle))
            .await)
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.email == input.email) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        table.next_id += 1;
        let user = User {
            id: table.next_id,
            name: input.name,
            email: input.email,
        };
        table.rows.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        } else {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }
}
