use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Anything the database reports, passed through untranslated.
    /// A duplicate email on create lands here as the unique-constraint violation.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Unique-email violation raised by the in-memory store
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Whether the store rejected the write because the email is taken
    pub fn is_unique_violation(&self) -> bool {
        match self {
            UserError::DuplicateEmail(_) => true,
            UserError::Database(err) => matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
        }
    }
}
