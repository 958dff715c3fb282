use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::{
    entity,
    error::UserResult,
    models::{CreateUser, User},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn select() -> Select<entity::Entity> {
        entity::Entity::find().order_by_asc(entity::Column::Id)
    }

    async fn fetch(&self, query: Select<entity::Entity>) -> UserResult<Vec<User>> {
        let models = query.all(self.base.db()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        self.fetch(Self::select()).await
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(self.base.db())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> UserResult<Vec<User>> {
        tracing::debug!(name, "Finding users by name");
        self.fetch(Self::select().filter(entity::Column::Name.eq(name)))
            .await
    }

    async fn find_by_name_containing(&self, fragment: &str) -> UserResult<Vec<User>> {
        tracing::debug!(fragment, "Finding users by name fragment");
        let pattern = format!("%{}%", fragment);
        self.fetch(Self::select().filter(Expr::cust_with_values(
            r#""users"."name" ILIKE $1"#,
            [pattern],
        )))
        .await
    }

    async fn find_by_email_domain(&self, domain: &str) -> UserResult<Vec<User>> {
        tracing::debug!(domain, "Finding users by email domain");
        // Substring, not suffix: "example.com" also matches "x@example.com.evil.org"
        let pattern = format!("%@{}%", domain);
        self.fetch(Self::select().filter(Expr::cust_with_values(
            r#""users"."email" ILIKE $1"#,
            [pattern],
        )))
        .await
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(user_id = model.id, email = %model.email, "Created user");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
        } else {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }
}
