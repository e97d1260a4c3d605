//! SeaORM implementation of the Author store

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, Value,
};

use crate::domain::{Author, DomainError, EntityStore};
use crate::models::author::{self, ActiveModel, Entity as AuthorEntity};
use crate::models::notice::{self, Entity as NoticeEntity};

/// SeaORM-based implementation of `EntityStore<Author>`
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<author::Model> for Author {
    fn from(a: author::Model) -> Self {
        Author {
            id: Some(a.id),
            first_name: a.first_name,
            last_name: a.last_name,
        }
    }
}

#[async_trait]
impl EntityStore<Author> for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id).one(&self.db).await?;

        Ok(author.map(Author::from))
    }

    async fn save(&self, author: Author) -> Result<Author, DomainError> {
        let saved = match author.id {
            None => {
                let new_author = ActiveModel {
                    first_name: Set(author.first_name),
                    last_name: Set(author.last_name),
                    ..Default::default()
                };
                new_author.insert(&self.db).await?
            }
            Some(id) => {
                let existing = AuthorEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;

                let mut active_model: ActiveModel = existing.into();
                active_model.first_name = Set(author.first_name);
                active_model.last_name = Set(author.last_name);
                active_model.update(&self.db).await?
            }
        };

        Ok(Author::from(saved))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Notices only reference authors, they survive with the link cleared
        NoticeEntity::update_many()
            .col_expr(notice::Column::AuthorId, Expr::value(Value::BigInt(None)))
            .filter(notice::Column::AuthorId.eq(id))
            .exec(&txn)
            .await?;

        let result = AuthorEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
