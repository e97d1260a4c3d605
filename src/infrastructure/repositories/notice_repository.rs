//! SeaORM implementation of the Notice store

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use crate::domain::{Author, DomainError, EntityStore, Notice};
use crate::models::author::{self, Entity as AuthorEntity};
use crate::models::notice::{self, ActiveModel, Entity as NoticeEntity};

/// SeaORM-based implementation of `EntityStore<Notice>`
pub struct SeaOrmNoticeRepository {
    db: DatabaseConnection,
}

impl SeaOrmNoticeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn to_notice(model: notice::Model, author: Option<author::Model>) -> Notice {
    Notice {
        id: Some(model.id),
        title: model.title,
        description: model.description,
        creation_date: Some(model.creation_date),
        author: author.map(Author::from),
    }
}

/// Checks an author reference and returns the id to store.
pub(crate) async fn resolve_author<C>(
    conn: &C,
    author: Option<&Author>,
) -> Result<Option<i64>, DomainError>
where
    C: ConnectionTrait,
{
    let Some(author) = author else {
        return Ok(None);
    };

    let id = author.id.ok_or_else(|| {
        DomainError::Validation("author reference must carry an id".to_string())
    })?;

    match AuthorEntity::find_by_id(id).one(conn).await? {
        Some(_) => Ok(Some(id)),
        None => Err(DomainError::Validation(format!(
            "author with id {} does not exist",
            id
        ))),
    }
}

/// Inserts a fresh notice row, stamping its creation date.
pub(crate) async fn insert_notice<C>(
    conn: &C,
    notice: Notice,
    board_id: Option<i64>,
) -> Result<notice::Model, DomainError>
where
    C: ConnectionTrait,
{
    let author_id = resolve_author(conn, notice.author.as_ref()).await?;

    let new_notice = ActiveModel {
        title: Set(notice.title),
        description: Set(notice.description),
        creation_date: Set(chrono::Utc::now().to_rfc3339()),
        author_id: Set(author_id),
        board_id: Set(board_id),
        ..Default::default()
    };

    Ok(new_notice.insert(conn).await?)
}

#[async_trait]
impl EntityStore<Notice> for SeaOrmNoticeRepository {
    async fn find_all(&self) -> Result<Vec<Notice>, DomainError> {
        let notices = NoticeEntity::find()
            .order_by_asc(notice::Column::Id)
            .find_also_related(AuthorEntity)
            .all(&self.db)
            .await?;

        Ok(notices
            .into_iter()
            .map(|(n, a)| to_notice(n, a))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notice>, DomainError> {
        let notice = NoticeEntity::find_by_id(id)
            .find_also_related(AuthorEntity)
            .one(&self.db)
            .await?;

        Ok(notice.map(|(n, a)| to_notice(n, a)))
    }

    async fn save(&self, notice: Notice) -> Result<Notice, DomainError> {
        let saved = match notice.id {
            None => insert_notice(&self.db, notice, None).await?,
            Some(id) => {
                let existing = NoticeEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;
                let author_id = resolve_author(&self.db, notice.author.as_ref()).await?;

                // creation_date and board_id are left as stored
                let mut active_model: ActiveModel = existing.into();
                active_model.title = Set(notice.title);
                active_model.description = Set(notice.description);
                active_model.author_id = Set(author_id);
                active_model.update(&self.db).await?
            }
        };

        self.find_by_id(saved.id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let result = NoticeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
