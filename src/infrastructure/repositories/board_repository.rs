//! SeaORM implementation of the Board store
//!
//! A board owns its notices: inserting a board inserts the notices it
//! carries, deleting it deletes them. Both happen in one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::notice_repository::{insert_notice, to_notice};
use crate::domain::{Board, DomainError, EntityStore, Notice};
use crate::models::author::Entity as AuthorEntity;
use crate::models::board::{self, ActiveModel, Entity as BoardEntity};
use crate::models::notice::{self, Entity as NoticeEntity};

/// SeaORM-based implementation of `EntityStore<Board>`
pub struct SeaOrmBoardRepository {
    db: DatabaseConnection,
}

impl SeaOrmBoardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Loads the notices (with authors) of the given boards, grouped by board id.
async fn notices_by_board<C>(
    conn: &C,
    board_ids: Vec<i64>,
) -> Result<HashMap<i64, Vec<Notice>>, DomainError>
where
    C: ConnectionTrait,
{
    if board_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = NoticeEntity::find()
        .filter(notice::Column::BoardId.is_in(board_ids))
        .order_by_asc(notice::Column::Id)
        .find_also_related(AuthorEntity)
        .all(conn)
        .await?;

    let mut grouped: HashMap<i64, Vec<Notice>> = HashMap::new();
    for (n, a) in rows {
        if let Some(board_id) = n.board_id {
            grouped.entry(board_id).or_default().push(to_notice(n, a));
        }
    }

    Ok(grouped)
}

#[async_trait]
impl EntityStore<Board> for SeaOrmBoardRepository {
    async fn find_all(&self) -> Result<Vec<Board>, DomainError> {
        let boards = BoardEntity::find()
            .order_by_asc(board::Column::Id)
            .all(&self.db)
            .await?;

        let mut notices =
            notices_by_board(&self.db, boards.iter().map(|b| b.id).collect()).await?;

        Ok(boards
            .into_iter()
            .map(|b| Board {
                id: Some(b.id),
                notices: notices.remove(&b.id).unwrap_or_default(),
                title: b.title,
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, DomainError> {
        let Some(b) = BoardEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut notices = notices_by_board(&self.db, vec![b.id]).await?;

        Ok(Some(Board {
            id: Some(b.id),
            notices: notices.remove(&b.id).unwrap_or_default(),
            title: b.title,
        }))
    }

    async fn save(&self, board: Board) -> Result<Board, DomainError> {
        let saved_id = match board.id {
            None => {
                let txn = self.db.begin().await?;

                let new_board = ActiveModel {
                    title: Set(board.title),
                    ..Default::default()
                };
                let saved = new_board.insert(&txn).await?;

                for n in board.notices {
                    insert_notice(&txn, n, Some(saved.id)).await?;
                }

                txn.commit().await?;
                saved.id
            }
            Some(id) => {
                let existing = BoardEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;

                let mut active_model: ActiveModel = existing.into();
                active_model.title = Set(board.title);
                active_model.update(&self.db).await?.id
            }
        };

        self.find_by_id(saved_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        NoticeEntity::delete_many()
            .filter(notice::Column::BoardId.eq(id))
            .exec(&txn)
            .await?;

        let result = BoardEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
