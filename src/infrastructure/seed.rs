use crate::models::{author, board, notice};
use sea_orm::*;

/// Inserts the demo board: two authors, one board and four notices.
/// Does nothing when authors already exist.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if author::Entity::find().count(db).await? > 0 {
        tracing::info!("Database already holds data, skipping demo seed");
        return Ok(());
    }

    // 1. Authors
    let mut author_ids = Vec::new();
    for (first_name, last_name) in [("John", "Doe"), ("Jane", "Roe")] {
        let author = author::ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            ..Default::default()
        };
        let res = author::Entity::insert(author).exec(db).await?;
        author_ids.push(res.last_insert_id);
    }

    // 2. Board
    let board = board::ActiveModel {
        title: Set("Board 1 title".to_owned()),
        ..Default::default()
    };
    let board_id = board::Entity::insert(board).exec(db).await?.last_insert_id;

    // 3. Notices, the first two pinned to the board
    for number in 1..=4usize {
        let notice = notice::ActiveModel {
            title: Set(format!("Notice {} title", number)),
            description: Set(format!("Notice {} description", number)),
            creation_date: Set(chrono::Utc::now().to_rfc3339()),
            author_id: Set(author_ids.get((number - 1) % author_ids.len()).copied()),
            board_id: Set((number <= 2).then_some(board_id)),
            ..Default::default()
        };
        notice::Entity::insert(notice).exec(db).await?;
    }

    Ok(())
}
