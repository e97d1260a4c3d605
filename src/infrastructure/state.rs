//! Application state containing the resource services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBoardRepository, SeaOrmNoticeRepository,
};
use crate::resources::{Authors, Boards, Notices};
use crate::services::CrudService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub notices: CrudService<Notices>,
    pub boards: CrudService<Boards>,
    pub authors: CrudService<Authors>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let notices = CrudService::<Notices>::new(Arc::new(SeaOrmNoticeRepository::new(db.clone())));
        let boards = CrudService::<Boards>::new(Arc::new(SeaOrmBoardRepository::new(db.clone())));
        let authors = CrudService::<Authors>::new(Arc::new(SeaOrmAuthorRepository::new(db.clone())));

        Self {
            db,
            notices,
            boards,
            authors,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
