//! Repository implementations using SeaORM

pub mod author_repository;
pub mod board_repository;
pub mod notice_repository;

pub use author_repository::SeaOrmAuthorRepository;
pub use board_repository::SeaOrmBoardRepository;
pub use notice_repository::SeaOrmNoticeRepository;
