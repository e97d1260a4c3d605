pub mod author;
pub mod board;
pub mod notice;
