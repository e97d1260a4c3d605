//! Transport records exchanged over HTTP and their mapping to domain entities.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Author, Board, Notice};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

/// Author as nested in a notice. Only `id` is read on writes,
/// the names are filled in on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRefDto {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub id: Option<i64>,
    pub creation_date: Option<String>,
    pub title: String,
    pub description: String,
    pub author: Option<AuthorRefDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub notice_list: Vec<NoticeDto>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

impl From<Author> for AuthorRefDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: Some(author.first_name),
            last_name: Some(author.last_name),
        }
    }
}

impl From<AuthorRefDto> for Author {
    fn from(dto: AuthorRefDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
        }
    }
}

impl From<Notice> for NoticeDto {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            creation_date: notice.creation_date,
            title: notice.title,
            description: notice.description,
            author: notice.author.map(AuthorRefDto::from),
        }
    }
}

impl From<NoticeDto> for Notice {
    fn from(dto: NoticeDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            creation_date: dto.creation_date,
            author: dto.author.map(Author::from),
        }
    }
}

impl From<Board> for BoardDto {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            notice_list: board.notices.into_iter().map(NoticeDto::from).collect(),
        }
    }
}

impl From<BoardDto> for Board {
    fn from(dto: BoardDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            notices: dto.notice_list.into_iter().map(Notice::from).collect(),
        }
    }
}
