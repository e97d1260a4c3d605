//! Binding of each entity type to the generic CRUD contract.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::dto::{AuthorDto, BoardDto, NoticeDto};
use crate::domain::{Author, Board, Entity, Notice};

/// One entity type exposed through the uniform CRUD endpoints.
pub trait Resource: Send + Sync + 'static {
    type Entity: Entity + From<Self::Dto>;
    type Dto: From<Self::Entity> + Serialize + DeserializeOwned + Send + 'static;

    /// Path segment the resource is mounted under, e.g. `notices`
    const PATH: &'static str;
}

pub struct Notices;
pub struct Boards;
pub struct Authors;

impl Resource for Notices {
    type Entity = Notice;
    type Dto = NoticeDto;
    const PATH: &'static str = "notices";
}

impl Resource for Boards {
    type Entity = Board;
    type Dto = BoardDto;
    const PATH: &'static str = "boards";
}

impl Resource for Authors {
    type Entity = Author;
    type Dto = AuthorDto;
    const PATH: &'static str = "authors";
}
