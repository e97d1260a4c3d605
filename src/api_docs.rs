use crate::api;
use crate::api::dto::{AuthorDto, AuthorRefDto, BoardDto, NoticeDto};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::health::health_check),
    components(schemas(NoticeDto, BoardDto, AuthorDto, AuthorRefDto)),
    tags(
        (name = "noticeboard", description = "Notice board API: /notices, /boards and /authors share the same CRUD contract")
    )
)]
pub struct ApiDoc;
