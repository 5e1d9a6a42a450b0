use axum::response::IntoResponse;

use crate::template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

pub async fn page() -> impl IntoResponse {
    template::render(IndexTemplate)
}
