use axum::response::IntoResponse;

use crate::template;

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

pub async fn page() -> impl IntoResponse {
    template::render(AboutTemplate)
}
