use axum::{
    Form,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::middleware::session::{CurrentPage, page_from_jar, store_page};
use crate::render::{FormState, Outcome, render_page};
use crate::types::page::NavEvent;

#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    pub event: String,
}

/// GET / -> renders whatever page the session is on.
pub async fn show_page(CurrentPage(page): CurrentPage) -> Html<String> {
    Html(render_page(page, &FormState::default(), &Outcome::Empty))
}

/// POST /navigate -> applies one button press, then re-renders via redirect.
pub async fn navigate(
    jar: PrivateCookieJar,
    Form(form): Form<NavigateForm>,
) -> Result<(PrivateCookieJar, Redirect), AppError> {
    let event: NavEvent = form.event.parse()?;
    let from = page_from_jar(&jar);
    let to = from.transition(event);
    info!(from = %from, to = %to, event = event.as_str(), "navigation");

    Ok((store_page(jar, to), Redirect::to("/")))
}
