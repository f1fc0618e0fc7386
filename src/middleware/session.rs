use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use std::convert::Infallible;
use time::Duration;

use crate::types::page::Page;

pub const PAGE_COOKIE: &str = "current_page";

/// Page selector of the requesting session, read from the encrypted cookie.
/// Sessions without a (readable) cookie start at [`Page::Home`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentPage(pub Page);

impl<S> FromRequestParts<S> for CurrentPage
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Self(page_from_jar(&jar)))
    }
}

pub fn page_from_jar(jar: &PrivateCookieJar) -> Page {
    jar.get(PAGE_COOKIE)
        .and_then(|c| c.value().parse().ok())
        .unwrap_or_default()
}

pub fn store_page(jar: PrivateCookieJar, page: Page) -> PrivateCookieJar {
    jar.add(build_cookie(PAGE_COOKIE, page.as_str().to_string()))
}

fn build_cookie(name: &str, value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(12))
        .build()
}
