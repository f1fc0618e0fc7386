use axum::{
    Form, Json,
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::db::{Connector, RecordSet, TableAccess, TableHandle};
use crate::error::AppError;
use crate::middleware::session::store_page;
use crate::render::{FormState, Outcome, render_page};
use crate::router::AppState;
use crate::types::page::Page;

#[derive(Debug, Deserialize)]
pub struct RecordsForm {
    #[serde(default)]
    pub table_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddRecordForm {
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub values: String,
}

/// POST /records -> shows every row of the named table.
///
/// The session is moved to the records page, so a reload lands on the form.
pub async fn submit_records<C>(
    State(state): State<AppState<C>>,
    jar: PrivateCookieJar,
    Form(form): Form<RecordsForm>,
) -> (PrivateCookieJar, Html<String>)
where
    C: Connector + 'static,
{
    let outcome = match TableHandle::parse(&form.table_name) {
        Ok(table) => {
            let access = TableAccess::for_table(table, state.connector());
            match access.get_all_records().await {
                Ok(set) => Outcome::Records(set),
                Err(e) => error_outcome(e),
            }
        }
        Err(e) => error_outcome(e),
    };

    let form = FormState {
        table_name: form.table_name,
        ..FormState::default()
    };
    let html = Html(render_page(Page::Records, &form, &outcome));
    (store_page(jar, Page::Records), html)
}

/// POST /add-record -> inserts one row, values given one per line.
pub async fn submit_add_record<C>(
    State(state): State<AppState<C>>,
    jar: PrivateCookieJar,
    Form(form): Form<AddRecordForm>,
) -> (PrivateCookieJar, Html<String>)
where
    C: Connector + 'static,
{
    let outcome = match TableHandle::parse(&form.table_name)
        .and_then(|table| Ok((table, parse_values(&form.values)?)))
    {
        Ok((table, values)) => {
            let access = TableAccess::for_table(table, state.connector());
            match access.add_record(&values).await {
                Ok(msg) => Outcome::Success(msg),
                Err(e) => error_outcome(e),
            }
        }
        Err(e) => error_outcome(e),
    };

    let form = FormState {
        table_name: form.table_name,
        values: form.values,
    };
    let html = Html(render_page(Page::AddRecord, &form, &outcome));
    (store_page(jar, Page::AddRecord), html)
}

/// GET /api/records/{table} -> the same rows as JSON.
pub async fn api_records<C>(
    State(state): State<AppState<C>>,
    Path(table): Path<String>,
) -> Result<Json<RecordSet>, AppError>
where
    C: Connector + 'static,
{
    let access = TableAccess::with_connector(&table, state.connector())?;
    Ok(Json(access.get_all_records().await?))
}

/// One value per line. Trailing blank lines are dropped; blank lines in
/// between are kept as empty strings.
pub fn parse_values(text: &str) -> Result<Vec<String>, AppError> {
    let text = text.trim_end_matches(['\r', '\n']);
    if text.is_empty() {
        return Err(AppError::NoValues);
    }
    Ok(text.lines().map(str::to_string).collect())
}

fn error_outcome(e: AppError) -> Outcome {
    if e.is_input_error() {
        debug!(error = %e, "form rejected");
    } else {
        warn!(error = %e, "operation failed");
    }
    Outcome::Error(e.to_string())
}
