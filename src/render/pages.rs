use crate::db::models::RecordSet;
use crate::render::html::{self, escape};
use crate::types::page::{NavEvent, Page};

/// Result of a form submission, shown under the form.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Error(String),
    Success(String),
    Records(RecordSet),
}

/// Values typed into the page's inputs, echoed back after a submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub table_name: String,
    pub values: String,
}

/// Render the whole document for `page`.
pub fn render_page(page: Page, form: &FormState, outcome: &Outcome) -> String {
    let (title, body) = match page {
        Page::Home => ("DBMS Projects", html::paragraph("WELCOME to DBMS Projects")),
        Page::Dashboard => (
            "Dashboard",
            html::paragraph("Select which operation you want to perform"),
        ),
        Page::Records => ("Display All Records", records_form(form)),
        Page::AddRecord => ("Add a New Record", add_record_form(form)),
        Page::DeleteRecord => ("Delete a Record", placeholder()),
        Page::UpdateRecord => ("Update a Record", placeholder()),
        Page::SearchRecord => ("Search a Record", placeholder()),
        Page::CreateTable => ("Create a New Table", placeholder()),
    };

    let mut out = body;
    out.push_str(&render_outcome(outcome));
    out.push_str(&nav_buttons(page));
    html::document(title, &out)
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Empty => String::new(),
        Outcome::Error(msg) => html::error(msg),
        Outcome::Success(msg) => html::success(msg),
        Outcome::Records(set) => html::record_table(set),
    }
}

fn records_form(form: &FormState) -> String {
    let mut out = html::paragraph("Enter the table name to see all records");
    out.push_str(&format!(
        r#"<form method="post" action="/records">
<label>Table Name <input type="text" name="table_name" value="{}"></label>
<button type="submit">See all records</button>
</form>
"#,
        escape(&form.table_name)
    ));
    out
}

fn add_record_form(form: &FormState) -> String {
    let mut out =
        html::paragraph("Enter the table name and one value per line, in column order");
    out.push_str(&format!(
        r#"<form method="post" action="/add-record">
<label>Table Name <input type="text" name="table_name" value="{}"></label><br>
<label>Values<br><textarea name="values" rows="6" cols="40">{}</textarea></label><br>
<button type="submit">Add record</button>
</form>
"#,
        escape(&form.table_name),
        escape(&form.values)
    ));
    out
}

fn placeholder() -> String {
    html::paragraph("This operation is not available yet.")
}

fn nav_buttons(page: Page) -> String {
    page.events()
        .iter()
        .map(|&event| nav_button(event))
        .collect()
}

fn nav_button(event: NavEvent) -> String {
    format!(
        r#"<form class="nav" method="post" action="/navigate"><input type="hidden" name="event" value="{}"><button type="submit">{}</button></form>
"#,
        event.as_str(),
        escape(event.label())
    )
}
