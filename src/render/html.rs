use crate::db::models::RecordSet;
use std::fmt::Write;

pub const NO_RECORDS: &str = "No records found in the table.";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full HTML document around `body`.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 60rem; margin: 2rem auto; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: 0.25rem 0.5rem; text-align: left; }}
.error {{ color: #b00020; }}
.success {{ color: #1b5e20; }}
.null {{ color: #888; font-style: italic; }}
form.nav {{ display: inline; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>\n", escape(text))
}

pub fn error(text: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape(text))
}

pub fn success(text: &str) -> String {
    format!("<p class=\"success\">{}</p>\n", escape(text))
}

/// Table with one header cell per column and one row per record.
/// An empty set renders the "no records" message instead.
pub fn record_table(set: &RecordSet) -> String {
    if set.is_empty() {
        return paragraph(NO_RECORDS);
    }

    let mut out = String::from("<table>\n<thead><tr>");
    for column in &set.columns {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &set.rows {
        out.push_str("<tr>");
        for cell in row {
            if cell.is_null() {
                out.push_str("<td class=\"null\">NULL</td>");
            } else {
                let _ = write!(out, "<td>{}</td>", escape(&cell.to_string()));
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}
