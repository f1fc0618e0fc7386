//! Server-side HTML for the navigation shell.

pub mod html;
pub mod pages;

pub use pages::{FormState, Outcome, render_page};
