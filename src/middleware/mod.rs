pub mod session;

pub use session::{CurrentPage, PAGE_COOKIE};
