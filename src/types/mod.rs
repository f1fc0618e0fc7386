pub mod page;

pub use page::{NavEvent, Page};
