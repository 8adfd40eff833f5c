pub mod book;
pub mod category;
pub mod error;
pub mod selector;
pub mod template;
mod templates;

pub use book::ComplimentBook;
pub use category::{Category, Mode};
pub use error::{SelectError, TemplateError};
pub use selector::{Compliment, ComplimentSelector};
