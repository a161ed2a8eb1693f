//! Domain entities - the core business objects.

mod category;
mod comment;
mod faq;
mod post;
mod profile;
mod session;
mod user_query;

pub use category::Category;
pub use comment::Comment;
pub use faq::{Faq, FaqDraft};
pub use post::{Post, PostDraft};
pub use profile::{Profile, Role};
pub use session::Session;
pub use user_query::{MIN_QUESTION_CHARS, UserQuery};
