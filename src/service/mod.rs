pub mod pagination;
pub mod quiz;

pub use pagination::{QUESTIONS_PER_PAGE, paginate};
