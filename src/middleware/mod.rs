pub mod extract;

pub use extract::{IdPath, JsonBody, PageQuery};
