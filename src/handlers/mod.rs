pub mod categories;
pub mod questions;
pub mod quiz;
