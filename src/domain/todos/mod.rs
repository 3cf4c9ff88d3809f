pub mod kst;
pub mod todo;
