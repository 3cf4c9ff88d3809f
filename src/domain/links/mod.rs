pub mod color;
pub mod favicon;
pub mod quick_link;
