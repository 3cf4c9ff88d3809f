pub mod background;
pub mod greeting;
pub mod links;
pub mod todos;
