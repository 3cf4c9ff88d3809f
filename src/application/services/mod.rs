pub mod settings;
pub mod todo_board;
