pub mod create_todo;
pub mod list_today;
pub mod set_done;
