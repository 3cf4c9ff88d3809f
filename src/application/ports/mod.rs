pub mod clock;
pub mod key_value_store;
pub mod todo_api;
pub mod todo_gateway;
