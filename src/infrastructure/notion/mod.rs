pub mod schema;
pub mod todo_gateway_notion;
