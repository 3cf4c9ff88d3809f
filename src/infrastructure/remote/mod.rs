pub mod todo_client_reqwest;
