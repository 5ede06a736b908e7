//! Domain modules containing the server's business logic.

pub mod tools;
