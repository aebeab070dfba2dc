pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;

pub use manager::{Backend, Database, DatabaseError};
pub use repository::Repository;
