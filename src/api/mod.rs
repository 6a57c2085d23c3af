//! HTTP API for the task service.
//!
//! ## Endpoints
//!
//! - `GET /tasks` - List tasks (paginated, sorted)
//! - `POST /tasks` - Create a task
//! - `GET /tasks/{id}` - Get a task by id
//! - `PUT /tasks/{id}` - Replace a task's mutable fields
//! - `DELETE /tasks/{id}` - Delete a task
//! - `GET /health` - Health check

pub mod facade;
mod routes;
mod tasks;
pub mod types;

pub use routes::serve;
pub use types::*;
