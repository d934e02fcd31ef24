// Composition root for the users API.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory user store and wire it into the use case handlers.
// - Expose the HTTP router to the binary in main.rs.

pub mod config;
pub mod http;
pub mod state;
