// Composition root for the accounts bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
