// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod facts;
pub mod handler;
pub mod model;
pub mod shopify;

// Convenient re-export for the state every command pulls from the context.
pub use model::AppState;
