//! The `!order <order number>` lookup command.

pub mod run;
pub mod ui;
