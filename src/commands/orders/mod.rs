//! The `!orders` summary command: open/closed counts, balance, and either a
//! per-order listing or a filler fact.

pub mod run;
pub mod ui;
