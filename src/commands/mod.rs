// This file declares the existence of our command modules.

pub mod order;
pub mod orders;
