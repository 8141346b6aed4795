//! Domain models shared between the data, service and bot layers.

pub mod roblox;
pub mod verification;
