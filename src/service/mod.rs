//! Business logic between the bot's event handlers and the data layer.

pub mod discord;
pub mod ticket;
pub mod verification;
