//! Canned JSON bodies of external APIs.

pub mod roblox;
