//! Data Transfer Objects
//!
//! Request and response structures for the API. Wire fields are camelCase
//! to match the mobile client.

pub mod ads;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod game;
pub mod players;

pub use ads::*;
pub use auth::*;
pub use catalog::*;
pub use common::*;
pub use game::*;
pub use players::*;
