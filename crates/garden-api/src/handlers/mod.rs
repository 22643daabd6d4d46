//! Request handlers

pub mod ads;
pub mod auth;
pub mod game;
pub mod health;
pub mod locations;
pub mod players;
pub mod seeds;
