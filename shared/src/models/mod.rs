//! Wire models shared between backend and client

pub mod weather;

pub use weather::*;
