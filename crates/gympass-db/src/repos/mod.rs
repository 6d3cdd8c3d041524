//! libSQL implementations of the repository ports.
//!
//! Each module implements one port for `GymDb`.

pub mod check_in;
pub mod gym;
