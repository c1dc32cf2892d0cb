//! Core library components.
//!
//! The resolver and the types it reads and returns. Nothing in here touches
//! process state other than the single keystore existence probe.

pub mod constants;
pub mod domain;
pub mod resolver;
