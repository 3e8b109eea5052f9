//! Coders of Catan - in-process session host
//!
//! This crate contains:
//! - [`config`]: Environment configuration and host errors
//! - [`actor`]: A tokio task owning one session, fed through [`SessionHandle`]
//! - [`repl`]: A JSON line protocol over any async reader/writer pair

pub mod actor;
pub mod config;
pub mod repl;

pub use actor::{SessionHandle, Spots};
pub use config::{HostConfig, HostError};
