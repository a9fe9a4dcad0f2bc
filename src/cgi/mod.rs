//! CGI execution
//!
//! This module implements the script-execution side of the pipeline:
//! spawning the target program with piped standard streams, injecting
//! request metadata into the child's environment, and relaying bytes
//! between the client connection and the child.

pub mod executor;

pub use executor::execute;
