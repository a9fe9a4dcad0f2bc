//! HTTP/1.0 protocol implementation.
//!
//! This module implements the per-connection request pipeline. Connections
//! are one-shot: one request in, one response out, then the stream is closed.
//!
//! # Architecture
//!
//! - **`line`**: line-oriented reading from the raw byte stream, normalizing
//!   `\n`, `\r`, and `\r\n` terminators
//! - **`request`**: request-line parsing and header intake
//! - **`response`**: the fixed response templates the server emits itself
//! - **`static_files`**: serves regular files under the document root
//! - **`connection`**: the pipeline orchestrator owning the stream
//!
//! # Pipeline
//!
//! ```text
//!   ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//!   │ Line Reader │ ──► │ Req. Parser  │ ──► │ Path Resolver │
//!   └─────────────┘     └──────────────┘     └───────┬───────┘
//!                                                    │
//!                           ┌────────────────────────┴─────┐
//!                           ▼                              ▼
//!                 ┌──────────────────┐          ┌──────────────────┐
//!                 │ Static Responder │          │ Script Executor  │
//!                 └─────────┬────────┘          └────────┬─────────┘
//!                           └──────────────┬─────────────┘
//!                                          ▼
//!                                  connection close
//! ```

pub mod connection;
pub mod line;
pub mod request;
pub mod response;
pub mod static_files;
