//! httpd - Minimal HTTP/1.0 Static + CGI Server
//!
//! Core library for the per-connection request pipeline: line-oriented
//! request reading, request-line parsing, path resolution under a document
//! root, static file serving, and CGI execution over piped child processes.

pub mod cgi;
pub mod config;
pub mod http;
pub mod resolver;
pub mod server;
