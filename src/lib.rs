//! Web-Hack - Crawl-and-Probe Web Vulnerability Scanner
//!
//! Crawls a target site within its origin, enumerates injectable surfaces
//! (query parameters and form fields), and probes each surface with ordered
//! payload lists to detect SQL injection and reflected XSS. A separate
//! discovery module brute-forces common paths and classifies exposed ones
//! by sensitivity.

pub mod config;
pub mod crawler;
pub mod error;
pub mod http;
pub mod models;
pub mod payloads;
pub mod scanner;
