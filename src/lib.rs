//! BOS Golden-Card Relay Library
//!
//! This library provides the core functionality for the BOS golden-card
//! relay: signed requests against the external BOS fortune-calculation API,
//! normalization of its palace responses onto the eight trigrams, and the
//! sequential batch processing behind the HTTP endpoint.
//!
//! # Modules
//!
//! - `batch`: Sequential batch processing.
//! - `bos_client`: Signed BOS API client.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `extractor`: Golden-card extraction from BOS responses.
//! - `handlers`: HTTP request handlers.
//! - `models`: Wire and domain models.
//! - `signature`: BOS request signing.

pub mod batch;
pub mod bos_client;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod signature;
