//! NDJSON record decoding
//!
//! # Error Handling Strategy
//!
//! Decoding follows a **skip and warn** approach:
//!
//! - **Syntax failures**: A malformed line becomes a [`DecodeError`] carrying the
//!   source name, line number and raw content. It is never fatal; the stream reader
//!   logs it and moves on to the next line.
//!
//! - **Shape mismatches**: Fields with an unexpected JSON type decode as absent.
//!   Whether a record is usable for indexing is decided by the index builder,
//!   not here.

pub mod deserializers;
pub mod record;

pub use record::{DecodeError, decode_line};
