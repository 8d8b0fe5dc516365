//! Pose file format decoding
//!
//! A pose file is a header followed by a body. The header's component list is
//! the schema for the body, so decoding is strictly two-pass:
//!
//! 1. [`header::decode_header`] reads global metadata and component descriptors
//!    and records where the header ends
//! 2. [`body::decode_body`] seeks to that offset and decodes frames using the
//!    record shape the header describes

pub mod body;
pub mod header;

pub use body::{PersonShape, decode_body};
pub use header::decode_header;
