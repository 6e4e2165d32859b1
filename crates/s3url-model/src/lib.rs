//! Core data types for S3 object URLs.
//!
//! This crate defines the structured side of the s3url workspace: the
//! [`S3Object`] record, the closed set of [`S3UrlFormat`] tags, the
//! [`S3UrlProtocol`] and [`S3UrlStyle`] those tags are built from, and the
//! [`S3UrlError`] type every operation reports failures with. It carries no
//! pattern matching of its own; see `s3url-core` for that.

pub mod error;
pub mod types;

pub use error::{S3UrlError, S3UrlResult};
pub use types::{S3Object, S3UrlFormat, S3UrlProtocol, S3UrlStyle};
