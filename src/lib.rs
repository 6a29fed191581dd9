#![warn(missing_docs)]
//! A Rust implementation of the SSHA salted message-digest construction.
//!
//! SSHA computes `H(message || salt)` and appends the salt in the clear to
//! the hash output, so a combined digest is self-describing: validation
//! recovers the salt from the trailing bytes of the value itself and never
//! needs an out-of-band channel. The base hash is SHA-1 in the [`ssha1`]
//! instantiation; the salting and validation core in [`ssha`] is generic
//! over any fixed-output hash through the [`base::BaseHash`] trait.
//!
//! The `{SSHA}`-prefixed base64 form produced by the `Display` impl is the
//! convention used for directory-service password attributes.
//!
//! # Example
//! ```
//! use ssha::ssha1;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = ssha1::new_with_salt(b"n4pggXWL".to_vec())?;
//!   let bytes_written = h.write("supercalifragilisticexpialidocious".as_bytes())?;
//!   println!("Bytes written: {}", bytes_written);
//!   println!("Result: {}", h.hex_string());
//!
//!   Ok(())
//! }
//! ```
/// `base` is the unsalted base hash primitive the construction wraps.
pub mod base;
/// `error` lists the failure modes of construction and validation.
pub mod error;
/// `ssha` is the salted digest, generic over a base hash.
pub mod ssha;
/// `ssha1` is the SSHA variant built on SHA-1, with a 20-byte base digest.
pub mod ssha1;
