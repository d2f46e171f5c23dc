//! A 16-byte Universally Unique IDentifier value type
//!
//! ```rust
//! use uuid128::{Uuid, Variant, Version};
//!
//! let mut x = Uuid::nil();
//! assert!(x.is_nil());
//! assert_eq!(x.size(), 16);
//!
//! x[6] = 0x4f;
//! x[8] = 0x9f;
//! assert_eq!(x.variant(), Variant::Rfc4122);
//! assert_eq!(x.version(), Version::RandomNumberBased);
//! assert!(Uuid::nil() < x && x < Uuid::MAX);
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A [`Uuid`] holds 16 octets in network byte order. This crate only interprets the two fields
//! that identify the layout of the rest:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq                |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 4-bit `ver` field is the high nibble of octet 6. See [`Version`].
//! - The `var` field occupies the most significant one to three bits of octet 8. See
//!   [`Variant`].
//!
//! Ordering is lexicographic over the 16 octets, so the first differing octet decides the result.
//!
//! # Crate features
//!
//! - `std` (default): implements `std::error::Error` for [`LengthError`] and enables
//!   [`Uuid::hash_code()`]. The crate is `no_std` without it.
//! - `serde`: serializes a [`Uuid`] as a 16-byte byte string.
//! - `uuid`: converts to and from `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{swap, LengthError, Uuid};

mod fields;
pub use fields::{Variant, Version};
