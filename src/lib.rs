//! serframe - compact binary framing for point-to-point serial links
//!
//! This library implements a fixed-layout frame format for USART-style
//! links: a 2-byte header, a length byte, a `'+'` delimiter, up to 255
//! data bytes, a `'#'` delimiter, and a trailing XOR checksum byte.
//!
//! # Quick Start
//!
//! ```rust
//! use serframe::Frame;
//!
//! // Build a frame ready for transmission
//! let frame = Frame::create(*b"LD", b"test")?;
//! assert!(frame.is_valid());
//!
//! // Wrap received bytes, then validate before trusting any field
//! let received = Frame::recreate(frame.as_bytes());
//! assert!(received.is_valid());
//! assert_eq!(received.data()?.as_ref(), b"test");
//! # Ok::<(), serframe::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! [HEADER (2)] [LENGTH (1)] ['+'] [DATA (LENGTH bytes)] ['#'] [CHECKSUM (1)]
//! ```
//!
//! # Features
//!
//! - **One-shot construction** - A frame is fully formed, checksum included,
//!   or it is not built at all
//! - **Non-panicking accessors** - Every field accessor reports malformed
//!   input as an error instead of trapping
//! - **Single validation gate** - [`Frame::is_valid`] classifies untrusted
//!   input without ever crashing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod codec;
#[cfg(feature = "debug-tools")]
pub mod debug;
mod error;
mod frame;
mod header;

pub use codec::{encode, validate, xor_checksum};
pub use error::{Error, Result};
pub use frame::Frame;
pub use header::Header;

/// Header size in bytes
pub const HEADER_SIZE: usize = 2;

/// Length field size in bytes
pub const LENGTH_SIZE: usize = 1;

/// Checksum size in bytes
pub const CHECKSUM_SIZE: usize = 1;

/// Opening delimiter, written between the length byte and the data
pub const DELIM_OPEN: u8 = b'+';

/// Closing delimiter, written between the data and the checksum
pub const DELIM_CLOSE: u8 = b'#';

/// Offset of the length byte
pub const LENGTH_OFFSET: usize = HEADER_SIZE;

/// Offset of the opening delimiter
pub const DELIM_OPEN_OFFSET: usize = HEADER_SIZE + LENGTH_SIZE;

/// Offset of the first data byte
pub const DATA_OFFSET: usize = DELIM_OPEN_OFFSET + 1;

/// Fixed overhead around the data: header, length byte, both delimiters,
/// checksum
pub const FRAME_OVERHEAD: usize = HEADER_SIZE + LENGTH_SIZE + 2 + CHECKSUM_SIZE;

/// Minimum size of a structurally valid frame (empty data)
pub const MIN_FRAME_SIZE: usize = FRAME_OVERHEAD;

/// Maximum data length representable by the one-byte length field
pub const MAX_DATA_LEN: usize = u8::MAX as usize;
