//! Frame codec (encode/validate)
//!
//! Free functions over raw byte buffers. [`crate::Frame`] wraps these with
//! an owned-buffer value type.

use tracing::trace;

use crate::{
    DELIM_CLOSE, DELIM_OPEN, DELIM_OPEN_OFFSET, Error, FRAME_OVERHEAD, HEADER_SIZE, Header,
    LENGTH_OFFSET, MAX_DATA_LEN, MIN_FRAME_SIZE, Result,
};

/// Encode a header and data into wire bytes
///
/// # Format
///
/// ```text
/// [HEADER (2)] [LENGTH (1)] ['+'] [DATA (LENGTH bytes)] ['#'] [CHECKSUM (1)]
/// ```
///
/// Header content is not checked here; encoding is a pure builder and the
/// validator is the gate for the header alphabet.
///
/// # Errors
///
/// Returns [`Error::DataTooLarge`] when `data` exceeds 255 bytes.
pub fn encode(header: [u8; HEADER_SIZE], data: &[u8]) -> Result<Vec<u8>> {
    if data.len() > MAX_DATA_LEN {
        return Err(Error::DataTooLarge {
            size: data.len(),
            max: MAX_DATA_LEN,
        });
    }

    let total_size = FRAME_OVERHEAD + data.len();
    let mut bytes = Vec::with_capacity(total_size);

    bytes.extend_from_slice(&header);
    bytes.push(data.len() as u8);
    bytes.push(DELIM_OPEN);
    bytes.extend_from_slice(data);
    bytes.push(DELIM_CLOSE);

    // Checksum over everything written so far
    let checksum = xor_fold(&bytes);
    bytes.push(checksum);

    Ok(bytes)
}

/// Encode a frame from raw parts, writing the caller's length and checksum
/// bytes verbatim.
pub(crate) fn encode_raw(
    header: [u8; HEADER_SIZE],
    length: u8,
    data: &[u8],
    checksum: u8,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FRAME_OVERHEAD + data.len());

    bytes.extend_from_slice(&header);
    bytes.push(length);
    bytes.push(DELIM_OPEN);
    bytes.extend_from_slice(data);
    bytes.push(DELIM_CLOSE);
    bytes.push(checksum);

    bytes
}

/// Checksum of a complete frame
///
/// XOR of every byte except the final one, which holds the checksum itself.
/// The fold covers header, length byte, delimiters, and data alike. XOR is
/// commutative, so reordering bytes does not change the result; the checksum
/// detects corruption, not reordering.
///
/// Buffers shorter than 2 bytes have nothing to fold and yield 0.
#[must_use]
pub fn xor_checksum(frame: &[u8]) -> u8 {
    match frame.split_last() {
        Some((_, rest)) => xor_fold(rest),
        None => 0,
    }
}

fn xor_fold(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |crc, &byte| crc ^ byte)
}

/// Validate the structure and integrity of a raw frame
///
/// Checks, in order: minimum size, header alphabet, length byte against the
/// actual frame size, both delimiters, checksum. Any failed check
/// short-circuits to `false`; no input can make this panic.
#[must_use]
pub fn validate(frame: &[u8]) -> bool {
    if frame.len() < MIN_FRAME_SIZE {
        trace!(len = frame.len(), "frame shorter than minimum");
        return false;
    }

    let header = Header::new([frame[0], frame[1]]);
    if !header.is_well_formed() {
        trace!(%header, "header outside the uppercase/digit alphabet");
        return false;
    }

    let declared = frame[LENGTH_OFFSET] as usize;
    if frame.len() != FRAME_OVERHEAD + declared {
        trace!(
            declared,
            actual = frame.len(),
            "length byte disagrees with frame size"
        );
        return false;
    }

    if frame[DELIM_OPEN_OFFSET] != DELIM_OPEN {
        trace!(found = frame[DELIM_OPEN_OFFSET], "missing opening delimiter");
        return false;
    }

    if frame[frame.len() - 2] != DELIM_CLOSE {
        trace!(found = frame[frame.len() - 2], "missing closing delimiter");
        return false;
    }

    let expected = xor_checksum(frame);
    let found = frame[frame.len() - 1];
    if expected != found {
        trace!(expected, found, "checksum mismatch");
        return false;
    }

    true
}
