//! Frame value type

use std::fmt;

use bytes::Bytes;

use crate::{CHECKSUM_SIZE, DATA_OFFSET, Error, HEADER_SIZE, Header, LENGTH_OFFSET, Result, codec};

/// A single wire frame
///
/// Owns its bytes and is never mutated once built; any change means building
/// a new frame. Accessors return owned handles into the buffer, never views
/// into caller memory, so a frame stays intact regardless of what the caller
/// does with the source buffer afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    /// Create a new frame from a header and data
    ///
    /// Writes the header, the length byte, `'+'`, the data, `'#'`, and then
    /// the checksum over everything before it. Header content is the
    /// caller's responsibility; [`Frame::is_valid`] is the gate that checks
    /// the result against the full format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataTooLarge`] when `data` is longer than 255 bytes.
    pub fn create(header: [u8; HEADER_SIZE], data: &[u8]) -> Result<Self> {
        let bytes = codec::encode(header, data)?;
        Ok(Self {
            bytes: Bytes::from(bytes),
        })
    }

    /// Wrap received bytes in a frame without any checks
    ///
    /// The buffer is copied, so later mutation of `buf` cannot touch the
    /// frame. Nothing is validated here; call [`Frame::is_valid`] before
    /// trusting any accessor on input from the wire.
    #[must_use]
    pub fn recreate(buf: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(buf),
        }
    }

    /// Assemble a frame from raw parts, trusting the caller
    ///
    /// The given length and checksum bytes are written verbatim with no
    /// recomputation, which permits frames whose length byte or checksum lie
    /// about the data. Meant for diagnostics; [`Frame::create`] is the
    /// constructor for real traffic.
    #[must_use]
    pub fn assemble(header: [u8; HEADER_SIZE], length: u8, data: &[u8], checksum: u8) -> Self {
        Self {
            bytes: Bytes::from(codec::encode_raw(header, length, data, checksum)),
        }
    }

    /// Frame header
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] when the frame holds fewer than 2
    /// bytes.
    pub fn header(&self) -> Result<Header> {
        if self.bytes.len() < HEADER_SIZE {
            return Err(Error::BufferTooSmall {
                needed: HEADER_SIZE,
                got: self.bytes.len(),
            });
        }
        Ok(Header::new([self.bytes[0], self.bytes[1]]))
    }

    /// Declared data length, read from the length byte
    ///
    /// On an unvalidated frame this is whatever the wire claimed, not
    /// necessarily the true remaining length.
    pub fn data_len(&self) -> Result<usize> {
        if self.bytes.len() <= LENGTH_OFFSET {
            return Err(Error::BufferTooSmall {
                needed: LENGTH_OFFSET + 1,
                got: self.bytes.len(),
            });
        }
        Ok(self.bytes[LENGTH_OFFSET] as usize)
    }

    /// Frame data
    ///
    /// Returns the `data_len` bytes following the opening delimiter as an
    /// owned handle. When the declared length exceeds the buffer, which a
    /// prior [`Frame::is_valid`] would have caught, this reports
    /// [`Error::BufferTooSmall`] instead of trapping.
    pub fn data(&self) -> Result<Bytes> {
        let len = self.data_len()?;
        let end = DATA_OFFSET + len;
        if end > self.bytes.len() {
            return Err(Error::BufferTooSmall {
                needed: end,
                got: self.bytes.len(),
            });
        }
        Ok(self.bytes.slice(DATA_OFFSET..end))
    }

    /// Stored checksum, the final frame byte
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] on an empty frame.
    pub fn checksum(&self) -> Result<u8> {
        match self.bytes.last() {
            Some(&byte) => Ok(byte),
            None => Err(Error::BufferTooSmall {
                needed: CHECKSUM_SIZE,
                got: 0,
            }),
        }
    }

    /// Checksum recomputed from the frame bytes
    ///
    /// XOR over every byte except the final one. [`Frame::is_valid`] compares
    /// this against [`Frame::checksum`] along with the structural checks.
    #[must_use]
    pub fn compute_checksum(&self) -> u8 {
        codec::xor_checksum(&self.bytes)
    }

    /// Check the full frame structure and checksum
    ///
    /// Equivalent to [`validate`](crate::validate) over the frame's bytes:
    /// never panics, `false` for any malformed input.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        codec::validate(&self.bytes)
    }

    /// Raw frame bytes, ready for transmission
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total frame length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the frame holds no bytes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the frame, returning its bytes
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Frame {
    /// Renders `HH+<data hex>#<checksum hex>` for well-formed frames and the
    /// raw bytes as hex otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.header(), self.data(), self.checksum()) {
            (Ok(header), Ok(data), Ok(checksum)) => {
                write!(f, "{header}+")?;
                for byte in data.iter() {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, "#{checksum:02x}")
            }
            _ => {
                for byte in self.bytes.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
