//! Byte-level diagnostics for trace output
//!
//! Helpers for rendering wire bytes in human-readable form. Nothing here
//! affects codec behavior; the module is only compiled with the
//! `debug-tools` feature.

/// Render the common representations of a single byte
///
/// Shows the binary, decimal, hexadecimal, and character values, e.g.
/// `byte(bin: 01000001, dec:  65, hex: 41, char: 'A')`.
#[must_use]
pub fn describe_byte(byte: u8) -> String {
    format!(
        "byte(bin: {byte:08b}, dec: {byte:3}, hex: {byte:02x}, char: {:?})",
        byte as char
    )
}
