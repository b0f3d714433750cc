//! Wire-format conformance vectors
//!
//! Known-good frames checked byte for byte, so any drift in the layout or
//! the checksum algebra fails loudly here.

use serframe::{Frame, validate, xor_checksum};

struct Vector {
    header: [u8; 2],
    data: &'static [u8],
    checksum: u8,
    wire: &'static [u8],
}

const VECTORS: &[Vector] = &[
    Vector {
        header: *b"LD",
        data: b"",
        checksum: 0x00,
        wire: &[0x4C, 0x44, 0x00, 0x2B, 0x23, 0x00],
    },
    Vector {
        header: *b"LD",
        data: b"A",
        checksum: 0x40,
        wire: &[0x4C, 0x44, 0x01, 0x2B, 0x41, 0x23, 0x40],
    },
    Vector {
        header: *b"LD",
        data: b"test",
        checksum: 0x12,
        wire: &[
            0x4C, 0x44, 0x04, 0x2B, b't', b'e', b's', b't', 0x23, 0x12,
        ],
    },
    Vector {
        header: *b"MT",
        data: b"dondu",
        checksum: 0x60,
        wire: &[
            0x4D, 0x54, 0x05, 0x2B, b'd', b'o', b'n', b'd', b'u', 0x23, 0x60,
        ],
    },
];

#[test]
fn create_matches_vectors() {
    for (i, vector) in VECTORS.iter().enumerate() {
        let frame = Frame::create(vector.header, vector.data)
            .unwrap_or_else(|err| panic!("vector {i}: create failed: {err}"));

        assert_eq!(frame.as_bytes(), vector.wire, "vector {i}: wire bytes");
        assert_eq!(
            frame.header().unwrap().as_bytes(),
            vector.header,
            "vector {i}: header"
        );
        assert_eq!(
            frame.data().unwrap().as_ref(),
            vector.data,
            "vector {i}: data"
        );
        assert_eq!(
            frame.data_len().unwrap(),
            vector.data.len(),
            "vector {i}: length byte"
        );
        assert_eq!(
            frame.checksum().unwrap(),
            vector.checksum,
            "vector {i}: checksum"
        );
        assert!(frame.is_valid(), "vector {i}: must validate");
    }
}

#[test]
fn recreate_accepts_received_vectors() {
    for (i, vector) in VECTORS.iter().enumerate() {
        let frame = Frame::recreate(vector.wire);

        assert!(frame.is_valid(), "vector {i}: must validate");
        assert_eq!(
            frame.data().unwrap().as_ref(),
            vector.data,
            "vector {i}: data"
        );
    }
}

#[test]
fn free_functions_agree_with_vectors() {
    for (i, vector) in VECTORS.iter().enumerate() {
        assert!(validate(vector.wire), "vector {i}: must validate");
        assert_eq!(
            xor_checksum(vector.wire),
            vector.checksum,
            "vector {i}: checksum"
        );
    }
}

#[test]
fn any_corrupted_byte_invalidates_vectors() {
    for (i, vector) in VECTORS.iter().enumerate() {
        for offset in 0..vector.wire.len() {
            let mut corrupted = vector.wire.to_vec();
            corrupted[offset] ^= 0x5A;
            assert!(
                !validate(&corrupted),
                "vector {i}: corruption at offset {offset} not detected"
            );
        }
    }
}

#[test]
fn assemble_reproduces_vectors_from_parts() {
    for (i, vector) in VECTORS.iter().enumerate() {
        let frame = Frame::assemble(
            vector.header,
            vector.data.len() as u8,
            vector.data,
            vector.checksum,
        );
        assert_eq!(frame.as_bytes(), vector.wire, "vector {i}: wire bytes");
        assert!(frame.is_valid(), "vector {i}: must validate");
    }
}

#[test]
fn assemble_with_wrong_checksum_fails_validation() {
    for vector in VECTORS {
        let frame = Frame::assemble(
            vector.header,
            vector.data.len() as u8,
            vector.data,
            vector.checksum ^ 0x01,
        );
        assert!(!frame.is_valid());
    }
}
