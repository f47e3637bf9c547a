//! Fixed sentences and every single-byte value.

use alloc::vec::Vec;

use crate::{ScanResult, is_ascii, validate};

const ASCII_STRING: &[u8] = b"In het Nederlands komen bijzondere leestekens niet vaak voor.";
const NON_ASCII_STRING: &[u8] = b"In sp\xe4terer Zeit trat Umlaut sehr h\xe4ufig analogisch ein.";

#[test]
fn sentences() {
    assert!(is_ascii(ASCII_STRING));
    assert_eq!(validate(ASCII_STRING), ScanResult::Valid);
    assert!(!is_ascii(NON_ASCII_STRING));
    assert_eq!(validate(NON_ASCII_STRING), ScanResult::Invalid(5));
}

/// A 0xFF just past the checked length must never be read, and must be found
/// once the length includes it.
#[test]
fn never_reads_past_length() {
    for i in 0..ASCII_STRING.len() {
        let mut buffer: Vec<u8> = ASCII_STRING[..i].to_vec();
        buffer.push(0xFF);
        assert!(is_ascii(&buffer[..i]), "read an extra byte at length {i}");
        assert_eq!(validate(&buffer[..i]), ScanResult::Valid);
        assert!(!is_ascii(&buffer[..=i]), "missed last byte at length {i}");
        assert_eq!(validate(&buffer[..=i]), ScanResult::Invalid(i));
    }
}

#[test]
fn single_byte_values() {
    for c in 0u8..=255 {
        assert_eq!(is_ascii(&[c]), c < 128, "byte value {c}");
    }
}
