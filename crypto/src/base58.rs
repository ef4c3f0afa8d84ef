//! Base58-check encoding for on-chain identifiers.
//!
//! Format: base58(payload ‖ checksum) where checksum is the first 4 bytes
//! of SHA-256(SHA-256(payload)). Bitcoin alphabet (no 0/O/I/l).

use sha2::{Digest, Sha256};

/// Base58 alphabet (58 chars, avoids visually ambiguous 0/O, I/l).
const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table: ASCII byte → base58 digit (0xFF = invalid).
const BASE58_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE58_ALPHABET;
    let mut i = 0;
    while i < 58 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Length of the double-SHA-256 checksum appended to the payload.
const CHECKSUM_LEN: usize = 4;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Encode a byte slice as base58 (no checksum).
fn encode_base58(bytes: &[u8]) -> String {
    // Big-integer division by repeated modulo, digit by digit.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    for &byte in bytes {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    // Leading zero bytes encode as leading '1' digits.
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();

    let mut result = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        result.push(BASE58_ALPHABET[0] as char);
    }
    for &digit in digits.iter().rev() {
        result.push(BASE58_ALPHABET[digit as usize] as char);
    }
    result
}

/// Decode a base58 string into bytes. Returns `None` on invalid characters.
fn decode_base58(s: &str) -> Option<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE58_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        let mut carry = val as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }
    let leading_ones = s.bytes().take_while(|&b| b == BASE58_ALPHABET[0]).count();
    for _ in 0..leading_ones {
        bytes.push(0);
    }
    bytes.reverse();
    Some(bytes)
}

/// Encode a payload as base58-check: base58 over payload ‖ 4-byte checksum.
pub fn encode_base58check(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    encode_base58(&buf)
}

/// Decode a base58-check string back into its payload.
///
/// Returns `None` on invalid characters, short input, or checksum mismatch.
pub fn decode_base58check(s: &str) -> Option<Vec<u8>> {
    let decoded = decode_base58(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return None;
    }
    let (payload, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if check != checksum(payload) {
        return None;
    }
    Some(payload.to_vec())
}
