//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The `<data>` element Base64 codec.
//!
//! The encoder produces standard RFC 4648 output. The decoder is a lenient
//! byte-stream scanner, not a validator: bytes outside the 65-symbol
//! alphabet (including whitespace) are skipped, symbols are consumed in
//! groups of four, and an unfinished trailing group is dropped. A pad
//! symbol contributes the bit value zero; only a pad in the fourth (and
//! optionally third) position of a group shortens that group's output, so
//! decoding continues past padded groups.
//!
//! # References
//!
//! 1. https://www.rfc-editor.org/rfc/rfc4648#section-4

/// The RFC 4648 Base64 alphabet, indexed by 6-bit value.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Reverse-lookup entry for the pad symbol `=`.
const PAD: u8 = 64;

/// Reverse-lookup entry for every byte outside the alphabet.
const SKIP: u8 = 255;

const fn reverse_table() -> [u8; 256] {
    let mut table = [SKIP; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[b'=' as usize] = PAD;
    table
}

/// Mapping from input byte to 6-bit value, `PAD` or `SKIP`.
static REVERSE: [u8; 256] = reverse_table();

/// Encodes a byte sequence as Base64 text.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() + 2) / 3 * 4);
    for group in data.chunks(3) {
        let b0 = group[0];
        let b1 = group.get(1).copied().unwrap_or(0);
        let b2 = group.get(2).copied().unwrap_or(0);
        out.push(ALPHABET[(b0 >> 2) as usize] as char);
        out.push(ALPHABET[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        match group.len() {
            1 => out.push_str("=="),
            2 => {
                out.push(ALPHABET[((b1 & 0b1111) << 2) as usize] as char);
                out.push('=');
            }
            _ => {
                out.push(ALPHABET[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
                out.push(ALPHABET[(b2 & 0b11_1111) as usize] as char);
            }
        }
    }
    out
}

/// Decodes Base64 text into a byte sequence, leniently.
///
/// Never fails; see the module documentation for the scan rules.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 4 * 3);
    let mut group = [0u8; 4];
    let mut pads = [false; 4];
    let mut filled = 0;
    for &byte in text.as_bytes() {
        let value = REVERSE[byte as usize];
        if value == SKIP {
            continue;
        }
        pads[filled] = value == PAD;
        group[filled] = if value == PAD { 0 } else { value };
        filled += 1;
        if filled < 4 {
            continue;
        }
        filled = 0;
        let bits = (u32::from(group[0]) << 18)
            | (u32::from(group[1]) << 12)
            | (u32::from(group[2]) << 6)
            | u32::from(group[3]);
        out.push((bits >> 16) as u8);
        if pads[3] {
            if !pads[2] {
                out.push((bits >> 8) as u8);
            }
        } else {
            out.push((bits >> 8) as u8);
            out.push(bits as u8);
        }
    }
    out
}

/// Splits ASCII text into pieces of at most `len` bytes, in order.
///
/// Used to wrap encoded `<data>` content into fixed-width lines.
pub fn chunk(text: &str, len: usize) -> Vec<&str> {
    assert!(len > 0, "chunk length must be non-zero");
    let mut pieces = Vec::with_capacity((text.len() + len - 1) / len);
    let mut rest = text;
    while !rest.is_empty() {
        let split = len.min(rest.len());
        pieces.push(&rest[..split]);
        rest = &rest[split..];
    }
    pieces
}
