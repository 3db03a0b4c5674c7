use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use sha3::{Digest, Keccak256};

pub const ADDRESS_BYTES: usize = 20;

static ADDRESS_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern compiles"));

/// EIP-55 mixed-case rendering of a 20 byte account identifier.
pub fn to_checksum_address(bytes: &[u8; ADDRESS_BYTES]) -> String {
    let lower = hex::encode(bytes);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn random_checksum_address<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; ADDRESS_BYTES];
    rng.fill(&mut bytes[..]);
    to_checksum_address(&bytes)
}

pub fn create_eth_address() -> String {
    random_checksum_address(&mut rand::thread_rng())
}

/// True when `candidate` is `0x` plus 40 hex digits cased per its checksum.
pub fn is_checksum_address(candidate: &str) -> bool {
    if !ADDRESS_SHAPE.is_match(candidate) {
        return false;
    }
    let mut bytes = [0u8; ADDRESS_BYTES];
    if hex::decode_to_slice(&candidate[2..], &mut bytes).is_err() {
        return false;
    }
    to_checksum_address(&bytes) == candidate
}
