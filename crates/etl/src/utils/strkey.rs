//! StrKey address encoding.
//!
//! Accounts, signers and muxed accounts are rendered as base32 text made of a
//! version byte, the payload, and a CRC16-XModem checksum (little-endian).
//! Only encoding is needed here: the decoder hands us raw key bytes.

use thiserror::Error;

const ED25519_KEY_LEN: usize = 32;
const HASH_LEN: usize = 32;
const MAX_SIGNED_PAYLOAD_LEN: usize = 64;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrKeyError {
    #[error("Invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Signed payload of {0} bytes exceeds the 64 byte limit")]
    PayloadTooLong(usize),
}

/// Leading byte of an encoded key; selects the first base32 character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VersionByte {
    /// 'G'
    AccountId = 6 << 3,
    /// 'M'
    MuxedAccount = 12 << 3,
    /// 'P'
    SignedPayload = 15 << 3,
    /// 'T'
    PreAuthTx = 19 << 3,
    /// 'X'
    HashX = 23 << 3,
}

/// Encode `payload` under `version`.
pub fn encode(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 3);
    data.push(version as u8);
    data.extend_from_slice(payload);
    let checksum = crc16_xmodem(&data);
    data.extend_from_slice(&checksum.to_le_bytes());
    base32_encode(&data)
}

/// G-address of an ed25519 public key
pub fn encode_account_id(key: &[u8]) -> Result<String, StrKeyError> {
    check_len("ed25519 public key", key, ED25519_KEY_LEN)?;
    Ok(encode(VersionByte::AccountId, key))
}

/// M-address of a multiplexed account (key followed by the big-endian id)
pub fn encode_muxed_account(key: &[u8], id: u64) -> Result<String, StrKeyError> {
    check_len("ed25519 public key", key, ED25519_KEY_LEN)?;
    let mut payload = Vec::with_capacity(ED25519_KEY_LEN + 8);
    payload.extend_from_slice(key);
    payload.extend_from_slice(&id.to_be_bytes());
    Ok(encode(VersionByte::MuxedAccount, &payload))
}

pub fn encode_pre_auth_tx(hash: &[u8]) -> Result<String, StrKeyError> {
    check_len("pre-auth transaction hash", hash, HASH_LEN)?;
    Ok(encode(VersionByte::PreAuthTx, hash))
}

pub fn encode_hash_x(hash: &[u8]) -> Result<String, StrKeyError> {
    check_len("hash-x", hash, HASH_LEN)?;
    Ok(encode(VersionByte::HashX, hash))
}

/// P-address: key, payload length (u32 BE), payload zero-padded to 4 bytes
pub fn encode_signed_payload(key: &[u8], payload: &[u8]) -> Result<String, StrKeyError> {
    check_len("ed25519 public key", key, ED25519_KEY_LEN)?;
    if payload.len() > MAX_SIGNED_PAYLOAD_LEN {
        return Err(StrKeyError::PayloadTooLong(payload.len()));
    }

    let padding = (4 - payload.len() % 4) % 4;
    let mut data = Vec::with_capacity(ED25519_KEY_LEN + 4 + payload.len() + padding);
    data.extend_from_slice(key);
    data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    data.extend_from_slice(payload);
    data.resize(data.len() + padding, 0);
    Ok(encode(VersionByte::SignedPayload, &data))
}

fn check_len(kind: &'static str, bytes: &[u8], expected: usize) -> Result<(), StrKeyError> {
    if bytes.len() != expected {
        return Err(StrKeyError::InvalidLength {
            kind,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// RFC 4648 base32 without trailing padding
fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}
