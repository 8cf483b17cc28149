#![allow(non_snake_case)]
mod utils;
mod constants;
mod compress;
mod schedule;
mod error;
pub mod encoding;

use std::fmt;

use subtle::{Choice, ConstantTimeEq};
use tracing::{debug, trace};

use crate::compress::compress;
use crate::utils::{pad, parse};

pub use crate::constants::{BLOCKSIZE, DIGEST_SIZE, INITIAL_HASH, PRIME_CUBES};
pub use crate::error::Sha256Error;
pub use crate::schedule::MessageSchedule;
pub use crate::utils::message_bit_length;


/// A finished SHA-256 hash value: the last chaining value as 32 big-endian bytes.
///
/// Equality goes through [`ConstantTimeEq`], so comparing a computed digest
/// against an untrusted one does not leak where the first differing byte is.
#[derive(Clone, Copy, Debug)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    fn from_hash_value(hash_value: &[u32; 8]) -> Self {
        // Construct the final hash by concatenating the bytes of hash_value
        let mut bytes = [0_u8; DIGEST_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(hash_value) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// The digest as the eight 32-bit words of the final chaining value.
    pub fn words(&self) -> [u32; 8] {
        let mut words = [0_u32; 8];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    pub fn to_hex(&self) -> String {
        encoding::encode_hex(&self.0)
    }

    /// Constant-time comparison against raw digest bytes. A slice of the wrong length never matches.
    pub fn matches(&self, expected: &[u8]) -> bool {
        self.0[..].ct_eq(expected).into()
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}


/// Computes the SHA-256 digest of `data` in one shot.
///
/// Fails only with [`Sha256Error::InputTooLarge`], when the bit length of
/// `data` does not fit the 64-bit length field.
pub fn digest(data: &[u8]) -> Result<Digest, Sha256Error> {
    // Preprocess
    let padded_message = pad(data)?;
    let message_blocks = parse(&padded_message);
    let mut hash_value: [u32; 8] = INITIAL_HASH;

    debug!(len = data.len(), blocks = message_blocks.len(), "hashing message");

    // Process each message block, each one seeded with the hash value left by the one before
    for (i, block) in message_blocks.iter().enumerate() {
        let message_schedule = MessageSchedule::from_block(block);
        compress(&mut hash_value, &message_schedule);

        trace!(block = i, hash_value = ?hash_value, "compressed block");
    }

    Ok(Digest::from_hash_value(&hash_value))
}

/// Hashes `data` and checks the result against `expected` in constant time.
///
/// An `expected` value of the wrong length never matches.
pub fn verify(data: &[u8], expected: &[u8]) -> Result<bool, Sha256Error> {
    let computed = digest(data)?;

    // Perform a constant-time comparison to mitigate timing attacks
    Ok(computed.matches(expected))
}
