use crate::constants::BLOCKSIZE;
use crate::error::Sha256Error;

// Number of bytes used to encode the message length at the end of the padding
const LENGTH_FIELD: usize = 8;

// Computes the bit length of a message holding len bytes, refusing anything that does not fit in 64 bits
pub fn message_bit_length(len: usize) -> Result<u64, Sha256Error> {
    u64::try_from(len)
        .ok()
        .and_then(|num_bytes| num_bytes.checked_mul(8))
        .ok_or(Sha256Error::InputTooLarge { len })
}

// This function takes the bytes of the message and pads it such that it contains a multiple of 512 many bits
pub fn pad(data: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    // The length of the message in bits, as it will be written into the last 8 bytes
    let num_bits = message_bit_length(data.len())?;

    // Smallest multiple of BLOCKSIZE that fits the message, the 0x80 marker and the length field
    let padded_len = data
        .len()
        .checked_add(1 + LENGTH_FIELD + BLOCKSIZE - 1)
        .map(|n| n / BLOCKSIZE * BLOCKSIZE)
        .ok_or(Sha256Error::InputTooLarge { len: data.len() })?;

    let mut padded_message: Vec<u8> = Vec::with_capacity(padded_len);
    padded_message.extend_from_slice(data);

    // Append a '1' bit followed by seven '0' bits
    padded_message.push(0x80);

    // Append '0' bytes until the length is congruent to 56 mod 64
    padded_message.resize(padded_len - LENGTH_FIELD, 0);

    padded_message.extend_from_slice(&num_bits.to_be_bytes());
    Ok(padded_message)
}

// Parses the padded message into 512-bit blocks represented as a vector of arrays (blocks) each containing 16 u32's
pub fn parse(data: &[u8]) -> Vec<[u32; 16]> {
    let mut message_blocks: Vec<[u32; 16]> = Vec::with_capacity(data.len() / BLOCKSIZE);

    for outer_chunk in data.chunks_exact(BLOCKSIZE) {
        let mut block: [u32; 16] = [0_u32; 16];

        // Each group of 4 bytes is one big-endian word
        for (word, inner_chunk) in block.iter_mut().zip(outer_chunk.chunks_exact(4)) {
            *word = u32::from_be_bytes([inner_chunk[0], inner_chunk[1], inner_chunk[2], inner_chunk[3]]);
        }
        message_blocks.push(block);
    }

    message_blocks
}

// ============== Operations on Words ================== //
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

pub fn shr(x: u32, n: u32) -> u32 {
    x >> n
}

pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

pub fn Sigma_256_0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

pub fn Sigma_256_1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

pub fn sigma_256_0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

pub fn sigma_256_1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}
