use crate::constants::PRIME_CUBES;
use crate::schedule::MessageSchedule;
use crate::utils::{ch, maj, Sigma_256_0, Sigma_256_1};

// Runs the 64 rounds for one block and folds the working variables back into hash_value.
// hash_value goes in as the chaining value left by the previous block and comes out as the seed for the next one.
pub fn compress(hash_value: &mut [u32; 8], message_schedule: &MessageSchedule) {
    // Initialize the eight working variables with the last hash value
    let mut a = hash_value[0];
    let mut b = hash_value[1];
    let mut c = hash_value[2];
    let mut d = hash_value[3];
    let mut e = hash_value[4];
    let mut f = hash_value[5];
    let mut g = hash_value[6];
    let mut h = hash_value[7];

    // Compute the two temporary words and update the working variables
    for (&k, &w) in PRIME_CUBES.iter().zip(message_schedule.words().iter()) {
        let t1 = h.wrapping_add(Sigma_256_1(e))
                    .wrapping_add(ch(e, f, g))
                    .wrapping_add(k)
                    .wrapping_add(w);

        let t2 = Sigma_256_0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Update the hash value
    let temp_values = [a, b, c, d, e, f, g, h];
    for (word, temp_value) in hash_value.iter_mut().zip(temp_values) {
        *word = word.wrapping_add(temp_value);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_HASH;
    use crate::utils::{pad, parse};

    #[test]
    fn test_single_block() {
        let block = parse(&pad(b"abc").unwrap())[0];
        let mut hash_value = INITIAL_HASH;
        compress(&mut hash_value, &MessageSchedule::from_block(&block));

        assert_eq!(hash_value, [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
            0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
        ]);
    }

    #[test]
    fn test_chaining_value_is_threaded() {
        let blocks = parse(&pad(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap());
        assert_eq!(blocks.len(), 2);

        let mut chained = INITIAL_HASH;
        for block in &blocks {
            compress(&mut chained, &MessageSchedule::from_block(block));
        }
        assert_eq!(chained, [
            0x248d6a61, 0xd20638b8, 0xe5c02693, 0x0c3e6039,
            0xa33ce459, 0x64ff2167, 0xf6ecedd4, 0x19db06c1,
        ]);

        // Seeding the second block from the initial hash instead of the first block's result loses the chain
        let mut reseeded = INITIAL_HASH;
        compress(&mut reseeded, &MessageSchedule::from_block(&blocks[1]));
        assert_ne!(reseeded, chained);
    }

    #[test]
    fn test_saturated_words_wrap() {
        let mut hash_value = [u32::MAX; 8];
        compress(&mut hash_value, &MessageSchedule::from_block(&[u32::MAX; 16]));

        let mut again = [u32::MAX; 8];
        compress(&mut again, &MessageSchedule::from_block(&[u32::MAX; 16]));
        assert_eq!(hash_value, again);
    }
}
