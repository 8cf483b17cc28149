use crate::constants::SCHEDULE_LEN;
use crate::error::Sha256Error;
use crate::utils::{sigma_256_0, sigma_256_1};

/// The 64 words fed into the compression rounds of one block.
///
/// Words 0..15 are the block itself, every later word is derived from four
/// earlier ones and stored as soon as it is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; SCHEDULE_LEN],
}

impl MessageSchedule {
    pub fn from_block(block: &[u32; 16]) -> Self {
        let mut words: [u32; SCHEDULE_LEN] = [0_u32; SCHEDULE_LEN];
        words[..16].copy_from_slice(block);

        // Single forward pass, each word only reads already computed words
        for t in 16..SCHEDULE_LEN {
            words[t] = sigma_256_1(words[t - 2])
                            .wrapping_add(words[t - 7])
                            .wrapping_add(sigma_256_0(words[t - 15]))
                            .wrapping_add(words[t - 16]);
        }

        Self { words }
    }

    /// Returns word `t`, or `InternalRange` when `t` is not in 0..63.
    pub fn get(&self, t: usize) -> Result<u32, Sha256Error> {
        self.words
            .get(t)
            .copied()
            .ok_or(Sha256Error::InternalRange { index: t })
    }

    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.words
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{pad, parse};

    fn abc_block() -> [u32; 16] {
        parse(&pad(b"abc").unwrap())[0]
    }

    #[test]
    fn test_first_words_are_block() {
        let block = abc_block();
        let schedule = MessageSchedule::from_block(&block);

        assert_eq!(&schedule.words()[..16], &block[..]);
    }

    #[test]
    fn test_expanded_words() {
        // Intermediate values published with the FIPS 180-2 "abc" example
        let schedule = MessageSchedule::from_block(&abc_block());

        assert_eq!(schedule.get(16).unwrap(), 0x61626380);
        assert_eq!(schedule.get(17).unwrap(), 0x000f0000);
        assert_eq!(schedule.get(63).unwrap(), 0x12b1edeb);
    }

    #[test]
    fn test_recurrence_holds() {
        let block: [u32; 16] = core::array::from_fn(|i| (i as u32).wrapping_mul(0x9e37_79b9));
        let schedule = MessageSchedule::from_block(&block);
        let w = schedule.words();

        for t in 16..SCHEDULE_LEN {
            let expected = sigma_256_1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(sigma_256_0(w[t - 15]))
                .wrapping_add(w[t - 16]);
            assert_eq!(w[t], expected, "word {}", t);
        }
    }

    #[test]
    fn test_out_of_range() {
        let schedule = MessageSchedule::from_block(&abc_block());

        assert_eq!(schedule.get(64), Err(Sha256Error::InternalRange { index: 64 }));
        assert_eq!(schedule.get(usize::MAX), Err(Sha256Error::InternalRange { index: usize::MAX }));
    }
}
