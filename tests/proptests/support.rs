//! Generators shared by the property tests

use mnemonic_sharing::Mnemonic;
use mnemonic_sharing::domain::WordCount;
use quickcheck::{Arbitrary, Gen};

/// Wrapper for checksum-valid mnemonics of any supported size
#[derive(Clone, Debug)]
pub struct ValidMnemonic(pub Mnemonic);

impl Arbitrary for ValidMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        let words = *g.choose(&WordCount::ALL).unwrap_or(&12);
        let word_count = WordCount::new(usize::from(words)).expect("supported word count");

        // Generate random entropy
        let entropy: Vec<u8> = (0..word_count.entropy_bytes())
            .map(|_| u8::arbitrary(g))
            .collect();

        // Create mnemonic from entropy (this handles checksum automatically)
        ValidMnemonic(Mnemonic::from_entropy(&entropy).expect("valid entropy"))
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
pub struct ValidParams {
    pub threshold: u8,
    pub share_count: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // 1..=15 so every phrase size can carry the indices
        let share_count = (u8::arbitrary(g) % 15) + 1;
        let threshold = (u8::arbitrary(g) % share_count) + 1; // 1..=share_count

        ValidParams {
            threshold,
            share_count,
        }
    }
}

/// Deterministic shuffle of `0..len` driven by `seed`
pub fn shuffled_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();

    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let range = u64::try_from(indices.len() - i).expect("range fits in u64");
        let offset = usize::try_from(seed % range).expect("offset < range fits in usize");
        indices.swap(i, i + offset);
    }

    indices
}
