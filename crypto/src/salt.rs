//! Salt generation for preclaim commitments.

use rand::RngCore;

use aens_types::Salt;

/// Generate a fresh unpredictable salt from the OS entropy source.
pub fn random_salt() -> Salt {
    let mut bytes = [0u8; 8];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    Salt::new(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_are_unique() {
        // 64 bits of entropy; a collision here means the generator is broken.
        let salts: Vec<Salt> = (0..16).map(|_| random_salt()).collect();
        for (i, a) in salts.iter().enumerate() {
            for b in salts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
