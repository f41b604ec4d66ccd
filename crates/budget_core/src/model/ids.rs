//! Entry id generation
//!
//! Ids look like `debt-1718000000000-k3j9x0a2b`: a collection prefix, the
//! creation time in milliseconds and nine random base-36 characters.

use jiff::Timestamp;
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

pub const INCOME_PREFIX: &str = "inc";
pub const EXPENSE_PREFIX: &str = "exp";
pub const DEBT_PREFIX: &str = "debt";
pub const GOAL_PREFIX: &str = "goal";

/// Generate a fresh id using the current time and thread-local randomness.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    generate_id_with(prefix, Timestamp::now(), &mut rand::rng())
}

/// Deterministic variant of [`generate_id`] for callers that supply their own clock and rng.
pub fn generate_id_with<R: Rng + ?Sized>(prefix: &str, now: Timestamp, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{}-{suffix}", now.as_millisecond())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_id_shape() {
        let now = Timestamp::from_millisecond(1_700_000_000_000).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_id_with(DEBT_PREFIX, now, &mut rng);

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "debt");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_id(GOAL_PREFIX), generate_id(GOAL_PREFIX));
    }
}
