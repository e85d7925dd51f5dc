//! Evaluation ids: 7 random base-36 characters.
//!
//! Not collision-free. Ids only key rows in the dashboard's transient list and are
//! never stored or used as references, so best-effort uniqueness is enough.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const ID_LEN: usize = 7;

pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
