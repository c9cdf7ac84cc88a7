//! Random password generation from a fixed 94-character alphabet.

use rand::Rng;
use rand::rngs::OsRng;

use crate::error::Error;

/// Uppercase letters, lowercase letters, digits and the 32 ASCII punctuation
/// symbols — 94 characters total.
pub const ALPHABET: &[u8; 94] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generates a password of `length` characters drawn uniformly from
/// [`ALPHABET`] using the operating system's cryptographic random source.
///
/// Zero and negative lengths fail alike with [`Error::InvalidLength`]. The
/// generator performs no breach checking; callers wanting an unbreached
/// password loop generate-then-check until the check comes back clean.
pub fn generate(length: i64) -> Result<String, Error> {
    if length <= 0 {
        return Err(Error::InvalidLength { length });
    }

    let mut rng = OsRng;
    let mut password = String::with_capacity(length as usize);
    for _ in 0..length {
        let idx = rng.gen_range(0..ALPHABET.len());
        password.push(ALPHABET[idx] as char);
    }

    Ok(password)
}
