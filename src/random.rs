use rand::Rng;

pub const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
// both cases, so a generated color hex is not normalised
pub const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

pub fn random_char<R: Rng>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}

pub fn random_string<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len).map(|_| random_char(rng, alphabet)).collect()
}
