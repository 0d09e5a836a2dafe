use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PRINTABLE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Plaintext planted by [`wordlist_with`]. Generated lines are longer, so
/// they never equal it.
pub const PLANTED: &[u8] = b"hashgoat";

/// Seeded wordlist shaped like a leaked password dump: mostly printable
/// ASCII, with roughly one line in twenty carrying a Latin-1 byte.
pub fn generate_wordlist(count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(9..=24);
            let mut line: Vec<u8> =
                (0..length).map(|_| PRINTABLE[rng.gen_range(0..PRINTABLE.len())]).collect();
            if rng.gen_ratio(1, 20) {
                let at = rng.gen_range(0..line.len());
                line[at] = rng.gen_range(0xc0..=0xff);
            }
            line
        })
        .collect()
}

/// Generated wordlist with [`PLANTED`] overwriting the line at each of
/// `positions`, for benches that need a match at a known depth.
pub fn wordlist_with(count: usize, positions: &[usize]) -> Vec<Vec<u8>> {
    let mut lines = generate_wordlist(count);
    for &at in positions {
        lines[at] = PLANTED.to_vec();
    }
    lines
}
