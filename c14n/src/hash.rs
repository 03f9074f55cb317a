//! SHA-256 helpers backing every hash of the canonicalization algorithm.
//!
//! URDNA2015 mandates SHA-256; no other hash function is supported.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// The lowercase hex SHA-256 digest of `data` (64 characters).
pub fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    hex(&Sha256::digest(data.as_ref()))
}

/// The digest of the concatenation of `lines` with no separator;
/// lines are expected to be newline-terminated already.
pub fn sha256_hex_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_ref());
    }
    hex(&hasher.finalize())
}

fn hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        write!(&mut out, "{b:02x}").unwrap();
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_digest() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn lines_concatenate_without_separator() {
        assert_eq!(
            sha256_hex_lines(["a\n", "b\n"]),
            sha256_hex("a\nb\n"),
        );
        assert_eq!(
            sha256_hex_lines(["a\n", "b\n"]),
            "911169ddaaf146aff539f58c26c489af3b892dff0fe283c1c264c65ae5aa59a2"
        );
    }

    #[test]
    fn digest_shape() {
        let digest = sha256_hex("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
