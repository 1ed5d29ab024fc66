//! Blake2b hashing and output-identifier derivation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use facet_types::{OutputId, OwnerId};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Derive the identifier a transfer output lives under.
///
/// Canonical encoding is `"{input_hex}:{new_owner}"`, so the new identifier
/// encodes exactly which entry it was re-keyed from and for whom.
pub fn derive_transfer_output(input: &OutputId, new_owner: &OwnerId) -> OutputId {
    let hash = blake2b_256_multi(&[
        input.to_string().as_bytes(),
        b":",
        new_owner.as_str().as_bytes(),
    ]);
    OutputId::new(hash)
}

/// Derive the identifier of the `index`-th output of a subdivision.
///
/// Canonical encoding is `"{parent_hex}:{index}:{owner}"`; the index keeps
/// sibling outputs to the same owner from colliding.
pub fn derive_subdivision_output(parent: &OutputId, index: u32, owner: &OwnerId) -> OutputId {
    let hash = blake2b_256_multi(&[
        parent.to_string().as_bytes(),
        b":",
        index.to_string().as_bytes(),
        b":",
        owner.as_str().as_bytes(),
    ]);
    OutputId::new(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_deterministic() {
        let h1 = blake2b_256(b"hello facet");
        let h2 = blake2b_256(b"hello facet");
        assert_eq!(h1, h2);
    }

    #[test]
    fn blake2b_different_inputs() {
        let h1 = blake2b_256(b"hello");
        let h2 = blake2b_256(b"world");
        assert_ne!(h1, h2);
    }

    #[test]
    fn blake2b_multi_equivalent() {
        let single = blake2b_256(b"helloworld");
        let multi = blake2b_256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn transfer_output_deterministic() {
        let input = OutputId::new([7u8; 32]);
        let owner = OwnerId::new("bob");
        assert_eq!(
            derive_transfer_output(&input, &owner),
            derive_transfer_output(&input, &owner)
        );
    }

    #[test]
    fn transfer_output_depends_on_both_inputs() {
        let input = OutputId::new([7u8; 32]);
        let other = OutputId::new([8u8; 32]);
        let bob = OwnerId::new("bob");
        let carol = OwnerId::new("carol");
        let base = derive_transfer_output(&input, &bob);
        assert_ne!(base, derive_transfer_output(&other, &bob));
        assert_ne!(base, derive_transfer_output(&input, &carol));
    }

    #[test]
    fn subdivision_outputs_distinct_per_index() {
        let parent = OutputId::new([9u8; 32]);
        let owner = OwnerId::new("alice");
        let first = derive_subdivision_output(&parent, 0, &owner);
        let second = derive_subdivision_output(&parent, 1, &owner);
        assert_ne!(first, second);
    }

    #[test]
    fn derived_ids_never_equal_their_source() {
        let input = OutputId::new([3u8; 32]);
        let derived = derive_transfer_output(&input, &OwnerId::new("bob"));
        assert_ne!(derived, input);
    }
}
