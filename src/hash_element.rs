//! HashElement: the key equality + hash code contract for table entries.
//!
//! A type stored in `HashTable` decides what its key is. `equals` compares
//! keys only and `hash_code` is a pure function of the same key, so any
//! non-key fields (counters, payloads) can change freely while the entry
//! is stored.

/// Contract for values stored in a `HashTable`.
///
/// Implementations must uphold `a.equals(b) => a.hash_code() == b.hash_code()`.
/// Breaking this does not cause memory unsafety, but lookups for equal keys
/// may land in different buckets and miss.
pub trait HashElement {
    /// Key equality; must ignore fields that are not part of the key.
    fn equals(&self, other: &Self) -> bool;

    /// 32-bit hash code derived from the key alone.
    fn hash_code(&self) -> u32;
}

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `s`.
///
/// Panics if `s` is empty: an empty key has no meaningful hash code and
/// indicates a tokenizer bug upstream.
#[inline]
pub fn hash_str(s: &str) -> u32 {
    assert!(!s.is_empty(), "hash_code requested for an empty key");
    s.bytes().fold(FNV_OFFSET_BASIS, |h, b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

impl HashElement for String {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
    fn hash_code(&self) -> u32 {
        hash_str(self)
    }
}

impl HashElement for Box<str> {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
    fn hash_code(&self) -> u32 {
        hash_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_vectors() {
        // Reference values for 32-bit FNV-1a.
        assert_eq!(hash_str("a"), 0xe40c_292c);
        assert_eq!(hash_str("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn equal_strings_hash_equal() {
        let a = String::from("nature");
        let b = "nature".to_string();
        assert!(a.equals(&b));
        assert_eq!(a.hash_code(), b.hash_code());

        let boxed: Box<str> = "nature".into();
        assert_eq!(boxed.hash_code(), a.hash_code());
    }

    #[test]
    #[should_panic(expected = "empty key")]
    fn empty_key_is_rejected() {
        let _ = String::new().hash_code();
    }
}
