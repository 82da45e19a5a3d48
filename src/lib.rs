//! mulhash: a fixed-capacity chained hash table using multiplicative
//! hashing, built for counting word frequencies over large token streams.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: O(1) expected find / insert-or-update on a table that is sized
//!   once and never rehashes.
//! - Layers:
//!   - HashElement: the key contract. `equals` compares keys only and
//!     `hash_code` is a 32-bit pure function of the same key.
//!   - ArrayedList<T>: owning, index-addressed sequence. Stages raw tokens
//!     and also serves as the per-bucket chain.
//!   - HashTable<T>: `2^d` buckets; entries live in a slot map and chains
//!     hold slot keys. Bucket index = top `d` bits of `z * hash_code`.
//!   - word_count: the counting loop and `WordCount` entries.
//!
//! Sizing
//! - `d = ceil(log2(2 * expected_size))`, so a correct hint keeps the load
//!   factor at or below 0.5. A hint of 0 is an error. A hint that would
//!   need more than 32 bits of bucket index is an error.
//! - Exceeding the hint is allowed; chains grow and a warning is logged
//!   once the load factor reaches 1.0.
//!
//! Multiplier
//! - `z` is forced odd. It is random per table by default, or injected via
//!   `Multiplier` / an RNG for deterministic placement.
//!
//! Update semantics
//! - `add` replaces an entry with an equal key wholesale and returns the
//!   old one. Counting goes through `find_mut` / `find_by_mut` instead, so
//!   the stored entry is mutated in place.
//!
//! Notes and non-goals
//! - No removal of single keys; `clear()` drops everything.
//! - No resizing.
//! - No internal synchronization.

pub mod arrayed_list;
pub mod hash_element;
pub mod hash_table;
mod hash_table_proptest;
pub mod multiplier;
pub mod word_count;

// Public surface
pub use arrayed_list::{ArrayedList, Rejected, SequenceError};
pub use hash_element::{hash_str, HashElement};
pub use hash_table::{ChainStats, Handle, HashTable, TableError};
pub use multiplier::Multiplier;
pub use word_count::{count_words, tally, WordCount, WordCounts};
