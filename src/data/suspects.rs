//! The suspect lookup table
//!
//! The detective's knowledge: which suspect each clue implicates. Keyed
//! by the exact clue text in a fixed-size chained hash table, populated
//! once when the case opens and read-only afterwards.
//!
//! Inserts prepend to the bucket chain, so inserting the same clue text
//! twice leaves both entries in storage but only the most recent one
//! reachable by lookup.

use serde::{Deserialize, Serialize};

/// Number of hash buckets. A small prime is plenty for a case's clue set;
/// the choice only affects chain lengths, never lookup results.
const TABLE_SIZE: usize = 11;

/// One link in a bucket chain
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SuspectEntry {
    clue_text: String,
    suspect_name: String,
    next: Option<Box<SuspectEntry>>,
}

/// Hash table mapping clue text to the suspect it implicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectLookup {
    buckets: Vec<Option<Box<SuspectEntry>>>,
    len: usize,
}

impl SuspectLookup {
    pub fn new() -> Self {
        Self {
            buckets: (0..TABLE_SIZE).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Number of stored entries, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associate a clue with a suspect
    ///
    /// The entry is prepended to its bucket chain; a previous entry for
    /// the same text stays in the chain but is shadowed for lookup.
    pub fn insert(&mut self, clue_text: &str, suspect_name: &str) {
        let slot = &mut self.buckets[bucket_of(clue_text)];
        let entry = Box::new(SuspectEntry {
            clue_text: clue_text.to_string(),
            suspect_name: suspect_name.to_string(),
            next: slot.take(),
        });
        *slot = Some(entry);
        self.len += 1;
    }

    /// Find the suspect a clue implicates
    ///
    /// Byte-exact match, walking the chain from its head so the most
    /// recently inserted entry for the text wins. `None` when the clue
    /// is not part of the detective's knowledge.
    pub fn lookup(&self, clue_text: &str) -> Option<&str> {
        let mut entry = self.buckets[bucket_of(clue_text)].as_deref();
        while let Some(e) = entry {
            if e.clue_text == clue_text {
                return Some(&e.suspect_name);
            }
            entry = e.next.as_deref();
        }
        None
    }
}

impl Default for SuspectLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// djb2 string hash reduced to a bucket index
///
/// Deterministic across calls and runs; no per-run seeding.
fn bucket_of(text: &str) -> usize {
    let mut hash: u64 = 5381;
    for byte in text.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    (hash % TABLE_SIZE as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn lookup_finds_what_was_inserted() {
        let mut table = SuspectLookup::new();
        table.insert("poison receipt", "Butler");
        table.insert("footprints", "Gardener");
        assert_eq!(table.lookup("poison receipt"), Some("Butler"));
        assert_eq!(table.lookup("footprints"), Some("Gardener"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_clue_is_absent_not_an_error() {
        let mut table = SuspectLookup::new();
        table.insert("poison receipt", "Butler");
        assert_eq!(table.lookup("bloody glove"), None);
        assert_eq!(SuspectLookup::new().lookup("anything"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = SuspectLookup::new();
        table.insert("poison receipt", "Butler");
        assert_eq!(table.lookup("Poison Receipt"), None);
    }

    #[test]
    fn most_recent_insertion_shadows_older_entries() {
        let mut table = SuspectLookup::new();
        table.insert("poison receipt", "Butler");
        table.insert("poison receipt", "Gardener");
        assert_eq!(table.lookup("poison receipt"), Some("Gardener"));
        // both entries remain in storage
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn chained_buckets_keep_colliding_keys_apart() {
        // With 11 buckets, enough distinct keys guarantees collisions;
        // every key must still resolve to its own suspect.
        let mut table = SuspectLookup::new();
        let keys: Vec<String> = (0..50).map(|i| format!("clue #{i}")).collect();
        for (i, key) in keys.iter().enumerate() {
            table.insert(key, &format!("suspect #{i}"));
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(table.lookup(key), Some(format!("suspect #{i}").as_str()));
        }
    }

    quickcheck! {
        fn hash_is_pure(text: String) -> bool {
            bucket_of(&text) == bucket_of(&text)
        }

        fn hash_stays_in_range(text: String) -> bool {
            bucket_of(&text) < TABLE_SIZE
        }

        fn inserted_pairs_are_found(pairs: Vec<(String, String)>) -> bool {
            let mut table = SuspectLookup::new();
            for (clue, suspect) in &pairs {
                table.insert(clue, suspect);
            }
            // walking the pairs backwards sees each key's latest insertion first
            let mut seen = std::collections::HashSet::new();
            pairs.iter().rev().all(|(clue, suspect)| {
                if !seen.insert(clue.clone()) {
                    return true; // shadowed, already checked the winner
                }
                table.lookup(clue) == Some(suspect.as_str())
            })
        }
    }
}
