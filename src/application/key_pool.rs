//! Standing pool of pre-generated short keys.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::AppError;
use crate::utils::key_gen::{DEFAULT_KEY_LENGTH, generate_key, validate_key_format};

/// Default number of keys kept ready for issuance.
pub const DEFAULT_POOL_SIZE: usize = 100;

/// A reservation set of mutually-unique short keys awaiting issuance.
///
/// The pool is the source of truth for "is this key already reserved but
/// not yet attached to a mapping". It deliberately does not know about
/// persisted keys; the orchestrating service checks storage separately
/// before committing a custom key.
///
/// All operations take an internal mutex, so a pool instance can be shared
/// across request handlers: two concurrent [`KeyPool::take_next`] calls
/// never return the same key. The critical section is CPU-only (random
/// generation, set membership) and completes in microseconds.
///
/// Refilling regenerates on collision with keys already in the set. With a
/// base62 alphabet and length 7 the key space holds ~3.5e12 values, so the
/// refill loop is assumed never to run out of fresh keys.
pub struct KeyPool {
    keys: Mutex<HashSet<String>>,
    target_size: usize,
    key_length: usize,
}

impl KeyPool {
    /// Creates an empty pool that refills to `target_size` keys of
    /// `key_length` characters. A target size of zero is bumped to one so
    /// that [`KeyPool::take_next`] always has a key to hand out.
    pub fn new(target_size: usize, key_length: usize) -> Self {
        Self {
            keys: Mutex::new(HashSet::new()),
            target_size: target_size.max(1),
            key_length,
        }
    }

    /// Grows the reservation set to at least `target_size` entries.
    ///
    /// Never shrinks the set: filling to a size smaller than the current
    /// one is a no-op.
    pub fn fill(&self, target_size: usize) {
        let mut keys = self.keys.lock().expect("key pool mutex poisoned");
        Self::fill_locked(&mut keys, target_size, self.key_length);
        tracing::info!("key pool filled, current size: {}", keys.len());
    }

    /// Removes and returns one reserved key, refilling first if the pool
    /// is empty.
    ///
    /// Which of the reserved keys is returned is unspecified.
    pub fn take_next(&self) -> String {
        let mut keys = self.keys.lock().expect("key pool mutex poisoned");

        if keys.is_empty() {
            Self::fill_locked(&mut keys, self.target_size, self.key_length);
        }

        let key = match keys.iter().next() {
            Some(key) => key.clone(),
            // Unreachable with target_size >= 1; regenerate rather than panic.
            None => generate_key(self.key_length),
        };
        keys.remove(&key);
        key
    }

    /// Returns true if `key` currently sits unissued in the pool.
    ///
    /// Only covers the reservation namespace; persisted keys are checked
    /// by the caller against storage.
    pub fn is_reserved(&self, key: &str) -> bool {
        self.keys.lock().expect("key pool mutex poisoned").contains(key)
    }

    /// Validates a caller-supplied custom key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidKey`] for length or character-set
    /// violations, [`AppError::KeyCollision`] if the key is currently
    /// reserved in the pool.
    pub fn validate_custom_key(&self, key: &str) -> Result<(), AppError> {
        validate_key_format(key)?;

        if self.is_reserved(key) {
            return Err(AppError::key_collision(key));
        }

        Ok(())
    }

    /// The size the pool refills itself to when it runs dry.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the number of keys currently reserved.
    pub fn len(&self) -> usize {
        self.keys.lock().expect("key pool mutex poisoned").len()
    }

    /// Returns true if no keys are currently reserved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fill_locked(keys: &mut HashSet<String>, target_size: usize, key_length: usize) {
        while keys.len() < target_size {
            // HashSet::insert discards duplicates, which is the collision
            // retry: a clashing key simply does not grow the set.
            keys.insert(generate_key(key_length));
        }
    }
}

impl Default for KeyPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_KEY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_fill_reaches_target_size() {
        let pool = KeyPool::new(50, 7);
        pool.fill(50);
        assert_eq!(pool.len(), 50);
    }

    #[test]
    fn test_fill_is_monotonic() {
        let pool = KeyPool::new(50, 7);
        pool.fill(50);
        pool.fill(10);
        assert_eq!(pool.len(), 50);

        pool.fill(80);
        assert_eq!(pool.len(), 80);
    }

    #[test]
    fn test_take_next_refills_empty_pool() {
        let pool = KeyPool::new(5, 7);
        assert!(pool.is_empty());

        let key = pool.take_next();
        assert_eq!(key.len(), 7);
        // Refilled to target, then one taken.
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_take_next_removes_key_from_pool() {
        let pool = KeyPool::new(10, 7);
        let key = pool.take_next();
        assert!(!pool.is_reserved(&key));
    }

    #[test]
    fn test_take_next_never_exhausts() {
        let pool = KeyPool::new(3, 7);
        let mut seen = HashSet::new();

        for _ in 0..100 {
            assert!(seen.insert(pool.take_next()));
        }
    }

    #[test]
    fn test_concurrent_take_next_returns_distinct_keys() {
        let pool = Arc::new(KeyPool::new(8, 7));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let pool = pool.clone();
            handles.push(std::thread::spawn(move || {
                (0..25).map(|_| pool.take_next()).collect::<Vec<_>>()
            }));
        }

        let mut all_keys = HashSet::new();
        let mut total = 0;
        for handle in handles {
            for key in handle.join().unwrap() {
                all_keys.insert(key);
                total += 1;
            }
        }

        assert_eq!(all_keys.len(), total);
    }

    #[test]
    fn test_validate_custom_key_rejects_empty() {
        let pool = KeyPool::default();
        assert!(matches!(
            pool.validate_custom_key(""),
            Err(AppError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_validate_custom_key_rejects_too_long() {
        let pool = KeyPool::default();
        assert!(matches!(
            pool.validate_custom_key(&"a".repeat(9)),
            Err(AppError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_validate_custom_key_rejects_bad_characters() {
        let pool = KeyPool::default();
        assert!(matches!(
            pool.validate_custom_key("a!b"),
            Err(AppError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_validate_custom_key_rejects_reserved_key() {
        let pool = KeyPool::new(5, 7);
        pool.keys.lock().unwrap().insert("abc123Z".to_string());

        assert!(pool.is_reserved("abc123Z"));
        assert!(matches!(
            pool.validate_custom_key("abc123Z"),
            Err(AppError::KeyCollision { .. })
        ));
    }

    #[test]
    fn test_issued_key_is_no_longer_reserved() {
        let pool = KeyPool::new(5, 7);
        let issued = pool.take_next();

        // Once issued, the key is out of the reservation namespace; only
        // the persistence check (the caller's job) can reject it now.
        assert!(pool.validate_custom_key(&issued).is_ok());
    }

    #[test]
    fn test_validate_custom_key_accepts_fresh_key() {
        let pool = KeyPool::default();
        assert!(pool.validate_custom_key("My5hort1").is_ok());
    }

    #[test]
    fn test_default_pool_uses_default_sizes() {
        let pool = KeyPool::default();
        let key = pool.take_next();
        assert_eq!(key.len(), DEFAULT_KEY_LENGTH);
        assert_eq!(pool.len(), DEFAULT_POOL_SIZE - 1);
    }
}
