use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
    time::{Duration, Instant},
};

/// Server side storage for session state, keyed by opaque session tokens.
///
/// Implementations must serialize access per token. Expired entries must be
/// invisible to [`SessionStore::get`] even before they are purged.
pub trait SessionStore<V>: Send + Sync {
    fn get(&self, token: &str) -> Option<V>;

    /// Stores `value` under `token`, replacing any previous entry.
    /// The entry's lifetime starts now.
    fn insert(&self, token: String, value: V);

    /// Applies `f` to a live entry in place, keeping its expiry.
    /// Returns false if there was no live entry.
    fn update(&self, token: &str, f: &mut dyn FnMut(&mut V)) -> bool;

    /// Removing a token that does not exist is not an error.
    fn remove(&self, token: &str) -> Option<V>;

    /// Drops every expired entry and returns how many were dropped.
    fn purge_expired(&self) -> usize;
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Longest time to live a store accepts. Larger values are clamped to it.
pub const MAX_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Process local session store with a fixed time to live per entry.
pub struct MemorySessionStore<V> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V> MemorySessionStore<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: ttl.min(MAX_TTL),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Send + Sync> SessionStore<V> for MemorySessionStore<V> {
    fn get(&self, token: &str) -> Option<V> {
        let now = Instant::now();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        entries
            .get(token)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    fn insert(&self, token: String, value: V) {
        let now = Instant::now();
        let entry = Entry {
            value,
            expires_at: now.checked_add(self.ttl).unwrap_or(now + MAX_TTL),
        };

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, entry);
    }

    fn update(&self, token: &str, f: &mut dyn FnMut(&mut V)) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        match entries.get_mut(token) {
            Some(entry) if entry.is_live(now) => {
                f(&mut entry.value);
                true
            }
            _ => false,
        }
    }

    fn remove(&self, token: &str) -> Option<V> {
        let now = Instant::now();

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value)
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    fn store() -> MemorySessionStore<u32> {
        MemorySessionStore::new(Duration::from_secs(60))
    }

    #[test]
    fn insert_get_remove() {
        let store = store();
        store.insert("a".into(), 1);

        assert_eq!(store.get("a"), Some(1));
        assert_eq!(store.get("b"), None);
        assert_eq!(store.remove("a"), Some(1));
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn removing_missing_token_is_noop() {
        let store = store();
        assert_eq!(store.remove("nope"), None);
        assert_eq!(store.remove("nope"), None);
    }

    #[test]
    fn update_only_touches_live_entries() {
        let store = store();
        store.insert("a".into(), 1);

        assert!(store.update("a", &mut |v| *v += 10));
        assert_eq!(store.get("a"), Some(11));
        assert!(!store.update("missing", &mut |v| *v += 10));
    }

    #[test]
    fn expired_entries_are_hidden_then_purged() {
        let store = MemorySessionStore::new(Duration::from_millis(20));
        store.insert("a".to_string(), 1u32);
        assert_eq!(store.get("a"), Some(1));

        thread::sleep(Duration::from_millis(40));

        assert_eq!(store.get("a"), None);
        assert!(!store.update("a", &mut |v| *v = 2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.purge_expired(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn oversized_ttl_is_clamped() {
        let store = MemorySessionStore::new(Duration::MAX);
        store.insert("a".to_string(), 1u32);

        assert_eq!(store.get("a"), Some(1));
        assert_eq!(store.purge_expired(), 0);
    }

    #[test]
    fn concurrent_updates_are_serialized() {
        let store = Arc::new(store());
        store.insert("counter".into(), 0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.update("counter", &mut |v| *v += 1);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get("counter"), Some(800));
    }
}
