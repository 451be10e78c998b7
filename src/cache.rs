//! Format pattern caching.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;

use crate::ast::DateFormat;
use crate::error::FormatError;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// A bounded cache of compiled format patterns, keyed by pattern string.
///
/// Patterns are compiled outside the lock. Two threads missing on the same
/// pattern may both compile it; the results are identical and the later
/// insert wins.
#[derive(Debug)]
pub struct FormatCache {
    entries: Mutex<LruCache<String, Arc<DateFormat>>>,
}

impl Default for FormatCache {
    fn default() -> Self {
        FormatCache::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FormatCache {
    pub fn new() -> Self {
        FormatCache::default()
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        FormatCache {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Get a compiled pattern, compiling and storing it on a miss.
    pub fn get_or_parse(&self, pattern: &str) -> Result<Arc<DateFormat>, FormatError> {
        if let Some(format) = self.lock().get(pattern) {
            return Ok(Arc::clone(format));
        }

        trace!("format cache miss for {:?}", pattern);
        let format = Arc::new(DateFormat::parse(pattern)?);
        let evicted = self
            .lock()
            .push(pattern.to_string(), Arc::clone(&format));
        if let Some((key, _)) = evicted {
            if key != pattern {
                debug!("format cache evicted {:?}", key);
            }
        }
        Ok(format)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Cached values are immutable, so a panic while the lock was held cannot
    // leave an entry half-written.
    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Arc<DateFormat>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_returns_same_instance() {
        let cache = FormatCache::new();
        let a = cache.get_or_parse("YYYY/MM/DD").unwrap();
        let b = cache.get_or_parse("YYYY/MM/DD").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = FormatCache::new();
        assert!(cache.get_or_parse("YYY").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_is_bounded() {
        let cache = FormatCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.get_or_parse("YYYY").unwrap();
        cache.get_or_parse("MM").unwrap();
        cache.get_or_parse("DD").unwrap();
        assert_eq!(cache.len(), 2);
    }
}
