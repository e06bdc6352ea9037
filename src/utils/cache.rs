// Small in-process cache for dashboard aggregates.
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

lazy_static::lazy_static! {
    static ref CACHE: RwLock<HashMap<String, (String, Instant)>> = RwLock::new(HashMap::new());
}

pub fn get_cached(key: &str) -> Option<String> {
    let cache = CACHE.read().ok()?;
    let (value, expires_at) = cache.get(key)?;
    if Instant::now() < *expires_at {
        Some(value.clone())
    } else {
        None
    }
}

pub fn set_cache(key: String, value: String, ttl: Duration) {
    if let Ok(mut cache) = CACHE.write() {
        cache.insert(key, (value, Instant::now() + ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_entries_are_misses() {
        set_cache("t1".into(), "v".into(), Duration::from_secs(60));
        assert_eq!(get_cached("t1").as_deref(), Some("v"));

        set_cache("t2".into(), "v".into(), Duration::from_secs(0));
        assert_eq!(get_cached("t2"), None);
    }
}
