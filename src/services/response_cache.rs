use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use dashmap::DashMap;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::cache_entry::CacheEntry;
use crate::structs::raw_model_response::RawModelResponse;

/// Bounded, process-lifetime map from request fingerprint to model reply.
///
/// Eviction is FIFO by insertion order. Two concurrent misses on the same key
/// both reach the provider and the later `put` wins; this costs a redundant
/// call and never mixes results between requests.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    order: Mutex<VecDeque<String>>,
    counter: AtomicU64,
    capacity: usize,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            order: Mutex::new(VecDeque::with_capacity(capacity)),
            counter: AtomicU64::new(0),
            capacity: capacity.max(1),
        }
    }

    /// Deterministic key for a request as seen by a given model. Overrides
    /// take part because they change what the model is asked.
    pub fn fingerprint(model: &str, request: &AnalysisRequest) -> String {
        let mut hasher = DefaultHasher::new();
        request.source_code.hash(&mut hasher);
        request.config_overrides.temperature.map(f32::to_bits).hash(&mut hasher);
        request.config_overrides.max_tokens.hash(&mut hasher);
        request.config_overrides.system_prompt.hash(&mut hasher);

        format!(
            "{}:{}:{}:{}:{:016x}",
            model,
            request.kind.slug(),
            request.language.trim().to_lowercase(),
            request.source_code.len(),
            hasher.finish()
        )
    }

    pub fn get(&self, key: &str) -> Option<RawModelResponse> {
        let corrupt = match self.entries.get(key) {
            Some(entry) if entry.key == key && !entry.value.text.trim().is_empty() => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if corrupt {
            log::warn!("🗃️ Dropping unusable cache entry {}", key);
            self.remove(key);
        }
        None
    }

    pub fn put(&self, key: String, value: RawModelResponse) {
        let inserted_at = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut order = match self.order.lock() {
            Ok(order) => order,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(mut existing) = self.entries.get_mut(&key) {
            existing.value = value;
            existing.inserted_at = inserted_at;
            return;
        }

        while order.len() >= self.capacity {
            match order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    log::debug!("🗃️ Evicted oldest cache entry {}", oldest);
                }
                None => break,
            }
        }

        order.push_back(key.clone());
        self.entries.insert(key.clone(), CacheEntry { key, value, inserted_at });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&self, key: &str) {
        let mut order = match self.order.lock() {
            Ok(order) => order,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.entries.remove(key);
        order.retain(|queued| queued != key);
    }

    #[cfg(test)]
    fn insert_raw(&self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
        if let Ok(mut order) = self.order.lock() {
            order.push_back(key.to_string());
        }
    }
}
