use crate::host::ScoreTracker;

pub const SCORE_STORAGE_KEY: &str = "dq_score";

#[derive(Debug, Default, Clone)]
pub struct MemoryScore {
    value: u32,
}

impl ScoreTracker for MemoryScore {
    fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }
    fn get(&self) -> u32 {
        self.value
    }
    fn reset(&mut self) {
        self.value = 0;
    }
}

/// Score mirrored into localStorage so it survives a reload. Every game starts at zero, so
/// the stored value is only ever written, never read back.
#[derive(Debug, Clone, Default)]
pub struct StorageScore {
    value: u32,
}

impl StorageScore {
    fn persist(&self) {
        let Some(store) = crate::util::local_storage() else {
            log::warn!("no localStorage, score {} not persisted", self.value);
            return;
        };
        if store.set_item(SCORE_STORAGE_KEY, &self.value.to_string()).is_err() {
            log::warn!("failed to write {SCORE_STORAGE_KEY}");
        }
    }
}

impl ScoreTracker for StorageScore {
    fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        self.persist();
    }
    fn get(&self) -> u32 {
        self.value
    }
    fn reset(&mut self) {
        self.value = 0;
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_score_counts_and_resets() {
        let mut s = MemoryScore::default();
        s.increment();
        s.increment();
        assert_eq!(s.get(), 2);
        s.reset();
        assert_eq!(s.get(), 0);
    }

    #[test]
    fn storage_score_starts_each_session_at_zero() {
        assert_eq!(StorageScore::default().get(), 0);
    }
}
