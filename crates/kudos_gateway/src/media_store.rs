//! In-memory per-user media cache with a retention window.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub mime_type: String,
    pub data: Arc<Vec<u8>>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Uploaded media per user. Entries older than the retention window are
/// pruned on upload, on read and by [`MediaStore::sweep`].
pub struct MediaStore {
    entries: RwLock<HashMap<String, Vec<MediaEntry>>>,
    retention: Duration,
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn cutoff(now: i64, window: Duration) -> i64 {
    now.saturating_sub(window.as_millis().min(i64::MAX as u128) as i64)
}

impl MediaStore {
    pub fn new(retention: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            retention,
        }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub async fn put(&self, user_id: &str, data: Vec<u8>, mime_type: &str) -> MediaEntry {
        self.put_at(user_id, data, mime_type, now_ms()).await
    }

    /// Append an entry stamped `now` and drop this user's expired entries.
    pub async fn put_at(
        &self,
        user_id: &str,
        data: Vec<u8>,
        mime_type: &str,
        now: i64,
    ) -> MediaEntry {
        let entry = MediaEntry {
            mime_type: mime_type.to_string(),
            data: Arc::new(data),
            timestamp: now,
        };
        let oldest = cutoff(now, self.retention);

        let mut map = self.entries.write().await;
        let list = map.entry(user_id.to_string()).or_default();
        list.push(entry.clone());
        list.retain(|e| e.timestamp > oldest);
        tracing::debug!("Stored media for {} ({} kept)", user_id, list.len());
        entry
    }

    /// Entries for `user_id` uploaded within `within` of now, oldest first.
    pub async fn get_recent(&self, user_id: &str, within: Duration) -> Vec<MediaEntry> {
        self.get_recent_at(user_id, within, now_ms()).await
    }

    /// Drops this user's expired entries before filtering by `within`.
    pub async fn get_recent_at(&self, user_id: &str, within: Duration, now: i64) -> Vec<MediaEntry> {
        let oldest = cutoff(now, self.retention);
        let newest_wanted = cutoff(now, within);

        let mut map = self.entries.write().await;
        let Some(list) = map.get_mut(user_id) else {
            return Vec::new();
        };
        list.retain(|e| e.timestamp > oldest);
        let recent: Vec<MediaEntry> = list
            .iter()
            .filter(|e| e.timestamp > newest_wanted)
            .cloned()
            .collect();
        if list.is_empty() {
            map.remove(user_id);
        }
        recent
    }

    pub async fn sweep(&self) -> usize {
        self.sweep_at(now_ms()).await
    }

    /// Remove every expired entry and every user left with none.
    /// Returns the number of entries removed.
    pub async fn sweep_at(&self, now: i64) -> usize {
        let oldest = cutoff(now, self.retention);
        let mut map = self.entries.write().await;
        let mut removed = 0;
        map.retain(|_, list| {
            let before = list.len();
            list.retain(|e| e.timestamp > oldest);
            removed += before - list.len();
            !list.is_empty()
        });
        if removed > 0 {
            tracing::debug!("Swept {} expired media entries", removed);
        }
        removed
    }

    /// Sweep every `period` until the store is dropped.
    pub fn spawn_sweeper(store: Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let weak = Arc::downgrade(&store);
        drop(store);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = weak.upgrade() else {
                    break;
                };
                store.sweep().await;
            }
        })
    }

    /// Bytes currently held across all users.
    pub async fn bytes_held(&self) -> usize {
        let map = self.entries.read().await;
        map.values().flatten().map(|e| e.data.len()).sum()
    }

    /// Number of users with stored media.
    pub async fn user_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);
    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MediaStore::new(DAY);
        store.put_at("alice", vec![1, 2, 3], "image/png", 1_000).await;
        let recent = store.get_recent_at("alice", DAY, 2_000).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].mime_type, "image/png");
        assert_eq!(recent[0].data.as_slice(), &[1, 2, 3]);
        assert_eq!(recent[0].timestamp, 1_000);
        assert!(store.get_recent_at("bob", DAY, 2_000).await.is_empty());
    }

    #[tokio::test]
    async fn test_put_prunes_expired_entries() {
        let store = MediaStore::new(DAY);
        let t0 = 100 * HOUR_MS;
        store.put_at("alice", vec![0], "image/jpeg", t0).await;
        store.put_at("alice", vec![1], "image/jpeg", t0 + 2 * HOUR_MS).await;
        store.put_at("alice", vec![2], "video/mp4", t0 + 25 * HOUR_MS).await;

        // Even with a huge query window, the first upload is gone.
        let all = store
            .get_recent_at("alice", Duration::from_secs(u32::MAX as u64), t0 + 25 * HOUR_MS)
            .await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].data.as_slice(), &[1]);
        assert_eq!(all[1].mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn test_get_recent_filters_by_window() {
        let store = MediaStore::new(DAY);
        let t0 = 10 * HOUR_MS;
        store.put_at("alice", vec![], "image/png", t0).await;
        store.put_at("alice", vec![], "image/png", t0 + 3 * HOUR_MS).await;

        let last_two_hours = store
            .get_recent_at("alice", Duration::from_secs(2 * 3600), t0 + 4 * HOUR_MS)
            .await;
        assert_eq!(last_two_hours.len(), 1);
        assert_eq!(last_two_hours[0].timestamp, t0 + 3 * HOUR_MS);
    }

    #[tokio::test]
    async fn test_user_count_and_concurrent_puts() {
        let store = Arc::new(MediaStore::new(DAY));
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let user = if i % 2 == 0 { "even" } else { "odd" };
                store.put(user, vec![i as u8], "image/png").await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.user_count().await, 2);
        assert_eq!(store.get_recent("even", DAY).await.len(), 8);
        assert_eq!(store.get_recent("odd", DAY).await.len(), 8);
    }

    #[tokio::test]
    async fn test_read_after_retention_releases_bytes() {
        let store = MediaStore::new(DAY);
        store.put_at("alice", vec![0u8; 1_000_000], "image/png", 0).await;
        assert_eq!(store.bytes_held().await, 1_000_000);

        let ten_days = 10 * 24 * HOUR_MS;
        assert!(store.get_recent_at("alice", DAY, ten_days).await.is_empty());
        assert_eq!(store.bytes_held().await, 0);
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_sweep_drops_expired_users() {
        let store = MediaStore::new(DAY);
        store.put_at("alice", vec![1; 10], "image/png", 0).await;
        store.put_at("bob", vec![2; 10], "image/png", 20 * HOUR_MS).await;

        assert_eq!(store.sweep_at(25 * HOUR_MS).await, 1);
        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.bytes_held().await, 10);
        assert_eq!(store.get_recent_at("bob", DAY, 25 * HOUR_MS).await.len(), 1);

        assert_eq!(store.sweep_at(25 * HOUR_MS).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_stops_when_store_dropped() {
        let store = Arc::new(MediaStore::new(DAY));
        let handle = MediaStore::spawn_sweeper(store.clone(), Duration::from_secs(60));
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(!handle.is_finished());

        drop(store);
        tokio::time::sleep(Duration::from_secs(120)).await;
        handle.await.unwrap();
    }
}
