use async_trait::async_trait;

use crate::types::{ArtistEntry, Schedule};

/// Storage behind the write actions of `POST /api/spotify`.
///
/// Implementations must be shareable across concurrent requests.
#[async_trait]
pub trait Store: Send + Sync {
    /// Starts monitoring `entry.artist`.
    ///
    /// # Errors
    ///
    /// The message is logged and the caller receives an opaque 500.
    async fn add_artist(&self, entry: ArtistEntry) -> Result<(), String>;

    /// Stops monitoring `entry.artist`. Removing an unknown artist is not an
    /// error.
    async fn remove_artist(&self, entry: ArtistEntry) -> Result<(), String>;

    /// Replaces the check schedule.
    async fn update_schedule(&self, schedule: Schedule) -> Result<(), String>;
}

/// Accepts every mutation and keeps nothing.
///
/// Monitored artists and the schedule have no backing store yet; the write
/// actions acknowledge the request without changing any state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

#[async_trait]
impl Store for NoopStore {
    async fn add_artist(&self, _entry: ArtistEntry) -> Result<(), String> {
        Ok(())
    }

    async fn remove_artist(&self, _entry: ArtistEntry) -> Result<(), String> {
        Ok(())
    }

    async fn update_schedule(&self, _schedule: Schedule) -> Result<(), String> {
        Ok(())
    }
}
