//! In-memory implementation of [`SpotRepository`].

use spothub_app::ports::{SpotMap, SpotRepository};
use spothub_domain::error::SpotHubError;
use spothub_domain::id::SpotId;
use spothub_domain::record::Keyed;
use spothub_domain::spot::Spot;

use crate::table::Table;

/// Spot table held in process memory.
#[derive(Default)]
pub struct MemorySpotRepository {
    table: Table<SpotId, Spot>,
}

impl MemorySpotRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `spot` under a caller-chosen id, replacing any previous record.
    ///
    /// Bypasses id generation; meant for fixtures and tests.
    pub async fn insert_with_id(&self, id: SpotId, spot: Spot) -> Option<Spot> {
        self.table.insert_with_id(id, spot).await
    }
}

impl SpotRepository for MemorySpotRepository {
    async fn create(&self, spot: Spot) -> Result<Keyed<SpotId, Spot>, SpotHubError> {
        Ok(self.table.insert(spot).await)
    }

    async fn get_by_id(&self, id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
        Ok(self.table.get(id).await)
    }

    async fn get_all(&self) -> Result<SpotMap, SpotHubError> {
        Ok(self.table.all().await)
    }

    async fn find_by_zipcode(&self, zipcode: &str) -> Result<Vec<(SpotId, Spot)>, SpotHubError> {
        Ok(self.table.filter(|spot| spot.is_in_zipcode(zipcode)).await)
    }

    async fn delete(&self, id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
        Ok(self.table.remove(id).await)
    }
}
