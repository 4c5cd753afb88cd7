//! Spot service: use-cases for managing parking spots.

use spothub_domain::error::SpotHubError;
use spothub_domain::id::SpotId;
use spothub_domain::record::Keyed;
use spothub_domain::spot::Spot;

use crate::ports::{SpotMap, SpotRepository};

/// Application service for spot operations.
pub struct SpotService<R> {
    repo: R,
}

impl<R: SpotRepository> SpotService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every spot keyed by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_spots(&self) -> Result<SpotMap, SpotHubError> {
        self.repo.get_all().await
    }

    /// Look up a spot by id. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_spot(&self, id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
        self.repo.get_by_id(id).await
    }

    /// Store a new spot and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_spot(&self, spot: Spot) -> Result<Keyed<SpotId, Spot>, SpotHubError> {
        let created = self.repo.create(spot).await?;
        tracing::info!(spot_id = %created.id, "spot created");
        Ok(created)
    }

    /// Delete a spot, returning the removed record if it existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_spot(&self, id: &SpotId) -> Result<Option<Spot>, SpotHubError> {
        let removed = self.repo.delete(id).await?;
        if removed.is_some() {
            tracing::info!(spot_id = %id, "spot deleted");
        } else {
            tracing::debug!(spot_id = %id, "delete requested for unknown spot");
        }
        Ok(removed)
    }

    /// Spots located in exactly `zipcode`, as `(id, spot)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn spots_in_zipcode(
        &self,
        zipcode: &str,
    ) -> Result<Vec<(SpotId, Spot)>, SpotHubError> {
        self.repo.find_by_zipcode(zipcode).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySpotRepo {
        store: Mutex<(u64, SpotMap)>,
    }

    impl SpotRepository for InMemorySpotRepo {
        fn create(
            &self,
            spot: Spot,
        ) -> impl Future<Output = Result<Keyed<SpotId, Spot>, SpotHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.0 += 1;
            let id = SpotId::from_sequence(store.0);
            store.1.insert(id.clone(), spot.clone());
            async { Ok(Keyed::new(id, spot)) }
        }

        fn get_by_id(
            &self,
            id: &SpotId,
        ) -> impl Future<Output = Result<Option<Spot>, SpotHubError>> + Send {
            let result = self.store.lock().unwrap().1.get(id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<SpotMap, SpotHubError>> + Send {
            let result = self.store.lock().unwrap().1.clone();
            async { Ok(result) }
        }

        fn find_by_zipcode(
            &self,
            zipcode: &str,
        ) -> impl Future<Output = Result<Vec<(SpotId, Spot)>, SpotHubError>> + Send {
            let result: Vec<_> = self
                .store
                .lock()
                .unwrap()
                .1
                .iter()
                .filter(|(_, spot)| spot.is_in_zipcode(zipcode))
                .map(|(id, spot)| (id.clone(), spot.clone()))
                .collect();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: &SpotId,
        ) -> impl Future<Output = Result<Option<Spot>, SpotHubError>> + Send {
            let result = self.store.lock().unwrap().1.remove(id);
            async { Ok(result) }
        }
    }

    fn make_service() -> SpotService<InMemorySpotRepo> {
        SpotService::new(InMemorySpotRepo::default())
    }

    fn spot_in(zipcode: &str) -> Spot {
        Spot::builder()
            .address("Batmans Cave")
            .zipcode(zipcode)
            .hour_price("75")
            .build()
    }

    #[tokio::test]
    async fn should_create_spot_with_generated_id() {
        let svc = make_service();

        let created = svc.create_spot(spot_in("72000")).await.unwrap();
        assert_eq!(created.id, SpotId::from_sequence(1));

        let fetched = svc.get_spot(&created.id).await.unwrap();
        assert_eq!(fetched, Some(spot_in("72000")));
    }

    #[tokio::test]
    async fn should_return_none_when_spot_missing() {
        let svc = make_service();
        let result = svc.get_spot(&SpotId::from_sequence(99)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_spots() {
        let svc = make_service();
        svc.create_spot(spot_in("0150")).await.unwrap();
        svc.create_spot(spot_in("5003")).await.unwrap();

        let all = svc.list_spots().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_delete_spot_and_return_it() {
        let svc = make_service();
        let created = svc.create_spot(spot_in("0150")).await.unwrap();

        let removed = svc.delete_spot(&created.id).await.unwrap();
        assert_eq!(removed, Some(created.value));
        assert!(svc.get_spot(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_deleting_missing_spot() {
        let svc = make_service();
        let removed = svc.delete_spot(&SpotId::from_sequence(7)).await.unwrap();
        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn should_filter_spots_by_exact_zipcode() {
        let svc = make_service();
        let oslo = svc.create_spot(spot_in("0150")).await.unwrap();
        svc.create_spot(spot_in("5003")).await.unwrap();
        svc.create_spot(spot_in("01500")).await.unwrap();

        let found = svc.spots_in_zipcode("0150").await.unwrap();
        assert_eq!(found, vec![(oslo.id, oslo.value)]);
    }
}
