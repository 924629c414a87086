use std::sync::Arc;

use tracing::{info, instrument};

use rd_core::geo::GeoPoint;
use rd_core::ports::{FetchError, ReferralSourceRepositoryPort};
use rd_core::referral::ReferralSource;

const SCAN_BATCH: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyOffice {
    pub source: ReferralSource,
    pub distance_km: f64,
}

/// Lists partner offices within a radius of a point, closest first.
///
/// Sources without a location are skipped. Equal distances are ordered by
/// name so the output is stable.
pub struct ListNearbyOffices {
    repo: Arc<dyn ReferralSourceRepositoryPort>,
}

impl ListNearbyOffices {
    pub fn new(repo: Arc<dyn ReferralSourceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[instrument(name = "usecase.list_nearby_offices.execute", skip(self))]
    pub async fn execute(
        &self,
        origin: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<NearbyOffice>, FetchError> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(FetchError::validation(format!(
                "radius must be a non-negative number of kilometres, got {radius_km}"
            )));
        }

        let mut nearby = Vec::new();
        let mut offset = 0;
        loop {
            let batch = self.repo.list_sources(SCAN_BATCH, offset).await?;
            let fetched = batch.len();
            offset += fetched;

            nearby.extend(batch.into_iter().filter_map(|source| {
                let distance_km = source.location?.distance_km(&origin);
                (distance_km <= radius_km).then_some(NearbyOffice {
                    source,
                    distance_km,
                })
            }));

            if fetched < SCAN_BATCH {
                break;
            }
        }

        nearby.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.source.name.cmp(&b.source.name))
        });

        info!(scanned = offset, matched = nearby.len(), "nearby offices listed");
        Ok(nearby)
    }
}
