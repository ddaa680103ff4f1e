use crate::error::{StorefrontError, StorefrontResult};
use async_trait::async_trait;
use catalog_service::{Catalog, MedicineRecord};
use config_engine::LatencyConfig;
use diagnosis_service::{DiagnosisClassifier, DiagnosisResult, SymptomReport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Remote pharmacy operations used by the storefront pages
#[async_trait]
pub trait PharmacyApi: Send + Sync {
    /// Whole catalog in catalog order
    async fn fetch_medicines(&self) -> StorefrontResult<Vec<MedicineRecord>>;

    /// Case-insensitive substring search over name, description and category
    async fn search_medicines(&self, query: &str) -> StorefrontResult<Vec<MedicineRecord>>;

    async fn get_medicine(&self, id: &str) -> StorefrontResult<Option<MedicineRecord>>;

    async fn analyze_symptoms(&self, report: &SymptomReport) -> StorefrontResult<DiagnosisResult>;
}

/// In-process pharmacy backed by the fixed catalog and the rule classifier.
///
/// Every call sleeps for its configured latency first. While offline every
/// call fails with a transport error after the same delay.
pub struct MockPharmacyApi {
    catalog: Arc<Catalog>,
    classifier: DiagnosisClassifier,
    latency: LatencyConfig,
    offline: AtomicBool,
}

impl MockPharmacyApi {
    pub fn new(catalog: Arc<Catalog>, latency: LatencyConfig) -> Self {
        Self {
            classifier: DiagnosisClassifier::new(Arc::clone(&catalog)),
            catalog,
            latency,
            offline: AtomicBool::new(false),
        }
    }

    /// Built-in catalog, no artificial delay
    pub fn instant() -> Self {
        Self::new(Arc::new(Catalog::new()), LatencyConfig::none())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    async fn round_trip(&self, delay: Duration, operation: &str) -> StorefrontResult<()> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline() {
            return Err(StorefrontError::Transport(format!("{} failed: pharmacy offline", operation)));
        }
        Ok(())
    }
}

impl Default for MockPharmacyApi {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::new()), LatencyConfig::default())
    }
}

#[async_trait]
impl PharmacyApi for MockPharmacyApi {
    #[instrument(skip(self))]
    async fn fetch_medicines(&self) -> StorefrontResult<Vec<MedicineRecord>> {
        self.round_trip(self.latency.fetch(), "fetch_medicines").await?;
        Ok(self.catalog.all().to_vec())
    }

    #[instrument(skip(self))]
    async fn search_medicines(&self, query: &str) -> StorefrontResult<Vec<MedicineRecord>> {
        self.round_trip(self.latency.search(), "search_medicines").await?;
        let results = self.catalog.search(query);
        debug!(matches = results.len(), "search complete");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_medicine(&self, id: &str) -> StorefrontResult<Option<MedicineRecord>> {
        self.round_trip(self.latency.detail(), "get_medicine").await?;
        Ok(self.catalog.get(id).cloned())
    }

    #[instrument(skip(self, report), fields(symptoms = report.symptoms.len()))]
    async fn analyze_symptoms(&self, report: &SymptomReport) -> StorefrontResult<DiagnosisResult> {
        self.round_trip(self.latency.diagnosis(), "analyze_symptoms").await?;
        Ok(self.classifier.classify(report))
    }
}
