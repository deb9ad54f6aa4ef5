use crate::error::ServiceError;
use crate::models::{AnalysisResult, CoreWebVitals, PerformanceData, ScoreError, Scores};
use crate::utils::NormalizedUrl;
use futures::future::BoxFuture;
use futures::FutureExt;
use log::info;
use std::time::Duration;

/// Something that can audit a page for both device profiles.
///
/// This is the only seam between the session and whatever performs the
/// measurement. The bundled [`StubAnalysisService`] fakes it; a real
/// client plugs in here without the rest of the crate noticing.
pub trait AnalysisService: Send + Sync {
    fn analyze<'a>(
        &'a self,
        url: &'a NormalizedUrl,
    ) -> BoxFuture<'a, Result<AnalysisResult, ServiceError>>;
}

// Waits a fixed delay, then answers with the same canned audit for any URL
#[derive(Debug, Clone)]
pub struct StubAnalysisService {
    delay: Duration,
}

impl StubAnalysisService {
    pub fn new(delay: Duration) -> Self {
        StubAnalysisService { delay }
    }
}

impl AnalysisService for StubAnalysisService {
    fn analyze<'a>(
        &'a self,
        url: &'a NormalizedUrl,
    ) -> BoxFuture<'a, Result<AnalysisResult, ServiceError>> {
        async move {
            info!("Simulating analysis of {} ({:?})", url, self.delay);
            tokio::time::sleep(self.delay).await;
            sample_result(url.clone())
                .map_err(|e| ServiceError::InvalidResult(e.to_string()))
        }
        .boxed()
    }
}

/// The canned audit served by the stub.
pub fn sample_result(url: NormalizedUrl) -> Result<AnalysisResult, ScoreError> {
    let mobile = PerformanceData {
        scores: Scores::new(85, 92, 88, 90)?,
        core_web_vitals: CoreWebVitals {
            fcp: Some(1.2),
            lcp: Some(2.5),
            cls: Some(0.1),
            tbt: Some(150.0),
        },
        load_time: 3.2,
        suggestions: vec![
            "Optimize images by converting them to WebP format".to_string(),
            "Reduce unused JavaScript".to_string(),
            "Enable text compression".to_string(),
            "Minimize main thread work".to_string(),
        ],
    };
    let desktop = PerformanceData {
        scores: Scores::new(95, 94, 90, 92)?,
        core_web_vitals: CoreWebVitals {
            fcp: Some(0.8),
            lcp: Some(1.5),
            cls: Some(0.05),
            tbt: Some(50.0),
        },
        load_time: 1.8,
        suggestions: vec![
            "Serve static assets with an efficient cache policy".to_string(),
            "Reduce initial server response time".to_string(),
            "Avoid enormous network payloads".to_string(),
        ],
    };

    Ok(AnalysisResult {
        url,
        mobile,
        desktop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceProfile;
    use crate::utils::normalize_url;

    #[tokio::test(start_paused = true)]
    async fn stub_echoes_the_url_and_waits_out_its_delay() {
        let service = StubAnalysisService::new(Duration::from_millis(2000));
        let url = normalize_url("www.example.com");
        let started = tokio::time::Instant::now();

        let result = service.analyze(&url).await.unwrap();

        assert_eq!(result.url, url);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[test]
    fn sample_is_complete_for_both_profiles() {
        let result = sample_result(normalize_url("example.com")).unwrap();
        for device in DeviceProfile::ALL {
            let data = result.for_device(device);
            assert_eq!(data.scores.iter().count(), 4);
            assert!(data.scores.iter().all(|(_, s)| s.value() <= 100));
            assert!(data.load_time >= 0.0);
            assert!(!data.suggestions.is_empty());
        }
    }

    #[test]
    fn service_is_object_safe() {
        let service: Box<dyn AnalysisService> =
            Box::new(StubAnalysisService::new(Duration::ZERO));
        drop(service);
    }
}
