use shared_types::{
    ApiConfig, AppError, Consultation, ConsultationListQuery, ConsultationListResponse, Viewer,
};

/// Path of the listing endpoint, relative to the configured base URL.
pub const CONSULTATIONS_PATH: &str = "/api/consultations";

/// HTTP client for the consultations backend.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its pool.
#[derive(Clone, Debug)]
pub struct ConsultationClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl ConsultationClient {
    pub fn new(api: ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(api.timeout_secs));

        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build configured HTTP client, using defaults");
            reqwest::Client::new()
        });

        Self { http, api }
    }

    /// `GET /api/consultations?userId=&userRole=` for the given viewer.
    ///
    /// Non-2xx responses and undecodable bodies are errors. A body without a
    /// `consultations` field is an empty list.
    pub async fn list_consultations(&self, viewer: &Viewer) -> Result<Vec<Consultation>, AppError> {
        let url = self.api.endpoint(CONSULTATIONS_PATH);
        let query = ConsultationListQuery::from(viewer);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status.as_u16(), &body));
        }

        let body: ConsultationListResponse = response
            .json()
            .await
            .map_err(|e| AppError::decode(e.to_string()))?;

        Ok(body.consultations)
    }
}
