use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Vocal confidence score, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Placeholder returned until real inference exists.
    pub const PLACEHOLDER: ConfidenceScore = ConfidenceScore(72.5);

    pub fn new(value: f64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(ConfidenceScore(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ConfidenceScore {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        ConfidenceScore::new(value).ok_or_else(|| {
            format!(
                "confidence score {} outside [{}, {}]",
                value,
                ConfidenceScore::MIN,
                ConfidenceScore::MAX
            )
        })
    }
}

impl From<ConfidenceScore> for f64 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

/// Result of analyzing one uploaded recording.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "session_id": "3f0c2a7e-5b1d-4c8e-9a6f-1d2e3b4c5d6e",
    "confidence_score": 75.5,
    "message": "Audio analysis completed successfully"
}))]
pub struct AnalysisResult {
    /// Unique identifier for the analysis session
    pub session_id: Uuid,
    /// Vocal confidence score from 0 to 100
    #[schema(value_type = f64, minimum = 0.0, maximum = 100.0)]
    pub confidence_score: ConfidenceScore,
    /// Human-readable message about the analysis result
    pub message: String,
}

/// Multipart body accepted by `POST /audio/analyze`. Only used for docs.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct AudioUploadForm {
    /// Audio file to analyze
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Pong {
    pub ping: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AudioServiceStatus {
    pub service: String,
    pub status: String,
    pub ml_model_loaded: bool,
    pub supported_formats: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    pub docs: String,
    pub health: String,
}
