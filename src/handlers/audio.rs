use crate::audio;
use crate::models::{AnalysisResult, AudioServiceStatus, AudioUploadForm, ConfidenceScore};
use crate::upload::{AudioUpload, MultipartUpload, UploadReadError};
use crate::{AppError, AppState, Result};
use axum::{
    extract::Multipart,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

const FILE_FIELD: &str = "file";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/audio/analyze", post(analyze_audio))
        .route("/audio/status", get(audio_service_status))
}

/// Analyze an uploaded recording and return a vocal confidence score.
///
/// The score is placeholder data until real inference is wired in.
#[utoipa::path(
    post,
    path = "/audio/analyze",
    tag = "audio",
    request_body(content = AudioUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Analysis result", body = AnalysisResult),
        (status = 400, description = "Uploaded file could not be read"),
        (status = 413, description = "Uploaded file exceeds the body limit"),
        (status = 422, description = "No file field in the form")
    )
)]
pub async fn analyze_audio(mut multipart: Multipart) -> Result<Json<AnalysisResult>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::from(UploadReadError::from(e)))?
    {
        // A part without a filename is a plain form value, not a file.
        if field.name() == Some(FILE_FIELD) && field.file_name().is_some() {
            return analyze_upload(MultipartUpload::new(field)).await.map(Json);
        }
        tracing::debug!(
            "Ignoring form field {:?} (filename {:?})",
            field.name(),
            field.file_name()
        );
    }

    Err(AppError::MissingField(FILE_FIELD.to_string()))
}

/// Produce an [`AnalysisResult`] for one upload. The upload is released
/// before this returns, on success and on failure.
pub async fn analyze_upload<U: AudioUpload>(mut upload: U) -> Result<AnalysisResult> {
    let filename = upload.file_name().unwrap_or_default().to_string();

    match upload.content_type() {
        Some(ct) if !audio::is_known_audio_content_type(ct) => {
            tracing::warn!("Accepting '{}' with unrecognised content type {}", filename, ct);
        }
        Some(_) => {}
        None => {
            tracing::debug!(
                "No content type declared for '{}' (guessed {:?})",
                filename,
                audio::guess_content_type(&filename)
            );
        }
    }

    let session_id = Uuid::new_v4();

    let contents = upload.read_all().await;
    drop(upload);
    let file_size = contents.map_err(AppError::from)?.len();

    let confidence_score = ConfidenceScore::PLACEHOLDER;
    tracing::info!(
        %session_id,
        file_size,
        score = confidence_score.value(),
        "Analyzed '{}'",
        filename
    );

    Ok(AnalysisResult {
        session_id,
        confidence_score,
        message: format!(
            "Audio file '{}' ({} bytes) analyzed successfully. \
             This is placeholder data - ML processing coming soon!",
            filename, file_size
        ),
    })
}

/// Report the capabilities of the audio analysis service.
#[utoipa::path(
    get,
    path = "/audio/status",
    tag = "audio",
    responses((status = 200, description = "Service capabilities", body = AudioServiceStatus))
)]
pub async fn audio_service_status() -> Json<AudioServiceStatus> {
    Json(AudioServiceStatus {
        service: "audio-analysis".to_string(),
        status: "operational".to_string(),
        ml_model_loaded: false,
        supported_formats: audio::SUPPORTED_AUDIO_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;
    use std::future::Future;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Fake upload that records when it is released.
    struct TrackedUpload {
        file_name: Option<String>,
        content_type: Option<String>,
        body: Option<std::result::Result<Bytes, String>>,
        released: Arc<AtomicBool>,
    }

    impl TrackedUpload {
        fn new(body: std::result::Result<&'static [u8], &str>) -> (Self, Arc<AtomicBool>) {
            let released = Arc::new(AtomicBool::new(false));
            let upload = TrackedUpload {
                file_name: Some("take1.wav".to_string()),
                content_type: Some("audio/wav".to_string()),
                body: Some(body.map(Bytes::from_static).map_err(str::to_string)),
                released: released.clone(),
            };
            (upload, released)
        }
    }

    impl Drop for TrackedUpload {
        fn drop(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    impl AudioUpload for TrackedUpload {
        fn file_name(&self) -> Option<&str> {
            self.file_name.as_deref()
        }

        fn content_type(&self) -> Option<&str> {
            self.content_type.as_deref()
        }

        fn read_all(
            &mut self,
        ) -> impl Future<Output = std::result::Result<Bytes, UploadReadError>> + Send {
            let body = self
                .body
                .take()
                .unwrap_or_else(|| Err("read twice".to_string()));
            std::future::ready(body.map_err(UploadReadError::Failed))
        }
    }

    #[tokio::test]
    async fn test_analyze_upload_reports_size_and_name() {
        let (upload, released) = TrackedUpload::new(Ok(b"0123456789".as_slice()));
        let result = analyze_upload(upload).await.unwrap();

        assert!(released.load(Ordering::SeqCst));
        assert_eq!(result.confidence_score, ConfidenceScore::PLACEHOLDER);
        assert!(result.message.contains("'take1.wav'"));
        assert!(result.message.contains("(10 bytes)"));
        assert_eq!(result.session_id.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_analyze_upload_read_failure_releases_upload() {
        let (upload, released) = TrackedUpload::new(Err("connection reset mid-stream"));
        let err = analyze_upload(upload).await.unwrap_err();

        assert!(released.load(Ordering::SeqCst));

        let response = err.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("connection reset mid-stream"));
    }

    #[tokio::test]
    async fn test_analyze_upload_accepts_unknown_or_missing_content_type() {
        for content_type in [Some("application/octet-stream"), None] {
            let (mut upload, _) = TrackedUpload::new(Ok(b"abc".as_slice()));
            upload.content_type = content_type.map(str::to_string);
            let result = analyze_upload(upload).await.unwrap();
            assert!(result.message.contains("(3 bytes)"));
        }
    }

    #[tokio::test]
    async fn test_analyze_upload_without_filename() {
        let (mut upload, _) = TrackedUpload::new(Ok(b"".as_slice()));
        upload.file_name = None;
        let result = analyze_upload(upload).await.unwrap();
        assert!(result.message.starts_with("Audio file '' (0 bytes)"));
    }

    #[tokio::test]
    async fn test_session_ids_are_unique() {
        let (first, _) = TrackedUpload::new(Ok(b"same".as_slice()));
        let (second, _) = TrackedUpload::new(Ok(b"same".as_slice()));
        let first = analyze_upload(first).await.unwrap();
        let second = analyze_upload(second).await.unwrap();
        assert_ne!(first.session_id, second.session_id);
    }

    #[tokio::test]
    async fn test_audio_service_status() {
        let Json(status) = audio_service_status().await;
        assert_eq!(status.service, "audio-analysis");
        assert_eq!(status.status, "operational");
        assert!(!status.ml_model_loaded);
        assert_eq!(
            status.supported_formats,
            vec!["wav", "mp3", "ogg", "webm", "m4a"]
        );
    }
}
