//! HTTP routes. The predict route decodes the upload, optionally
//! persists it, and runs the classification pipeline on the blocking
//! pool so inference never stalls the async executor.

use super::protocol;
use super::{AppState, WebError};
use actix_web::{get, post, web, HttpResponse, Responder};
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;
use tracing::{info, warn};

type Result<T> = std::result::Result<T, WebError>;

/// Handle an image classification request
#[post("/predict")]
pub async fn predict(
    req: web::Json<protocol::B64Image>,
    state: web::Data<AppState>,
) -> Result<impl Responder> {
    let req = req.into_inner();
    let bytes = general_purpose::STANDARD.decode(req.image)?;

    if let Some(dir) = &state.settings.upload_dir {
        save_upload(dir, req.filename.as_deref(), &bytes).await;
    }

    let classifier = state.classifier.clone();
    let label = web::block(move || classifier.classify_image(&bytes)).await??;

    info!("classified upload as {label:?}");

    Ok(web::Json(protocol::Prediction { label }))
}

/// Service info: model artifact and label table
#[get("/")]
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    web::Json(protocol::ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        model: state.settings.model_path.clone(),
        labels: state.classifier.labels().to_vec(),
    })
}

/// Liveness probe
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json("ok")
}

/// Keep only the final path component so an upload cannot escape the
/// upload directory
fn sanitize_filename(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// Best-effort persistence of the raw upload; a failed write must not
/// fail the prediction
async fn save_upload(dir: &str, filename: Option<&str>, bytes: &[u8]) {
    let name = filename
        .and_then(sanitize_filename)
        .unwrap_or_else(|| "upload".to_string());
    let path = Path::new(dir).join(name);
    if let Err(e) = tokio::fs::write(&path, bytes).await {
        warn!("failed to persist upload to {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::config::CLASS_LABELS;
    use crate::model::Model;
    use crate::settings::Settings;
    use crate::util::test::solid_png;
    use actix_web::{test, App};
    use ndarray::Array4;
    use std::sync::Arc;

    struct StubModel(Vec<f32>);

    impl Model for StubModel {
        fn infer(&self, _input: &Array4<f32>) -> crate::Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    fn test_state(scores: Vec<f32>) -> web::Data<AppState> {
        let labels = CLASS_LABELS.iter().map(|l| l.to_string()).collect();
        let classifier = Classifier::new(Arc::new(StubModel(scores)), labels);
        web::Data::new(AppState {
            classifier: Arc::new(classifier),
            settings: Settings {
                port: 0,
                model_path: "stub.pt".to_string(),
                upload_dir: None,
            },
        })
    }

    #[actix_web::test]
    async fn test_predict_returns_winning_label() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![0.1, 0.2, 0.6, 0.1]))
                .service(predict),
        )
        .await;

        let image = general_purpose::STANDARD.encode(solid_png(32, 32, [5, 6, 7]));
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({ "image": image }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["label"], "no tumor");
    }

    #[actix_web::test]
    async fn test_predict_rejects_invalid_base64() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![1.0, 0.0, 0.0, 0.0]))
                .service(predict),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({ "image": "%%% not base64 %%%" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_predict_rejects_non_image_payload() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![1.0, 0.0, 0.0, 0.0]))
                .service(predict),
        )
        .await;

        let image = general_purpose::STANDARD.encode(b"garbage bytes");
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({ "image": image }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_index_lists_labels() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![1.0, 0.0, 0.0, 0.0]))
                .service(index),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["labels"][2], "no tumor");
        assert_eq!(body["model"], "stub.pt");
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
