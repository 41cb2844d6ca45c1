//! The user-facing JSON web server that listens for classification
//! requests. This is the "front end"; the pipeline itself lives in
//! [`crate::preprocess`] and [`crate::classifier`].

use crate::classifier::Classifier;
use crate::error::Error;
use crate::settings::Settings;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::Arc;

mod protocol;
pub mod routes;

/// Per-process shared state: the classifier (model + label table) and
/// the runtime settings. Read-only after startup.
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub settings: Settings,
}

#[derive(Debug)]
pub struct WebError {
    err: anyhow::Error,
    status: StatusCode,
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl actix_web::error::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let err = HashMap::from([("errors", vec![self.to_string()])]);

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err)
    }

    fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for WebError {
    fn from(err: Error) -> WebError {
        // A bad upload is the client's fault; everything else is ours
        let status = match err {
            Error::Decode(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        WebError {
            err: anyhow!(err),
            status,
        }
    }
}

impl From<base64::DecodeError> for WebError {
    fn from(err: base64::DecodeError) -> Self {
        WebError {
            err: anyhow!(err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<actix_web::error::BlockingError> for WebError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        WebError {
            err: anyhow!(err),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
