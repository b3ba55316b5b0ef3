//! Encoding API handlers.
//!
//! Accepts a raw RGBA buffer plus selectors and returns the generated
//! source together with the packed sequence.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::codegen::{self, EmitOptions, Generated};
use crate::error::SpritepackError;
use crate::mode::{DrawMode, ElementType, OutputFormat};
use crate::pack::Packed;

use super::super::state::AppState;

/// Request body for the encode endpoints.
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    /// Asset name (sanitized into an identifier).
    pub name: String,
    pub width: usize,
    pub height: usize,
    /// Interleaved `r, g, b, a` bytes, row-major.
    pub rgba: Vec<u8>,
    /// Canonical name or alias, e.g. "HORIZONTAL_1BIT" or "rgb565".
    pub draw_mode: String,
    pub output_format: String,
    #[serde(default)]
    pub include_sketch: bool,
}

/// Response body for POST /api/encode.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub success: bool,
    pub identifier: String,
    pub filename: String,
    pub draw_mode: DrawMode,
    pub output_format: OutputFormat,
    pub width: usize,
    pub height: usize,
    pub element_type: ElementType,
    pub packed: Packed,
    pub code: String,
}

impl From<Generated> for EncodeResponse {
    fn from(g: Generated) -> Self {
        Self {
            success: true,
            element_type: g.packed.element_type(),
            identifier: g.identifier,
            filename: g.filename,
            draw_mode: g.draw_mode,
            output_format: g.output_format,
            width: g.width,
            height: g.height,
            packed: g.packed,
            code: g.code,
        }
    }
}

/// Response body for GET /api/modes.
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub draw_modes: Vec<DrawMode>,
    pub output_formats: Vec<OutputFormat>,
}

/// Error wrapper mapping crate errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub SpritepackError);

impl From<SpritepackError> for ApiError {
    fn from(e: SpritepackError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SpritepackError::BufferLengthMismatch { .. }
            | SpritepackError::InvalidDimensions { .. }
            | SpritepackError::DimensionsTooLarge { .. }
            | SpritepackError::UnsupportedDrawMode(_)
            | SpritepackError::UnsupportedOutputFormat(_)
            | SpritepackError::UnsupportedCombination { .. } => StatusCode::BAD_REQUEST,
            SpritepackError::ElementTypeMismatch { .. }
            | SpritepackError::BatchFailed { .. }
            | SpritepackError::Image(_)
            | SpritepackError::Server(_)
            | SpritepackError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = status.as_u16(), error = %self.0, "encode request failed");
        (
            status,
            Json(json!({ "success": false, "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Parse selectors and run the encoder off the async runtime.
async fn run_encode(state: &AppState, req: EncodeRequest) -> Result<Generated, ApiError> {
    let max = state.config.max_dimension;
    if req.width > max || req.height > max {
        return Err(SpritepackError::DimensionsTooLarge {
            width: req.width,
            height: req.height,
            max,
        }
        .into());
    }

    let draw_mode: DrawMode = req.draw_mode.parse()?;
    let output_format: OutputFormat = req.output_format.parse()?;
    let options = EmitOptions {
        values_per_line: state.config.values_per_line,
        include_sketch: req.include_sketch,
        ..Default::default()
    };

    let generated = tokio::task::spawn_blocking(move || {
        codegen::generate_from_rgba(
            &req.name,
            req.width,
            req.height,
            &req.rgba,
            draw_mode,
            output_format,
            options,
        )
    })
    .await
    .map_err(|e| SpritepackError::Server(format!("Task error: {}", e)))??;

    Ok(generated)
}

/// Handle GET /api/modes - list selectors.
pub async fn modes() -> Json<ModesResponse> {
    Json(ModesResponse {
        draw_modes: DrawMode::ALL.to_vec(),
        output_formats: OutputFormat::ALL.to_vec(),
    })
}

/// Handle POST /api/encode - generate source and packed data as JSON.
pub async fn encode(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let generated = run_encode(&state, req).await?;
    tracing::info!(
        identifier = %generated.identifier,
        draw_mode = %generated.draw_mode,
        output_format = %generated.output_format,
        "encoded asset"
    );
    Ok(Json(generated.into()))
}

/// Handle POST /api/encode/header - download the generated `.h` file.
pub async fn header_file(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EncodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let generated = run_encode(&state, req).await?;
    let disposition = format!("attachment; filename=\"{}\"", generated.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/x-c; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        generated.code,
    ))
}
