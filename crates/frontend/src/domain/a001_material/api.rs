use contracts::domain::a001_material::aggregate::{
    Material, MaterialDraft, MaterialId, MaterialListResponse, MaterialResponse,
};
use contracts::shared::api_error::ErrorResponse;
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::api_url;

const MATERIALS_PATH: &str = "/api/materials";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("-"))]
    Http { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Сообщение, присланное сервером в теле ошибки (`message`)
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

fn material_url(id: MaterialId) -> String {
    api_url(&format!("{}/{}", MATERIALS_PATH, id))
}

/// Turn a non-2xx response into `ApiError::Http`, keeping the server message.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: ErrorResponse::message_from_body(&body),
    })
}

/// GET /api/materials
pub async fn fetch_materials() -> Result<Vec<Material>, ApiError> {
    let response = Request::get(&api_url(MATERIALS_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response).await?;

    let result: MaterialListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(result.materials)
}

/// POST /api/materials
pub async fn create_material(draft: &MaterialDraft) -> Result<Material, ApiError> {
    let response = Request::post(&api_url(MATERIALS_PATH))
        .header("Accept", "application/json")
        .json(draft)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response).await?;

    let result: MaterialResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(result.material)
}

/// PUT /api/materials/{id}
pub async fn update_material(id: MaterialId, material: &Material) -> Result<Material, ApiError> {
    let response = Request::put(&material_url(id))
        .header("Accept", "application/json")
        .json(material)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response).await?;

    let result: MaterialResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(result.material)
}

/// DELETE /api/materials/{id}
pub async fn delete_material(id: MaterialId) -> Result<(), ApiError> {
    let response = Request::delete(&material_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await?;
    Ok(())
}
