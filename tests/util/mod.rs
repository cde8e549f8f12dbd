use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Reads a JSON response body into `T`
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
