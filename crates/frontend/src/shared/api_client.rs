//! Cliente REST compartilhado por todas as páginas.
//!
//! Toda requisição leva `Authorization: Bearer <token>` quando há sessão.
//! Uma resposta 401 encerra a sessão local (storage + estado de auth), o que
//! faz a casca voltar para a tela de login.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::{api_url, with_query};
use crate::system::auth::{context::expire_session, storage};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    #[error("Erro {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),
    #[error("Resposta inesperada do servidor: {0}")]
    Parse(String),
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Mensagem legível de um corpo de erro: `message` ou `error` do objeto
/// JSON, senão o texto cru, senão `HTTP {status}`.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(obj)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = obj.get(key).and_then(|v| v.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.trim().to_string();
                }
            }
        }
    }
    let text = body.trim();
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        text.to_string()
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        log::warn!("401 from {}, ending session", response.url());
        expire_session();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: error_message(status, &body),
        });
    }
    Ok(response)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = authorized(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request: Request = authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    read_json(response).await
}

/// GET com parâmetros serializados por `serde_qs`; campos `None` não entram.
pub async fn get_json_with_query<Q, T>(path: &str, query: &Q) -> Result<T, ApiError>
where
    Q: Serialize,
    T: DeserializeOwned,
{
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    get_json(&with_query(path, &qs)).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = send_json(Request::post(&api_url(path)), body).await?;
    read_json(response).await
}

/// POST sem corpo; a resposta é descartada.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    send(Request::post(&api_url(path))).await.map(|_| ())
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = send_json(Request::put(&api_url(path)), body).await?;
    read_json(response).await
}

pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::patch(&api_url(path)), body)
        .await
        .map(|_| ())
}

pub async fn patch_empty(path: &str) -> Result<(), ApiError> {
    send(Request::patch(&api_url(path))).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Request::delete(&api_url(path))).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_fields() {
        assert_eq!(error_message(422, r#"{"message":"CPF já cadastrado"}"#), "CPF já cadastrado");
        assert_eq!(error_message(400, r#"{"error":"invalid plan"}"#), "invalid plan");
    }

    #[test]
    fn test_error_message_falls_back() {
        assert_eq!(error_message(500, "  boom  "), "boom");
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(404, r#"{"message":""}"#), r#"{"message":""}"#);
    }

    #[test]
    fn test_api_error_display() {
        let e = ApiError::Http {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(e.to_string(), "Erro 404: not found");
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Sessão expirada. Faça login novamente."
        );
    }
}
