use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_client::error_message;
use crate::shared::api_utils::api_url;

/// Login com e-mail e senha.
///
/// Não passa pelo `api_client`: aqui um 401 significa credenciais
/// inválidas, não sessão expirada.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Falha de comunicação com o servidor: {}", e))?;

    match response.status() {
        401 | 403 => return Err("E-mail ou senha inválidos".to_string()),
        status if !response.ok() => {
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }
        _ => {}
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
