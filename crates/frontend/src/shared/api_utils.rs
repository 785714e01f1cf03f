//! Montagem de URLs da API.

use super::config::app_config;

/// Base das requisições.
///
/// Usa `api.base_url` da configuração quando preenchida. Senão a URL é
/// montada a partir da localização da janela e de `api.fallback_port`.
///
/// Exemplos: `"https://api.barbearia.com"`, `"http://localhost:3333"`.
pub fn api_base() -> String {
    let config = app_config();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.api.base_url,
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config.api_base(&protocol, &hostname)
}

/// URL completa a partir de um caminho.
///
/// ```rust,ignore
/// let url = api_url("/customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Anexa uma query string já serializada; query vazia não acrescenta nada.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Id escapado para entrar como segmento de caminho (`/plans/{id}`).
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/plans", ""), "/plans");
        assert_eq!(with_query("/customers", "page=1&limit=20"), "/customers?page=1&limit=20");
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("sub-42"), "sub-42");
        assert_eq!(path_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(path_segment("x y#1"), "x%20y%231");
        assert_eq!(
            format!("/subscriptions/{}/cancel", path_segment("../admin")),
            "/subscriptions/..%2Fadmin/cancel"
        );
    }
}
