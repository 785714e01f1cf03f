//! Configuração carregada uma vez por sessão do navegador.
//!
//! O texto TOML vem de `BARBER_ADMIN_CONFIG` no momento da compilação, ou do
//! padrão embutido em `contracts`. Um arquivo inválido não derruba a
//! aplicação: registra o erro e segue com os valores padrão.

use contracts::shared::config::{parse_config, AppConfig, DEFAULT_CONFIG};
use once_cell::unsync::Lazy;

thread_local! {
    static CONFIG: Lazy<AppConfig> = Lazy::new(load);
}

fn load() -> AppConfig {
    let (source, text) = match option_env!("BARBER_ADMIN_CONFIG") {
        Some(text) => ("BARBER_ADMIN_CONFIG", text),
        None => ("embedded", DEFAULT_CONFIG),
    };

    match parse_config(text) {
        Ok(config) => {
            log::debug!("config loaded from {}: {:?}", source, config);
            config
        }
        Err(e) => {
            log::warn!("config from {} rejected ({}), using defaults", source, e);
            AppConfig::default()
        }
    }
}

pub fn app_config() -> AppConfig {
    CONFIG.with(|c| (**c).clone())
}

pub fn page_size() -> usize {
    CONFIG.with(|c| c.ui.page_size)
}

pub fn notification_poll_secs() -> u32 {
    CONFIG.with(|c| c.ui.notification_poll_secs)
}

pub fn analytics_days() -> u32 {
    CONFIG.with(|c| c.ui.analytics_days)
}
