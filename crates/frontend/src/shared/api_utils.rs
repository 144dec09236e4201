//! Адрес REST API.
//!
//! В браузере нет файла конфигурации: базовый URL собирается из
//! `window.location` (протокол и хост страницы) и порта бэкенда.

/// Порт, на котором слушает REST API
pub const API_PORT: u16 = 3000;

/// Base URL like "http://localhost:3000"; empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&protocol, &hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn join_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}
