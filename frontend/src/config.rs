use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_RESET_ENDPOINT: &str = "https://blowdrop-api-vercel-v1.vercel.app/api/reset-pwd";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub reset_endpoint: Option<String>,
}

impl RuntimeConfig {
    /// Returns the configured endpoint, ignoring blank values.
    pub fn endpoint(&self) -> Option<String> {
        normalize_endpoint(self.reset_endpoint.as_deref())
    }
}

static RESET_ENDPOINT: OnceLock<String> = OnceLock::new();

fn normalize_endpoint(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
            .and_then(|v| normalize_endpoint(Some(&v)))
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__RESET_PORTAL_ENV comes from an optional env.js and wins over
    // window.__RESET_PORTAL_CONFIG.
    read_global("__RESET_PORTAL_ENV", &["RESET_ENDPOINT", "reset_endpoint"]).or_else(|| {
        read_global("__RESET_PORTAL_CONFIG", &["reset_endpoint", "RESET_ENDPOINT"])
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

fn cache_endpoint(value: &str) -> String {
    let value = value.to_string();
    let _ = RESET_ENDPOINT.set(value.clone());
    RESET_ENDPOINT.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = cfg.endpoint() else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"reset_endpoint".into(),
        &wasm_bindgen::JsValue::from_str(&url),
    );
    let _ = js_sys::Reflect::set(&w, &"__RESET_PORTAL_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not served (status {})", resp.status());
        return None;
    }
    let cfg = resp.json::<RuntimeConfig>().await.ok()?;
    write_window_config(&cfg);
    Some(cfg)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn await_reset_endpoint() -> String {
    if let Some(cached) = RESET_ENDPOINT.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        log::debug!("reset endpoint taken from window globals");
        return cache_endpoint(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.endpoint()) {
        log::debug!("reset endpoint taken from config.json");
        return cache_endpoint(&url);
    }
    cache_endpoint(DEFAULT_RESET_ENDPOINT)
}

pub async fn init() {
    let endpoint = await_reset_endpoint().await;
    log::info!("reset endpoint resolved to {}", endpoint);
}
