// Browser-side helpers: console logging, settings storage, seeding.

use log::{Level, LevelFilter, Log, Metadata, Record};
use maze_walker::config::WalkerConfig;
use wasm_bindgen::JsValue;

const CONFIG_KEY: &str = "mw_config";

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Routes `log` records from the engine to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    } else {
        clog("logger already installed");
    }
}

/// Saved settings, or defaults when nothing (valid) is stored.
pub fn load_config() -> WalkerConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                match WalkerConfig::from_json_str(&raw) {
                    Ok(cfg) => return cfg,
                    Err(e) => log::warn!("ignoring saved settings: {}", e),
                }
            }
        }
    }
    WalkerConfig::default()
}

pub fn save_config(cfg: &WalkerConfig) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            match cfg.to_json_string() {
                Ok(s) => {
                    let _ = store.set_item(CONFIG_KEY, &s);
                }
                Err(e) => log::warn!("could not save settings: {}", e),
            }
        }
    }
}

pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
