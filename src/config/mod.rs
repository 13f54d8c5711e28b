//! Process configuration: defaults, an optional rc file, and environment
//! variables (env takes precedence). Loaded once at startup, read-only after.

use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .resumerc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "OPENAI_API_KEY",
        "API_BASE_URL",
        "DEFAULT_MODEL",
        "REQUEST_TIMEOUT",
    ];

    KEYS.contains(&k) || k.starts_with("OPENAI_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("resume_extract").join(".resumerc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("API_BASE_URL".into(), "default".into());
    m.insert("DEFAULT_MODEL".into(), "davinci-002".into());
    m.insert("REQUEST_TIMEOUT".into(), "60".into());
    m
}
