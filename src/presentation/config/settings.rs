use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Absent means the log sink runs as a documented no-op.
    pub url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub forest_path: String,
    pub scaler_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            run_migrations: false,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            forest_path: "artifacts/forest.json".to_string(),
            scaler_path: "artifacts/scaler.json".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            database: DatabaseSettings::default(),
            model: ModelSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Reads `config/{environment}.toml` (or `CONFIG_PATH`), falling back to
    /// defaults when no file exists, then applies environment overrides.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let path = std::env::var("CONFIG_PATH")
            .unwrap_or_else(|_| format!("config/{}.toml", environment.as_str()));

        let mut settings = match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw)
                .map_err(|e| SettingsError::Parse(format!("{}: {}", path, e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no config file found, using defaults");
                Settings::default()
            }
            Err(e) => return Err(SettingsError::Io(format!("{}: {}", path, e))),
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.database.url = Some(url);
            }
        }
        if let Some(port) = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            self.server.port = port;
        }
        if let Ok(path) = std::env::var("MODEL_FOREST_PATH") {
            self.model.forest_path = path;
        }
        if let Ok(path) = std::env::var("MODEL_SCALER_PATH") {
            self.model.scaler_path = path;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(String),
    #[error("failed to parse settings: {0}")]
    Parse(String),
}
