mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LoggingSettings, ModelSettings, ServerSettings, Settings, SettingsError,
};
