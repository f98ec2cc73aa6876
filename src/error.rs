use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Unrecognized argument '{0}'")]
    InvalidArgument(char),

    #[error("'{0}' is not a mode flag; named options must come before the flags")]
    MisplacedOption(String),

    #[error("Override config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a directory's `.clean.yml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read override config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse override config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize override config '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write override config '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_character() {
        let err = CleanError::InvalidArgument('x');
        assert_eq!(err.to_string(), "Unrecognized argument 'x'");
    }

    #[test]
    fn misplaced_option_names_token() {
        let err = CleanError::MisplacedOption("--path".into());
        assert!(err.to_string().starts_with("'--path' is not a mode flag"));
    }

    #[test]
    fn error_display_messages() {
        let err = SettingsError::Invalid("unknown rule 'gulp'".into());
        assert!(err.to_string().contains("gulp"));
    }

    #[test]
    fn error_conversion() {
        let settings_err = SettingsError::Invalid("test".into());
        let clean_err: CleanError = settings_err.into();
        assert!(matches!(clean_err, CleanError::Settings(_)));
    }

    #[test]
    fn parse_error_mentions_path() {
        let source = serde_yaml::from_str::<Vec<String>>("[").unwrap_err();
        let err: CleanError = ConfigError::Parse {
            path: PathBuf::from("/work/.clean.yml"),
            source,
        }
        .into();
        assert!(err.to_string().contains("/work/.clean.yml"));
    }
}
