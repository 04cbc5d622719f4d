use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),
}

/// Failure to fetch or decode one of the external resources (font, matcap).
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font {path}: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("invalid image {path}: {reason}")]
    Image { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReliefError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("text.size = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: text.size = 0 is out of range"
        );
    }

    #[test]
    fn asset_error_display_names_the_path() {
        let err = AssetError::Font {
            path: PathBuf::from("fonts/missing.json"),
            reason: "no glyphs".into(),
        };
        assert_eq!(err.to_string(), "invalid font fonts/missing.json: no glyphs");

        let err = AssetError::Io {
            path: PathBuf::from("textures/8.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read textures/8.png"));
    }

    #[test]
    fn relief_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ReliefError = config_err.into();
        assert!(matches!(err, ReliefError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn relief_error_from_asset() {
        let asset_err = AssetError::Image {
            path: PathBuf::from("a.png"),
            reason: "truncated".into(),
        };
        let err: ReliefError = asset_err.into();
        assert!(matches!(err, ReliefError::Asset(_)));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn relief_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReliefError = io_err.into();
        assert!(matches!(err, ReliefError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn relief_error_renderer_display() {
        let err = ReliefError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");
    }
}
