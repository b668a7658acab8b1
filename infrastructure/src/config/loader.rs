//! Configuration file loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["tutor.toml", ".tutor.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT` environment variable (server port only)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./tutor.toml` or `./.tutor.toml`
    /// 4. Global: `~/.config/smart-tutor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        let figment = Self::file_sources(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config), still honoring `PORT`
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));
        Self::extract(figment)
    }

    /// Defaults overlaid with whichever files are given, lowest priority first
    fn file_sources(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            debug!(path = %path.display(), "Merging config file");
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns `<config dir>/smart-tutor/config.toml` (e.g.
    /// `~/.config/smart-tutor/config.toml` on Linux).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("smart-tutor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if std::env::var("PORT").is_ok() {
            println!("  [FOUND] Env:     PORT");
        } else {
            println!("  [     ] Env:     PORT");
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./tutor.toml or ./.tutor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let config = ConfigLoader::extract(ConfigLoader::file_sources(None, None, None)).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let global = toml_file(
            r#"
[server]
port = 4000

[upstream]
model = "gpt-4o-mini"
"#,
        );
        let explicit = toml_file(
            r#"
[server]
port = 5000
"#,
        );

        let config = ConfigLoader::extract(ConfigLoader::file_sources(
            Some(global.path()),
            None,
            Some(explicit.path()),
        ))
        .unwrap();

        assert_eq!(config.server.port, 5000);
        // Keys the explicit file does not set fall through
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_file_value_is_error() {
        let bad = toml_file(
            r#"
[upstream]
temperature = 9.0
"#,
        );
        let result = ConfigLoader::extract(ConfigLoader::file_sources(None, Some(bad.path()), None));
        assert!(matches!(result, Err(ConfigError::InvalidTemperature(_))));
    }

    #[test]
    fn test_wrong_type_is_load_error() {
        let bad = toml_file(
            r#"
[server]
port = "not-a-number"
"#,
        );
        let result = ConfigLoader::extract(ConfigLoader::file_sources(None, None, Some(bad.path())));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("smart-tutor"));
    }
}
