//! Handler functions for `mcp-course config` commands.

use crate::cli::ConfigAction;
use course_core::config::PROJECT_NAME;
use course_core::{CourseConfig, Error, Result};
use std::path::{Path, PathBuf};

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = cmd_config_path(config_path)?;
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist: run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", cmd_config_show(config_path)?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// The resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<PathBuf> {
    CourseConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

/// The effective configuration as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<String> {
    CourseConfig::load(config_path)?.to_toml_string()
}

/// Write a default configuration file, returning its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => CourseConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };
    write_default(&path, force)?;
    Ok(path)
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = CourseConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nested/config.toml");
        let file_str = file.to_str().unwrap();

        let path = cmd_config_init(Some(file_str), false).unwrap();

        assert_eq!(path, file);
        let loaded = CourseConfig::from_file(&file).unwrap();
        assert_eq!(loaded, CourseConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[webhook]\nport = 1\n").unwrap();
        let file_str = file.to_str().unwrap();

        let err = cmd_config_init(Some(file_str), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        cmd_config_init(Some(file_str), true).unwrap();
        assert_eq!(CourseConfig::from_file(&file).unwrap().webhook.port, 8080);
    }

    #[test]
    fn test_show_reflects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[webhook]\nport = 9100\n").unwrap();

        let shown = cmd_config_show(file.to_str()).unwrap();
        assert!(shown.contains("port = 9100"));
        assert!(shown.contains("max_events = 100"));
    }

    #[test]
    fn test_show_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(cmd_config_show(missing.to_str()).is_err());
    }

    #[test]
    fn test_path_prefers_explicit() {
        assert_eq!(
            cmd_config_path(Some("/etc/mcp-course.toml")).unwrap(),
            PathBuf::from("/etc/mcp-course.toml")
        );
    }
}
