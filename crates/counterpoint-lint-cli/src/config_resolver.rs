//! Locating the configuration file.
//!
//! First match wins:
//!
//! 1. `--config <path>`
//! 2. `counterpoint-lint.toml`, then `.counterpoint-lint.toml`, in the working directory
//! 3. `config.toml` in the user config directory (`$COUNTERPOINT_LINT_CONFIG_DIR`,
//!    else `~/.counterpoint-lint/`)
//! 4. built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable overriding the user config directory.
pub const CONFIG_DIR_ENV: &str = "COUNTERPOINT_LINT_CONFIG_DIR";

const PROJECT_CONFIG_NAMES: [&str; 2] = ["counterpoint-lint.toml", ".counterpoint-lint.toml"];
const USER_CONFIG_NAME: &str = "config.toml";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; not checked for existence.
    Explicit(PathBuf),
    /// Found next to the working directory.
    Project(PathBuf),
    /// Found in the user config directory.
    User(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Path to load, or `None` for built-in defaults.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::User(p) => Some(p),
            Self::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "{} (--config)", p.display()),
            Self::Project(p) => write!(f, "{} (project)", p.display()),
            Self::User(p) => write!(f, "{} (user)", p.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

/// Resolves the configuration for a check run from `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let user_dir = user_config_dir(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from));
    resolve_in(project_dir, explicit, user_dir.as_deref())
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match user_dir.map(|dir| dir.join(USER_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found user config: {}", candidate.display());
            ConfigSource::User(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// User config directory; an empty override falls back to the home directory.
fn user_config_dir(env_override: Option<PathBuf>) -> Option<PathBuf> {
    env_override
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home::home_dir().map(|h| h.join(".counterpoint-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let project = TempDir::new().unwrap();
        touch(project.path(), "counterpoint-lint.toml");

        let explicit = Path::new("/nonexistent/custom.toml");
        assert_eq!(
            resolve_in(project.path(), Some(explicit), None),
            ConfigSource::Explicit(explicit.to_path_buf())
        );
    }

    #[test]
    fn project_names_are_checked_in_order() {
        let project = TempDir::new().unwrap();
        let dotted = touch(project.path(), ".counterpoint-lint.toml");
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(dotted)
        );

        let plain = touch(project.path(), "counterpoint-lint.toml");
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(plain)
        );
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("counterpoint-lint.toml")).unwrap();
        assert_eq!(resolve_in(project.path(), None, None), ConfigSource::Default);
    }

    #[test]
    fn user_config_is_the_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let config = touch(user.path(), "config.toml");

        assert_eq!(
            resolve_in(project.path(), None, Some(user.path())),
            ConfigSource::User(config)
        );

        touch(project.path(), "counterpoint-lint.toml");
        assert!(matches!(
            resolve_in(project.path(), None, Some(user.path())),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn empty_user_dir_means_defaults() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(
            resolve_in(project.path(), None, Some(user.path())),
            ConfigSource::Default
        );
    }

    #[test]
    fn env_override_wins_unless_empty() {
        let dir = PathBuf::from("/opt/counterpoint");
        assert_eq!(user_config_dir(Some(dir.clone())), Some(dir));

        let fallback = user_config_dir(Some(PathBuf::new()));
        assert_eq!(fallback, user_config_dir(None));
    }

    #[test]
    fn display_names_the_origin() {
        let p = PathBuf::from("/tmp/c.toml");
        assert_eq!(ConfigSource::User(p.clone()).to_string(), "/tmp/c.toml (user)");
        assert_eq!(ConfigSource::Explicit(p).to_string(), "/tmp/c.toml (--config)");
        assert_eq!(ConfigSource::Default.to_string(), "built-in defaults");
        assert!(ConfigSource::Default.path().is_none());
    }
}
