//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::overrides::ConfigOverrides;
use crate::config::schema::BootstrapConfig;
use crate::config::validator::validate;
use crate::error::{BootstrapError, Result};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".pybootstrap";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.pybootstrap/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .pybootstrap/config.yml, or the `--config` file
    pub project: Option<PathBuf>,

    /// Local overrides: .pybootstrap/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: home::home_dir()
                .map(|home| home.join(CONFIG_DIR).join("config.yml"))
                .filter(|p| p.is_file()),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Replace the discovered project config with an explicit file.
    pub fn with_explicit(mut self, path: PathBuf) -> Self {
        self.project = Some(path);
        self
    }

    /// All configured paths in merge order, each file at most once.
    pub fn in_order(&self) -> Vec<&PathBuf> {
        let mut paths: Vec<&PathBuf> = Vec::new();
        for path in [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
        {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// The first directory holding a `.pybootstrap` directory or a `.git`
/// entry (the nearest git working tree) wins. The home directory's
/// `.pybootstrap` holds the user global config and never marks a project.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    find_project_root_with_home(start, home::home_dir().as_deref())
}

/// [`find_project_root`] with an explicit home directory.
pub fn find_project_root_with_home(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            let is_home = home.is_some_and(|h| h == *dir);
            (!is_home && dir.join(CONFIG_DIR).is_dir()) || dir.join(".git").exists()
        })
        .map(Path::to_path_buf)
}

/// Load a config file as a raw YAML value (for merging).
///
/// An empty file yields an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| BootstrapError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        serde_yaml::Value::Null => Ok(serde_yaml::Value::Mapping(Default::default())),
        serde_yaml::Value::Mapping(_) => Ok(value),
        _ => Err(BootstrapError::ConfigParseError {
            path: path.to_path_buf(),
            message: "top level must be a mapping".to_string(),
        }),
    }
}

/// Compose defaults with the given file layers and overrides.
pub fn compose(paths: &ConfigPaths, overrides: &ConfigOverrides) -> Result<BootstrapConfig> {
    let defaults = serde_yaml::to_value(BootstrapConfig::default())
        .map_err(|e| anyhow::anyhow!("failed to serialize defaults: {}", e))?;

    let mut layers = vec![defaults];
    for path in paths.in_order() {
        tracing::debug!("loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);
    let mut config: BootstrapConfig =
        serde_yaml::from_value(merged).map_err(|e| BootstrapError::ConfigParseError {
            path: paths
                .project
                .clone()
                .unwrap_or_else(|| PathBuf::from(CONFIG_DIR)),
            message: e.to_string(),
        })?;

    overrides.apply(&mut config);
    validate(&config)?;
    Ok(config)
}

/// Discover, load, compose, and validate the configuration for a project.
///
/// Configuration files are optional; without any the built-in defaults
/// apply. An explicit `config_file` must exist.
pub fn load_config(
    project_root: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<BootstrapConfig> {
    let mut paths = ConfigPaths::discover(project_root);
    if let Some(file) = config_file {
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            project_root.join(file)
        };
        if !file.is_file() {
            return Err(BootstrapError::ConfigNotFound { path: file });
        }
        paths = paths.with_explicit(file);
    }
    compose(&paths, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn project_only(root: &Path) -> ConfigPaths {
        ConfigPaths {
            user_global: None,
            ..ConfigPaths::discover(root)
        }
    }

    #[test]
    fn defaults_without_any_file() {
        let temp = TempDir::new().unwrap();
        let config = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn project_file_overrides_defaults() {
        let temp = project("python:\n  executables: [python3, git]\n");
        let config = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.python.executables, vec!["python3", "git"]);
        assert_eq!(config.base.setup_action, "setup");
    }

    #[test]
    fn local_file_overrides_project_file() {
        let temp = project("python:\n  python_version: \"3.10\"\n");
        fs::write(
            temp.path().join(CONFIG_DIR).join("config.local.yml"),
            "python:\n  python_version: \"3.11\"\n",
        )
        .unwrap();

        let config = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.python.python_version, "3.11");
    }

    #[test]
    fn empty_file_is_accepted() {
        let temp = project("");
        let config = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = project("python: [unclosed");
        let err = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn non_mapping_top_level_is_rejected() {
        let temp = project("- just\n- a list\n");
        let err = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("top level must be a mapping"));
    }

    #[test]
    fn invalid_version_fails_validation() {
        let temp = project("python:\n  python_version: banana\n");
        let err = compose(&project_only(temp.path()), &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::ConfigValidationError { .. }));
    }

    #[test]
    fn overrides_apply_after_files() {
        let temp = project("python:\n  python_version: \"3.10\"\n");
        let overrides = ConfigOverrides::default().with_python_version(Some("3.13".to_string()));
        let config = compose(&project_only(temp.path()), &overrides).unwrap();
        assert_eq!(config.python.python_version, "3.13");
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = load_config(
            temp.path(),
            Some(Path::new("missing.yml")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BootstrapError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_config_replaces_project_file() {
        let temp = project("python:\n  python_version: \"3.10\"\n");
        fs::write(temp.path().join("alt.yml"), "python:\n  python_version: \"3.9\"\n").unwrap();

        let paths = project_only(temp.path()).with_explicit(temp.path().join("alt.yml"));
        let config = compose(&paths, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.python.python_version, "3.9");
    }

    #[test]
    fn finds_root_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("src").join("pylib");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn home_config_dir_is_not_a_project_marker() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        fs::create_dir_all(home.join(CONFIG_DIR)).unwrap();
        let project = home.join("work").join("myproj");
        fs::create_dir_all(&project).unwrap();

        let root = find_project_root_with_home(&project, Some(&home));
        assert!(root.map_or(true, |r| !r.starts_with(&home)));
    }

    #[test]
    fn git_repo_in_home_still_marks_root() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        fs::create_dir_all(home.join(CONFIG_DIR)).unwrap();
        fs::create_dir_all(home.join(".git")).unwrap();
        let nested = home.join("notes");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root_with_home(&nested, Some(&home)), Some(home));
    }

    #[test]
    fn same_file_is_loaded_once() {
        let path = PathBuf::from("/home/me/.pybootstrap/config.yml");
        let paths = ConfigPaths {
            user_global: Some(path.clone()),
            project: Some(path.clone()),
            project_local: None,
        };
        assert_eq!(paths.in_order(), vec![&path]);
    }

    #[test]
    fn config_dir_marks_root_before_outer_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let inner = temp.path().join("tools");
        fs::create_dir_all(inner.join(CONFIG_DIR)).unwrap();

        assert_eq!(find_project_root(&inner), Some(inner.clone()));
    }
}
