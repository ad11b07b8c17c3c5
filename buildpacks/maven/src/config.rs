use libcnb::Env;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

pub(crate) const POM_FILE_ENV_VAR: &str = "BP_MAVEN_POM_FILE";
pub(crate) const DEFAULT_POM_FILE: &str = "pom.xml";

/// The `[metadata]` table of this buildpack's `buildpack.toml`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct MavenBuildpackMetadata {
    #[serde(default)]
    pub(crate) configurations: Vec<ConfigurationMetadata>,
}

/// Declares an environment variable that users can set to configure this buildpack.
#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
pub(crate) struct ConfigurationMetadata {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) default: Option<String>,
    #[serde(default)]
    pub(crate) build: bool,
    #[serde(default)]
    pub(crate) launch: bool,
}

impl MavenBuildpackMetadata {
    pub(crate) fn default_for(&self, name: &str) -> Option<&str> {
        self.configurations
            .iter()
            .find(|configuration| configuration.name == name)
            .and_then(|configuration| configuration.default.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum ConfigurationSource {
    Environment,
    BuildpackDefault,
    BuiltInDefault,
}

impl Display for ConfigurationSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationSource::Environment => f.write_str("environment"),
            ConfigurationSource::BuildpackDefault => f.write_str("buildpack.toml default"),
            ConfigurationSource::BuiltInDefault => f.write_str("built-in default"),
        }
    }
}

/// Resolved configuration of the Maven buildpack.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct MavenConfig {
    /// Path of the Maven build file, relative to the application root.
    pub(crate) pom_file: String,
    pub(crate) pom_file_source: ConfigurationSource,
    /// Set when `BP_MAVEN_POM_FILE` was present but blank and has been ignored.
    pub(crate) ignored_blank_pom_file: bool,
}

impl MavenConfig {
    /// Resolves the configuration from the given environment, falling back to the defaults
    /// declared in `buildpack.toml` and finally to the built-in defaults.
    ///
    /// Blank values are treated as if the variable was unset.
    pub(crate) fn resolve(env: &Env, metadata: &MavenBuildpackMetadata) -> Self {
        let env_value = env.get_string_lossy(POM_FILE_ENV_VAR);

        let non_blank = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let (pom_file, pom_file_source) = env_value
            .as_deref()
            .and_then(non_blank)
            .map(|value| (value, ConfigurationSource::Environment))
            .or_else(|| {
                metadata
                    .default_for(POM_FILE_ENV_VAR)
                    .and_then(non_blank)
                    .map(|value| (value, ConfigurationSource::BuildpackDefault))
            })
            .unwrap_or_else(|| {
                (
                    String::from(DEFAULT_POM_FILE),
                    ConfigurationSource::BuiltInDefault,
                )
            });

        Self {
            pom_file,
            pom_file_source,
            ignored_blank_pom_file: pom_file_source != ConfigurationSource::Environment
                && env_value.is_some(),
        }
    }
}

/// Builds the environment used for configuration lookups: the process environment overlaid
/// with the platform environment, so that values from `<platform>/env` take precedence.
pub(crate) fn lookup_env(process_env: &Env, platform_env: &Env) -> Env {
    let mut env = process_env.clone();
    for (key, value) in platform_env {
        env.insert(key, value);
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_with_default(default: &str) -> MavenBuildpackMetadata {
        MavenBuildpackMetadata {
            configurations: vec![ConfigurationMetadata {
                name: String::from(POM_FILE_ENV_VAR),
                description: None,
                default: Some(String::from(default)),
                build: true,
                launch: false,
            }],
        }
    }

    #[test]
    fn resolve_uses_built_in_default() {
        let config = MavenConfig::resolve(&Env::new(), &MavenBuildpackMetadata::default());

        assert_eq!(config.pom_file, "pom.xml");
        assert_eq!(config.pom_file_source, ConfigurationSource::BuiltInDefault);
        assert!(!config.ignored_blank_pom_file);
    }

    #[test]
    fn resolve_uses_buildpack_default() {
        let config = MavenConfig::resolve(&Env::new(), &metadata_with_default("build.xml"));

        assert_eq!(config.pom_file, "build.xml");
        assert_eq!(config.pom_file_source, ConfigurationSource::BuildpackDefault);
    }

    #[test]
    fn resolve_prefers_environment() {
        let mut env = Env::new();
        env.insert(POM_FILE_ENV_VAR, "pom2.xml");

        let config = MavenConfig::resolve(&env, &metadata_with_default("pom.xml"));

        assert_eq!(config.pom_file, "pom2.xml");
        assert_eq!(config.pom_file_source, ConfigurationSource::Environment);
    }

    #[test]
    fn resolve_ignores_blank_environment_value() {
        let mut env = Env::new();
        env.insert(POM_FILE_ENV_VAR, "  ");

        let config = MavenConfig::resolve(&env, &MavenBuildpackMetadata::default());

        assert_eq!(config.pom_file, "pom.xml");
        assert_eq!(config.pom_file_source, ConfigurationSource::BuiltInDefault);
        assert!(config.ignored_blank_pom_file);
    }

    #[test]
    fn resolve_trims_environment_value() {
        let mut env = Env::new();
        env.insert(POM_FILE_ENV_VAR, "service/pom.xml\n");

        let config = MavenConfig::resolve(&env, &MavenBuildpackMetadata::default());

        assert_eq!(config.pom_file, "service/pom.xml");
    }

    #[test]
    fn lookup_env_prefers_platform_values() {
        let mut process_env = Env::new();
        process_env.insert(POM_FILE_ENV_VAR, "process.xml");
        process_env.insert("PATH", "/usr/bin");

        let mut platform_env = Env::new();
        platform_env.insert(POM_FILE_ENV_VAR, "platform.xml");

        let env = lookup_env(&process_env, &platform_env);

        assert_eq!(
            env.get_string_lossy(POM_FILE_ENV_VAR),
            Some(String::from("platform.xml"))
        );
        assert_eq!(env.get_string_lossy("PATH"), Some(String::from("/usr/bin")));
    }

    #[test]
    fn metadata_deserializes_from_buildpack_toml() {
        let buildpack_toml: toml::Table =
            toml::from_str(include_str!("../buildpack.toml")).unwrap();

        let metadata: MavenBuildpackMetadata = buildpack_toml
            .get("metadata")
            .cloned()
            .unwrap()
            .try_into()
            .unwrap();

        assert_eq!(metadata.default_for(POM_FILE_ENV_VAR), Some("pom.xml"));
        assert!(metadata.configurations[0].build);
        assert!(!metadata.configurations[0].launch);
    }

    #[test]
    fn metadata_reads_launch_flag() {
        let metadata: MavenBuildpackMetadata = toml::from_str(
            r#"
            [[configurations]]
            name = "BP_MAVEN_POM_FILE"
            launch = true
            "#,
        )
        .unwrap();

        assert!(metadata.configurations[0].launch);
        assert!(!metadata.configurations[0].build);
        assert_eq!(metadata.default_for(POM_FILE_ENV_VAR), None);
    }
}
