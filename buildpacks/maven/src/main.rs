use crate::build_plan::to_build_plan;
use crate::config::{
    lookup_env, ConfigurationSource, MavenBuildpackMetadata, MavenConfig, POM_FILE_ENV_VAR,
};
use crate::detect::{build_file_path, Detection};
use crate::errors::{on_error_maven_buildpack, MavenBuildpackError};
use libcnb::build::{BuildContext, BuildResult, BuildResultBuilder};
use libcnb::detect::{DetectContext, DetectResult, DetectResultBuilder};
use libcnb::generic::GenericPlatform;
use libcnb::{buildpack_main, Buildpack, Env, Platform};
use libherokubuildpack::log::{log_header, log_info, log_warning};
use std::path::Path;

// Suppress warnings due to the `unused_crate_dependencies` lint not handling integration tests well.
#[cfg(test)]
use libcnb_test as _;

mod build_plan;
mod config;
mod detect;
mod errors;

pub(crate) struct MavenBuildpack;

impl Buildpack for MavenBuildpack {
    type Platform = GenericPlatform;
    type Metadata = MavenBuildpackMetadata;
    type Error = MavenBuildpackError;

    fn detect(&self, context: DetectContext<Self>) -> libcnb::Result<DetectResult, Self::Error> {
        let config = resolve_config(&context.platform, &context.buildpack_descriptor.metadata);
        warn_on_blank_configuration(&config);

        let detection = detect_build_file(&context.app_dir, &config)?;

        if detection.build_file_present {
            log_info(format!(
                "Found Maven build file {}, contributing application package plan",
                config.pom_file
            ));
        } else {
            log_info(format!(
                "No Maven build file {} found, only providing Maven",
                config.pom_file
            ));
        }

        DetectResultBuilder::pass()
            .build_plan(to_build_plan(&detection.plan_groups))
            .build()
    }

    fn build(&self, context: BuildContext<Self>) -> libcnb::Result<BuildResult, Self::Error> {
        log_header("Maven");

        let config = resolve_config(&context.platform, &context.buildpack_descriptor.metadata);
        warn_on_blank_configuration(&config);

        for configuration in context
            .buildpack_descriptor
            .metadata
            .configurations
            .iter()
            .filter(|configuration| configuration.build || configuration.launch)
        {
            let phase = if configuration.launch { " (launch)" } else { "" };
            log_info(format!(
                "Configuration {}{phase}: {}",
                configuration.name,
                configuration.description.as_deref().unwrap_or_default()
            ));
        }

        let detection = detect_build_file(&context.app_dir, &config)?;

        let source = match config.pom_file_source {
            ConfigurationSource::Environment => format!("from {POM_FILE_ENV_VAR}"),
            source => source.to_string(),
        };
        log_info(format!(
            "Using Maven build file {} ({source})",
            detection.build_file.display()
        ));

        if !detection.build_file_present {
            log_info("Build file not present, no application package will be produced");
        }

        for entry in &context.buildpack_plan.entries {
            log_info(format!("Requested by the build plan: {}", entry.name));
        }

        BuildResultBuilder::new().build()
    }

    fn on_error(&self, error: libcnb::Error<Self::Error>) {
        libherokubuildpack::error::on_error(on_error_maven_buildpack, error);
    }
}

fn resolve_config(platform: &GenericPlatform, metadata: &MavenBuildpackMetadata) -> MavenConfig {
    MavenConfig::resolve(&lookup_env(&Env::from_current(), platform.env()), metadata)
}

fn detect_build_file(
    app_dir: &Path,
    config: &MavenConfig,
) -> Result<Detection, MavenBuildpackError> {
    detect::detect(app_dir, config).map_err(|source| MavenBuildpackError::BuildFileCheck {
        path: build_file_path(app_dir, &config.pom_file),
        source,
    })
}

fn warn_on_blank_configuration(config: &MavenConfig) {
    if config.ignored_blank_pom_file {
        log_warning(
            "Blank build file configuration",
            format!(
                "{POM_FILE_ENV_VAR} is set but empty, falling back to {}.",
                config.pom_file
            ),
        );
    }
}

buildpack_main!(MavenBuildpack);
