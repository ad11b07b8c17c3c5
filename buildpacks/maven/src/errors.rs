use libherokubuildpack::log::log_error;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub(crate) enum MavenBuildpackError {
    #[error("Cannot check for Maven build file {}: {source}", path.display())]
    BuildFileCheck {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<MavenBuildpackError> for libcnb::Error<MavenBuildpackError> {
    fn from(error: MavenBuildpackError) -> Self {
        Self::BuildpackError(error)
    }
}

pub(crate) fn on_error_maven_buildpack(error: MavenBuildpackError) {
    match error {
        MavenBuildpackError::BuildFileCheck { path, source } => log_error(
            "Unable to check for Maven build file",
            format!(
                "An unexpected I/O error occurred while checking whether the Maven build file\n\
                 exists at: {}\n\n\
                 If you set BP_MAVEN_POM_FILE, make sure it points to a readable location\n\
                 inside your application.\n\n\
                 Details: {source}",
                path.display()
            ),
        ),
    }
}
