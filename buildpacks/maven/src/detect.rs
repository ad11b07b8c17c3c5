use crate::build_plan::{plan_groups, PlanGroup};
use crate::config::MavenConfig;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Outcome of inspecting an application directory for its Maven build file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Detection {
    pub(crate) build_file: PathBuf,
    pub(crate) build_file_present: bool,
    pub(crate) plan_groups: Vec<PlanGroup>,
}

/// Checks whether the configured build file exists in `app_dir` and derives the plan groups.
///
/// Only filesystem metadata is read. A missing build file still yields a result: Maven itself
/// can be provided to other buildpacks without an application to package.
pub(crate) fn detect(app_dir: &Path, config: &MavenConfig) -> io::Result<Detection> {
    let build_file = build_file_path(app_dir, &config.pom_file);
    let build_file_present = build_file.try_exists()?;

    Ok(Detection {
        plan_groups: plan_groups(build_file_present),
        build_file,
        build_file_present,
    })
}

/// Locates the build file inside `app_dir`. Root, prefix and parent components of `pom_file`
/// are dropped so the result never leaves the application directory.
pub(crate) fn build_file_path(app_dir: &Path, pom_file: &str) -> PathBuf {
    Path::new(pom_file)
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .fold(app_dir.to_path_buf(), |path, name| path.join(name))
}
