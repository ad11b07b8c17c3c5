use libcnb::data::build_plan::{BuildPlan, BuildPlanBuilder};

pub(crate) const PLAN_ENTRY_JDK: &str = "jdk";
pub(crate) const PLAN_ENTRY_JVM_APPLICATION_PACKAGE: &str = "jvm-application-package";
pub(crate) const PLAN_ENTRY_MAVEN: &str = "maven";
pub(crate) const PLAN_ENTRY_SYFT: &str = "syft";

/// One alternative of the build plan: the names this buildpack provides together with the
/// names it requires from other buildpacks in the group.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct PlanGroup {
    pub(crate) provides: Vec<&'static str>,
    pub(crate) requires: Vec<&'static str>,
}

/// Builds the ordered plan groups for a Maven application.
///
/// The first group always offers Maven itself on top of a JDK. The two application package
/// groups only require `syft`, `jdk` and `maven` when a build file was found, since there is
/// nothing to package otherwise.
pub(crate) fn plan_groups(build_file_present: bool) -> Vec<PlanGroup> {
    let package_requires = if build_file_present {
        vec![PLAN_ENTRY_SYFT, PLAN_ENTRY_JDK, PLAN_ENTRY_MAVEN]
    } else {
        Vec::new()
    };

    vec![
        PlanGroup {
            provides: vec![PLAN_ENTRY_MAVEN],
            requires: vec![PLAN_ENTRY_JDK],
        },
        PlanGroup {
            provides: vec![PLAN_ENTRY_JVM_APPLICATION_PACKAGE],
            requires: package_requires.clone(),
        },
        PlanGroup {
            provides: vec![PLAN_ENTRY_JVM_APPLICATION_PACKAGE, PLAN_ENTRY_MAVEN],
            requires: package_requires,
        },
    ]
}

/// Converts plan groups into a libcnb [`BuildPlan`]. The first group becomes the primary plan,
/// every following group is appended as an `or` alternative in order.
pub(crate) fn to_build_plan(groups: &[PlanGroup]) -> BuildPlan {
    groups
        .iter()
        .enumerate()
        .fold(BuildPlanBuilder::new(), |builder, (index, group)| {
            let builder = if index == 0 { builder } else { builder.or() };

            let builder = group
                .provides
                .iter()
                .fold(builder, |builder, name| builder.provides(*name));

            group
                .requires
                .iter()
                .fold(builder, |builder, name| builder.requires(*name))
        })
        .build()
}
