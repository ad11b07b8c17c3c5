use libcnb::build::{BuildContext, BuildResult, BuildResultBuilder};
use libcnb::data::build_plan::BuildPlanBuilder;
use libcnb::detect::{DetectContext, DetectResult, DetectResultBuilder};
use libcnb::generic::{GenericError, GenericMetadata, GenericPlatform};
use libcnb::{buildpack_main, Buildpack};

/// Stands in for the JDK provider and the application package consumer that surround the
/// Maven buildpack in a real builder, so integration tests can resolve a complete group.
pub(crate) struct TestJvmApplicationBuildpack;

impl Buildpack for TestJvmApplicationBuildpack {
    type Platform = GenericPlatform;
    type Metadata = GenericMetadata;
    type Error = GenericError;

    fn detect(&self, _context: DetectContext<Self>) -> libcnb::Result<DetectResult, Self::Error> {
        DetectResultBuilder::pass()
            .build_plan(
                BuildPlanBuilder::new()
                    .provides("jdk")
                    .provides("syft")
                    .requires("jvm-application-package")
                    .or()
                    .requires("jvm-application-package")
                    .build(),
            )
            .build()
    }

    fn build(&self, context: BuildContext<Self>) -> libcnb::Result<BuildResult, Self::Error> {
        for entry in &context.buildpack_plan.entries {
            println!("jvm-application plan entry: {}", entry.name);
        }

        BuildResultBuilder::new().build()
    }
}

buildpack_main!(TestJvmApplicationBuildpack);
