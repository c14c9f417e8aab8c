//! Download, configure and run the MODX command-line setup.

pub mod orchestrator;
pub mod reporter;
pub mod resolver;
pub mod serializer;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, ExplicitParameters, InstallSettings, ModxVersion};
use crate::ports::{ConfigDocumentStore, ConsolePort, DistributionPort, InstallerPort};

pub use reporter::RunTimer;
pub use resolver::ResolutionDefaults;

/// Options for one install run.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub version: ModxVersion,
    pub force_download: bool,
    pub explicit: ExplicitParameters,
}

/// Run the full sequence: prepare, resolve, serialize, invoke, clean up, report.
///
/// Any failure before the installer runs stops the sequence without writing
/// or leaving a config document behind.
pub fn execute<D, I, S, C>(
    ctx: &mut AppContext<D, I, S, C>,
    settings: &InstallSettings,
    options: InstallOptions,
    timer: &RunTimer,
) -> Result<(), AppError>
where
    D: DistributionPort,
    I: InstallerPort,
    S: ConfigDocumentStore,
    C: ConsolePort,
{
    let ports = ctx.ports();

    ports.distribution.prepare(&options.version, options.force_download, &mut *ports.console)?;

    let defaults = ResolutionDefaults {
        project_name: settings.project_name(),
        hostname: settings.hostname.clone(),
    };
    let params = resolver::resolve(&options.explicit, &defaults, &mut *ports.console)?;

    let config_path = serializer::write(ports.store, &params, &settings.dir_prefix())?;
    debug!(path = %config_path.display(), "wrote setup config");

    orchestrator::run_setup(
        ports.installer,
        ports.store,
        &mut *ports.console,
        settings,
        &config_path,
    );

    reporter::report_done(&mut *ports.console, timer);
    Ok(())
}
