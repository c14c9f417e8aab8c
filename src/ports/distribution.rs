use crate::domain::{AppError, ModxVersion};
use crate::ports::ConsolePort;

/// Port for making an unpacked MODX distribution available in the working
/// directory.
pub trait DistributionPort {
    /// Ensure `setup/index.php` exists for `version`, fetching when needed.
    /// `force_download` ignores any cached archive.
    fn prepare(
        &self,
        version: &ModxVersion,
        force_download: bool,
        console: &mut dyn ConsolePort,
    ) -> Result<(), AppError>;
}
