pub mod config_document;
pub mod error;
pub mod normalize;
pub mod parameters;
pub mod secret;
pub mod settings;
pub mod validation;
pub mod version;

pub use config_document::InstallConfigDocument;
pub use error::AppError;
pub use parameters::{ExplicitParameters, Field, InstallParameters};
pub use settings::{CONFIG_FILE_NAME, InstallSettings, SETUP_SCRIPT};
pub use validation::{MIN_PASSWORD_LENGTH, ValidationError};
pub use version::{ModxVersion, ReleaseTag};
