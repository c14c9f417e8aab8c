mod config_store;
mod console;
mod distribution;
mod installer;

pub use config_store::ConfigDocumentStore;
pub use console::{AnswerValidator, ConsolePort, Question};
pub use distribution::DistributionPort;
pub use installer::{InstallerOutput, InstallerPort, SetupInvocation};
