pub mod filesystem_config_store;
pub mod modx_release_distribution;
pub mod php_setup_runner;
pub mod system_environment;
pub mod terminal_console;

pub use filesystem_config_store::FilesystemConfigStore;
pub use modx_release_distribution::ModxReleaseDistribution;
pub use php_setup_runner::PhpSetupRunner;
pub use terminal_console::TerminalConsole;
