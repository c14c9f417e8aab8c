mod fake_distribution;
mod fake_installer;
mod memory_config_store;
mod scripted_console;

pub use fake_distribution::FakeDistribution;
pub use fake_installer::FakeInstaller;
pub use memory_config_store::MemoryConfigStore;
pub use scripted_console::ScriptedConsole;
