use crate::ports::{ConfigDocumentStore, ConsolePort, DistributionPort, InstallerPort};

/// Application context holding the ports an install run depends on.
pub struct AppContext<D, I, S, C>
where
    D: DistributionPort,
    I: InstallerPort,
    S: ConfigDocumentStore,
    C: ConsolePort,
{
    distribution: D,
    installer: I,
    store: S,
    console: C,
}

/// Borrowed view of every port at once.
pub struct Ports<'a, D, I, S, C> {
    pub distribution: &'a D,
    pub installer: &'a I,
    pub store: &'a S,
    pub console: &'a mut C,
}

impl<D, I, S, C> AppContext<D, I, S, C>
where
    D: DistributionPort,
    I: InstallerPort,
    S: ConfigDocumentStore,
    C: ConsolePort,
{
    /// Create a new application context.
    pub fn new(distribution: D, installer: I, store: S, console: C) -> Self {
        Self { distribution, installer, store, console }
    }

    /// Get a reference to the installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }

    /// Get a reference to the config document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the distribution source.
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Get a reference to the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Borrow all ports, the console mutably.
    pub fn ports(&mut self) -> Ports<'_, D, I, S, C> {
        Ports {
            distribution: &self.distribution,
            installer: &self.installer,
            store: &self.store,
            console: &mut self.console,
        }
    }
}
