use std::cell::RefCell;

use crate::domain::{AppError, ModxVersion};
use crate::ports::{ConsolePort, DistributionPort};

/// Distribution that succeeds or fails without touching the network.
#[derive(Debug, Default)]
pub struct FakeDistribution {
    failure: Option<String>,
    requests: RefCell<Vec<(ModxVersion, bool)>>,
}

impl FakeDistribution {
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<(ModxVersion, bool)> {
        self.requests.borrow().clone()
    }
}

impl DistributionPort for FakeDistribution {
    fn prepare(
        &self,
        version: &ModxVersion,
        force_download: bool,
        _console: &mut dyn ConsolePort,
    ) -> Result<(), AppError> {
        self.requests.borrow_mut().push((version.clone(), force_download));
        match &self.failure {
            Some(message) => Err(AppError::download(message.clone())),
            None => Ok(()),
        }
    }
}
