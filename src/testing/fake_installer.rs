use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{InstallerOutput, InstallerPort, SetupInvocation};

/// Installer that records invocations and returns canned output.
#[derive(Debug, Default)]
pub struct FakeInstaller {
    stdout: String,
    launch_error: Option<String>,
    invocations: RefCell<Vec<SetupInvocation>>,
}

impl FakeInstaller {
    pub fn printing(stdout: &str) -> Self {
        Self { stdout: stdout.to_string(), ..Self::default() }
    }

    pub fn failing_to_launch(error: &str) -> Self {
        Self { launch_error: Some(error.to_string()), ..Self::default() }
    }

    pub fn invocations(&self) -> Vec<SetupInvocation> {
        self.invocations.borrow().clone()
    }
}

impl InstallerPort for FakeInstaller {
    fn run(&self, invocation: &SetupInvocation) -> Result<InstallerOutput, AppError> {
        self.invocations.borrow_mut().push(invocation.clone());
        if let Some(error) = &self.launch_error {
            return Err(AppError::ExternalToolError {
                tool: invocation.php_binary.clone(),
                error: error.clone(),
            });
        }
        Ok(InstallerOutput { stdout: self.stdout.clone(), exit_code: Some(1) })
    }
}
