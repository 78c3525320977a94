use std::process::Command;

use anyhow::Context;

use crate::toolchain::ToolInvocation;

// === ToolRunner === //

/// The process-spawning capability behind the driver. Factored as a trait so
/// tests can substitute a recording fake for the real toolchains.
pub trait ToolRunner {
    /// Runs the invocation to completion, failing if the program could not be
    /// launched or exited with a non-zero status.
    fn run(&mut self, invocation: &ToolInvocation) -> anyhow::Result<()>;
}

// === SystemRunner === //

/// Spawns the invocation as a real child process and blocks until it exits.
/// Stdio is inherited so the compiler's own diagnostics reach the user.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &ToolInvocation) -> anyhow::Result<()> {
        let status = Command::new(invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| format!("failed to launch `{}`", invocation.program))?;

        if !status.success() {
            anyhow::bail!("`{}` exited with {status}", invocation.program);
        }

        Ok(())
    }
}
