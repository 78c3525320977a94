use std::path::Path;

use thiserror::Error;

use crate::{
    runner::ToolRunner,
    toolchain::{Toolchain, source_extension},
};

// === Outcome === //

pub const USAGE: &str = "Usage: wasmcc <source_file_path> <output_file_path>";

/// What a single dispatch run concluded. `main` maps this onto the process
/// exit code; `run` itself never terminates the process.
#[derive(Debug)]
pub enum Outcome {
    Success,
    Usage,
    Failed(DispatchError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Usage => 1,
            Self::Failed(err) => err.exit_code(),
        }
    }
}

// === DispatchError === //

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Source file '{0}' does not exist.")]
    MissingSource(String),

    #[error("Unsupported file extension '{0}'. Supported extensions are .go and .cpp.")]
    UnsupportedExtension(String),

    #[error("Failed to compile '{path}' to WebAssembly: {source:#}")]
    ToolFailure {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Compilation succeeded but output file '{0}' is missing.")]
    MissingOutput(String),
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSource(_) => 2,
            Self::UnsupportedExtension(_) => 3,
            Self::ToolFailure { .. } => 4,
            Self::MissingOutput(_) => 5,
        }
    }
}

// === Driver === //

/// Dispatches one compilation: validates `argv`, selects the toolchain by
/// source extension, runs it through `runner`, and checks for the artifact.
///
/// Every failure is reported on stdout at the point of detection; nothing
/// panics or propagates past this function.
pub fn run(argv: &[&str], runner: &mut dyn ToolRunner) -> Outcome {
    // Positional arguments beyond the first two are ignored.
    let &[_, source, output, ..] = argv else {
        println!("{USAGE}");
        return Outcome::Usage;
    };

    match dispatch(source, output, runner) {
        Ok(()) => Outcome::Success,
        Err(err) => {
            println!("Error: {err}");
            Outcome::Failed(err)
        }
    }
}

fn dispatch(source: &str, output: &str, runner: &mut dyn ToolRunner) -> Result<(), DispatchError> {
    println!("Using source file '{source}'.");

    if !Path::new(source).exists() {
        return Err(DispatchError::MissingSource(source.to_string()));
    }

    let ext = source_extension(Path::new(source));
    let Some(toolchain) = Toolchain::for_extension(&ext) else {
        return Err(DispatchError::UnsupportedExtension(ext));
    };

    let invocation = toolchain.invocation(source, output);
    tracing::debug!("dispatching {toolchain:?}: `{invocation}`");

    runner
        .run(&invocation)
        .map_err(|err| DispatchError::ToolFailure {
            path: source.to_string(),
            source: err,
        })?;

    // The artifact is written by the external compiler, never by us. A clean
    // exit that produced nothing is reported as its own anomaly.
    if !Path::new(output).exists() {
        return Err(DispatchError::MissingOutput(output.to_string()));
    }

    println!("Compiled '{source}' to WebAssembly binary '{output}' successfully.");
    Ok(())
}
