use std::{ffi::OsString, fmt, path::Path};

// === Toolchain === //

/// The closed set of external compilers this tool knows how to drive.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Toolchain {
    TinyGo,
    Emscripten,
}

impl Toolchain {
    /// Maps a source extension (dot included) to its toolchain. The mapping
    /// is exhaustive and case-sensitive.
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            ".go" => Some(Self::TinyGo),
            ".cpp" => Some(Self::Emscripten),
            _ => None,
        }
    }

    /// Builds the fully-substituted command for compiling `source` into the
    /// WebAssembly binary at `output`.
    pub fn invocation(self, source: &str, output: &str) -> ToolInvocation {
        let (program, args) = match self {
            Self::TinyGo => (
                "tinygo",
                vec!["build", "-o", output, "-target=wasi", source],
            ),
            Self::Emscripten => ("emcc", vec![source, "-o", output, "-s", "WASM=1"]),
        };

        ToolInvocation {
            program,
            args: args.into_iter().map(OsString::from).collect(),
        }
    }
}

// === ToolInvocation === //

/// An external command ready to spawn: the program name plus its argument
/// list. Paths travel as discrete argument elements; no shell is involved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ToolInvocation {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;

        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }

        Ok(())
    }
}

// === Extension splitting === //

/// Splits the extension off a path's file name, dot included. `archive.tar.gz`
/// yields `.gz` and a dotless name yields the empty string. A leading dot does
/// not begin an extension, so `.bashrc` has none.
pub fn source_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_string(),
        _ => String::new(),
    }
}
