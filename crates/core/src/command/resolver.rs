//! Resolves the console-runner executable from configuration.
//!
//! Executable paths in config files are frequently Windows-shaped
//! (`C:\tools\NUnit\bin`) even when the run happens on a POSIX host under
//! mono, so all path inspection here works on the string with both
//! separator styles rather than through `std::path`, which would apply
//! host semantics.

use crate::config::RunConfig;
use crate::types::Platform;

pub const NUNIT_CONSOLE: &str = "nunit-console.exe";
pub const NUNIT_X86_CONSOLE: &str = "nunit-console-x86.exe";

/// Determines the executable token to spawn. Never fails: with no
/// `executable` configured the bare runner name is returned and ambient
/// PATH lookup takes over.
pub fn resolve_executable(config: &RunConfig) -> String {
    let console = match config.platform {
        Some(Platform::X86) => NUNIT_X86_CONSOLE,
        _ => NUNIT_CONSOLE,
    };

    let Some(raw) = config.executable.as_deref() else {
        return console.to_string();
    };

    let executable = trim_quotes(raw);
    if has_extension(executable) {
        executable.to_string()
    } else {
        join(executable, console)
    }
}

/// Character-class trim of whitespace and both quote styles from either
/// end. Not a balanced-pair check: `""path""` fully unwraps.
fn trim_quotes(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'')
}

fn last_segment(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// True when the last path segment carries an extension. A dot at index
/// zero is a hidden file, not an extension; a trailing dot counts.
fn has_extension(path: &str) -> bool {
    match last_segment(path).rfind('.') {
        Some(index) => index > 0,
        None => false,
    }
}

/// Joins the runner name onto a directory, reusing whichever separator
/// style the directory already uses.
fn join(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        return file.to_string();
    }
    let separator = if dir.contains('\\') { '\\' } else { '/' };
    let dir = dir.trim_end_matches(['/', '\\']);
    format!("{dir}{separator}{file}")
}
