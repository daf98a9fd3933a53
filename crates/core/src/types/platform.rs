use serde::{Deserialize, Serialize};

/// Target CPU platform for the console runner binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X86,
    AnyCpu,
}

/// Command-line conventions of the machine the runner is launched on.
///
/// This is an explicit parameter rather than ambient process state so the
/// resolver and builder stay pure: on Windows switches use `/` and the
/// console runner is launched directly, elsewhere switches use `-` and the
/// runner goes through mono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }

    pub fn switch_prefix(self) -> char {
        match self {
            HostOs::Windows => '/',
            HostOs::Unix => '-',
        }
    }
}
