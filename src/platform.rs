use crate::prelude::*;

/// Operating system of a CI worker, as reported by the CI environment.
///
/// Closed set: these are the only workers the bootstrap supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOS,
}

impl OsKind {
    pub fn discriminator(self) -> &'static str {
        match self {
            OsKind::Linux => "linux",
            OsKind::MacOS => "osx",
        }
    }
}

impl Display for OsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.discriminator().fmt(f)
    }
}

impl FromStr for OsKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linux" => Ok(OsKind::Linux),
            "osx" => Ok(OsKind::MacOS),
            other => bail!("Unsupported CI worker OS: {}", other),
        }
    }
}
