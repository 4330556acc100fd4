use crate::prelude::*;

/// Looks up an executable by a set of possible names, in a set of possible locations.
///
/// Program-specific locations take precedence over the `PATH` entries.
#[derive(Clone, Debug)]
pub struct Resolver {
    pub names:     Vec<&'static str>,
    pub locations: Vec<PathBuf>,
}

impl Resolver {
    pub fn new(names: Vec<&'static str>, locations: Vec<PathBuf>) -> Self {
        Self { names, locations }
    }

    fn path_entries() -> Vec<PathBuf> {
        std::env::var_os("PATH").iter().flat_map(std::env::split_paths).collect()
    }

    pub fn lookup_all(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let locations = self.locations.iter().cloned().chain(Self::path_entries());
        locations.cartesian_product(self.names.clone()).filter_map(|(location, name)| {
            let candidate = location.join(name);
            candidate.is_file().then_some(candidate)
        })
    }

    pub fn lookup(&self) -> Result<PathBuf> {
        self.lookup_all().next().ok_or_else(|| {
            anyhow!(
                "Failed to find an executable by names {} in locations {:?} or PATH.",
                self.names.iter().join(", "),
                self.locations
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_executable_in_default_location() -> Result {
        let dir = tempdir()?;
        let exe = dir.path().join("some-tool");
        std::fs::write(&exe, "#!/bin/sh\n")?;
        let resolver = Resolver::new(vec!["some-tool"], vec![dir.path().to_path_buf()]);
        assert_eq!(resolver.lookup()?, exe);
        Ok(())
    }

    #[test]
    fn missing_executable_is_an_error() {
        let resolver = Resolver::new(vec!["conda-bootstrap-no-such-tool"], vec![]);
        assert!(resolver.lookup().is_err());
    }
}
