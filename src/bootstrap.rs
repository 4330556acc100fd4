use crate::prelude::*;

use crate::env::Modification;
use crate::platform::OsKind;
use crate::programs::Bash;
use crate::programs::Conda;
use anyhow::Context;

pub const LINUX_INSTALLER_URL: &str =
    "https://repo.continuum.io/miniconda/Miniconda3-latest-Linux-x86_64.sh";
pub const MACOS_INSTALLER_URL: &str =
    "https://repo.continuum.io/miniconda/Miniconda3-latest-MacOSX-x86_64.sh";

pub const DEFAULT_ENVIRONMENT_NAME: &str = "test-environment";
pub const DEFAULT_PREFIX_DIR_NAME: &str = "miniconda";

/// The installer download URL for a given CI worker OS.
pub fn installer_url(os: OsKind) -> Result<Url> {
    let url = match os {
        OsKind::Linux => LINUX_INSTALLER_URL,
        OsKind::MacOS => MACOS_INSTALLER_URL,
    };
    Url::parse(url).anyhow_err()
}

/// Check a found interpreter version against a possibly partial pin, like `3.6` or `3.6.8`.
pub fn version_matches_pin(version: &Version, pin: &str) -> bool {
    let actual = [version.major, version.minor, version.patch];
    let requested: Option<Vec<u64>> = pin.split('.').map(|piece| piece.parse().ok()).collect();
    match requested {
        Some(requested) if !requested.is_empty() && requested.len() <= actual.len() =>
            requested == actual[..requested.len()],
        _ => false,
    }
}

/// Installs conda into a fixed prefix and creates a named environment with a pinned Python.
///
/// The whole sequence is fail-fast: the first failing step aborts the run, with no cleanup of
/// whatever was already done. The workers this runs on are disposable.
#[derive(Clone, Debug)]
pub struct Bootstrapper {
    pub os:               OsKind,
    pub python_version:   String,
    pub install_prefix:   PathBuf,
    pub environment_name: String,
}

impl Bootstrapper {
    /// A bootstrapper with the default prefix and environment name.
    pub fn new(os: OsKind, python_version: impl Into<String>) -> Result<Self> {
        let home = dirs::home_dir().context("Failed to locate the home directory.")?;
        Ok(Self {
            os,
            python_version: python_version.into(),
            install_prefix: home.join(DEFAULT_PREFIX_DIR_NAME),
            environment_name: DEFAULT_ENVIRONMENT_NAME.into(),
        })
    }

    pub fn installer_url(&self) -> Result<Url> {
        installer_url(self.os)
    }

    /// Run the installer unattended, targeting the installation prefix.
    ///
    /// A pre-existing prefix is not checked for; the installer's own exit status decides.
    pub async fn install(&self, installer: impl AsRef<Path>) -> Result {
        let installer = installer.as_ref();
        ensure!(installer.is_file(), "Installer {} does not exist.", installer.display());
        info!("Installing {} into {}.", installer.display(), self.install_prefix.display());
        let mut cmd = Bash.run_script(installer)?;
        cmd.arg("-b").arg("-p").arg(&self.install_prefix);
        cmd.run_ok().await
    }

    /// Conda from the installation prefix.
    pub fn conda(&self) -> Conda {
        Conda::under(&self.install_prefix)
    }

    pub async fn create_environment(&self) -> Result {
        info!(
            "Creating environment {} with Python {}.",
            self.environment_name, self.python_version
        );
        self.conda().create_environment(&self.environment_name, &self.python_version).await
    }

    pub fn environment_prefix(&self) -> PathBuf {
        self.install_prefix.join_many(["envs", self.environment_name.as_str()])
    }

    /// The process-environment changes that stand in for `source activate <name>`.
    pub fn activation_modifications(&self) -> Vec<Modification> {
        vec![
            Modification::set("CONDA_DEFAULT_ENV", &self.environment_name),
            Modification::set("CONDA_PREFIX", self.environment_prefix().display()),
            Modification::prepend_path("PATH", self.install_prefix.join("bin")),
            Modification::prepend_path("PATH", self.environment_prefix().join("bin")),
        ]
    }

    /// Activate the new environment for the remainder of the session.
    pub fn activate(&self) -> Result {
        for modification in self.activation_modifications() {
            modification.apply()?;
        }
        Ok(())
    }

    /// Check that the environment's interpreter reports the requested version.
    pub async fn verify(&self) -> Result {
        let reported = self.conda().python_version_in(&self.environment_name).await?;
        let found = crate::program::version::find_in_text(&reported)?;
        ensure!(
            version_matches_pin(&found, &self.python_version),
            "Environment {} has Python {}, but {} was requested.",
            self.environment_name,
            found,
            self.python_version
        );
        info!("Environment {} runs {}.", self.environment_name, reported);
        Ok(())
    }

    /// The whole bootstrap sequence: download, install, clean up the artifact, create the
    /// environment, activate it, verify the interpreter.
    pub async fn run(&self) -> Result {
        self.run_from(self.installer_url()?).await
    }

    /// Same sequence, with the installer coming from the given location.
    pub async fn run_from(&self, installer_url: Url) -> Result {
        info!("Bootstrapping conda on an {} worker.", self.os);
        info!("Downloading {}", installer_url);
        let cwd = std::env::current_dir()?;
        let installer = crate::io::download_to_dir(installer_url, &cwd).await?;
        self.install(&installer).await?;
        crate::fs::remove_file_if_exists(&installer)?;
        self.conda().require_present().await?;
        self.create_environment().await?;
        self.activate()?;
        self.verify().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_fixed_per_os() -> Result {
        assert_eq!(
            installer_url(OsKind::Linux)?.as_str(),
            "https://repo.continuum.io/miniconda/Miniconda3-latest-Linux-x86_64.sh"
        );
        assert_eq!(
            installer_url(OsKind::MacOS)?.as_str(),
            "https://repo.continuum.io/miniconda/Miniconda3-latest-MacOSX-x86_64.sh"
        );
        Ok(())
    }

    #[test]
    fn pin_matching() -> Result {
        let version = Version::parse("3.6.8")?;
        assert!(version_matches_pin(&version, "3"));
        assert!(version_matches_pin(&version, "3.6"));
        assert!(version_matches_pin(&version, "3.6.8"));
        assert!(!version_matches_pin(&version, "3.7"));
        assert!(!version_matches_pin(&version, "3.6.9"));
        assert!(!version_matches_pin(&version, "3.61"));
        assert!(!version_matches_pin(&version, ""));
        assert!(!version_matches_pin(&version, "3.6.8.1"));
        Ok(())
    }

    #[test]
    fn activation_covers_conda_variables_and_path() {
        let bootstrapper = Bootstrapper {
            os:               OsKind::Linux,
            python_version:   "3.6".into(),
            install_prefix:   PathBuf::from("/home/user/miniconda"),
            environment_name: "test-environment".into(),
        };
        let names = bootstrapper
            .activation_modifications()
            .into_iter()
            .map(|m| m.variable_name)
            .collect_vec();
        assert_eq!(names, vec!["CONDA_DEFAULT_ENV", "CONDA_PREFIX", "PATH", "PATH"]);
        assert_eq!(
            bootstrapper.environment_prefix(),
            PathBuf::from("/home/user/miniconda/envs/test-environment")
        );
    }
}
