use crate::prelude::*;

/// The conda package manager.
///
/// By default it is looked up on `PATH` and in the location advertised by the `CONDA`
/// environment variable. A conda rooted in a concrete installation prefix (e.g. one that was
/// just installed) can be obtained with [`Conda::under`].
#[derive(Clone, Debug, Default)]
pub struct Conda {
    pub prefix: Option<PathBuf>,
}

impl Conda {
    pub fn under(prefix: impl Into<PathBuf>) -> Self {
        Self { prefix: Some(prefix.into()) }
    }

    /// Command that creates a named environment pinned to the given Python version.
    ///
    /// Quiet and non-interactive: any confirmation prompt is answered automatically.
    pub fn create_command(
        &self,
        environment_name: &str,
        python_version: &str,
    ) -> Result<Command> {
        let mut cmd = self.cmd()?;
        cmd.args(["create", "-q", "-y", "-n", environment_name]);
        cmd.arg(format!("python={python_version}"));
        Ok(cmd)
    }

    pub async fn create_environment(
        &self,
        environment_name: &str,
        python_version: &str,
    ) -> Result {
        self.create_command(environment_name, python_version)?.run_ok().await
    }

    /// Command that runs a program inside a named environment.
    pub fn run_in(
        &self,
        environment_name: &str,
        program: &str,
        args: impl IntoIterator<Item: AsRef<OsStr>>,
    ) -> Result<Command> {
        let mut cmd = self.cmd()?;
        cmd.args(["run", "-n", environment_name, program]);
        cmd.args(args);
        Ok(cmd)
    }

    /// The version string reported by the Python interpreter inside a named environment.
    pub async fn python_version_in(&self, environment_name: &str) -> Result<String> {
        let output = self.run_in(environment_name, "python", ["--version"])?.output_ok().await?;
        // Old Pythons report the version on stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let text = if stdout.trim().is_empty() { stderr } else { stdout };
        Ok(text.trim().to_string())
    }
}

impl Program for Conda {
    fn executable_name() -> &'static str {
        "conda"
    }

    fn default_locations(&self) -> Vec<PathBuf> {
        let mut ret = Vec::new();
        if let Some(prefix) = &self.prefix {
            ret.push(prefix.join("bin"));
        }
        if let Some(path) = std::env::var_os("CONDA") {
            let path = PathBuf::from(path);
            ret.push(path.join("bin"));
            ret.push(path);
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fake_conda(prefix: &Path) -> Result {
        crate::fs::write(prefix.join("bin").join("conda"), "#!/bin/sh\nexit 0\n")
    }

    #[test]
    fn create_command_arguments() -> Result {
        let dir = tempdir()?;
        fake_conda(dir.path())?;
        let conda = Conda::under(dir.path());
        let cmd = conda.create_command("test-environment", "3.6")?;
        let args = cmd.inner.as_std().get_args().map(|s| s.to_string_lossy().to_string());
        assert_eq!(args.collect_vec(), vec![
            "create",
            "-q",
            "-y",
            "-n",
            "test-environment",
            "python=3.6"
        ]);
        Ok(())
    }

    #[test]
    fn run_command_arguments() -> Result {
        let dir = tempdir()?;
        fake_conda(dir.path())?;
        let conda = Conda::under(dir.path());
        let cmd = conda.run_in("test-environment", "python", ["--version"])?;
        let args = cmd.inner.as_std().get_args().map(|s| s.to_string_lossy().to_string());
        assert_eq!(args.collect_vec(), vec![
            "run",
            "-n",
            "test-environment",
            "python",
            "--version"
        ]);
        Ok(())
    }

    #[test]
    fn prefix_takes_precedence_in_lookup() -> Result {
        let dir = tempdir()?;
        fake_conda(dir.path())?;
        let conda = Conda::under(dir.path());
        assert_eq!(conda.lookup()?, dir.path().join("bin").join("conda"));
        Ok(())
    }
}
