use crate::prelude::*;

pub mod command;
pub mod resolver;
pub mod shell;
pub mod version;

pub use resolver::Resolver;
pub use shell::Shell;

/// A set of utilities for using a known external program.
///
/// The trait covers program lookup and process management.
// `Sized + 'static` bounds are due to using `Self` as type parameter for `Command` constructor.
#[async_trait]
pub trait Program: Sized + 'static {
    /// The name used to find and invoke the program.
    ///
    /// This should be just the stem name, not a full path. The os-specific executable extension
    /// should be skipped.
    fn executable_name() -> &'static str;

    /// If program can be found under more than one name, additional names are provided.
    ///
    /// The primary name is provided by [`Self::executable_name`].
    fn executable_name_fallback() -> Vec<&'static str> {
        vec![]
    }

    fn executable_names() -> Vec<&'static str> {
        let mut ret = vec![Self::executable_name()];
        ret.extend(Self::executable_name_fallback());
        ret
    }

    fn default_locations(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn pretty_name() -> &'static str {
        Self::executable_name()
    }

    /// Locate the program executable.
    ///
    /// The lookup locations are program-defined, they typically include Path environment variable
    /// and program-specific default locations.
    fn lookup(&self) -> Result<PathBuf> {
        Resolver::new(Self::executable_names(), self.default_locations()).lookup()
    }

    async fn require_present(&self) -> Result<String> {
        let version = self.version_string().await?;
        info!("Found {}: {}", Self::executable_name(), version);
        Ok(version)
    }

    fn cmd(&self) -> Result<Command> {
        let tokio_command = self.lookup().map(tokio::process::Command::new)?;
        let mut command = Command::new_over::<Self>(tokio_command);
        if let Some(current_dir) = self.current_directory() {
            command.current_dir(current_dir);
        }
        Ok(command)
    }

    fn current_directory(&self) -> Option<PathBuf> {
        None
    }

    fn handle_exit_status(status: std::process::ExitStatus) -> Result {
        if status.success() {
            Ok(())
        } else {
            bail!("{} exited with status {}", Self::pretty_name(), status)
        }
    }

    /// Command that prints to stdout the version of given program.
    ///
    /// If this is anything other than `--version` the implementor should overwrite this method.
    fn version_command(&self) -> Result<Command> {
        let mut cmd = self.cmd()?;
        cmd.arg("--version");
        Ok(cmd)
    }

    async fn version_string(&self) -> Result<String> {
        let output = self.version_command()?.output_ok().await?;
        let string = String::from_utf8(output.stdout)?;
        Ok(string.trim().to_string())
    }
}
