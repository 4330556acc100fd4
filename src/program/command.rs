use crate::prelude::*;
use anyhow::Context;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::process::ExitStatus;
use std::process::Output;

/// A [`tokio::process::Command`] wrapper that knows how the underlying program interprets its
/// exit codes.
pub struct Command {
    pub inner:          tokio::process::Command,
    pub status_checker: Arc<dyn Fn(ExitStatus) -> Result + Send + Sync>,
}

impl Debug for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl Command {
    pub fn new_over<P: Program + 'static>(inner: tokio::process::Command) -> Self {
        Command { inner, status_checker: Arc::new(P::handle_exit_status) }
    }

    pub fn describe(&self) -> String {
        format!("{:?}", self.inner.as_std())
    }

    pub fn run_ok(&mut self) -> BoxFuture<'static, Result<()>> {
        let pretty = self.describe();
        debug!("Will run: {}", pretty);
        let status = self.inner.status();
        let status_checker = self.status_checker.clone();
        async move {
            let status = status.await?;
            status_checker(status).context(format!("Command failed: {}", pretty))
        }
        .boxed()
    }

    pub fn output_ok(&mut self) -> BoxFuture<'static, Result<Output>> {
        let pretty = self.describe();
        debug!("Will run: {}", pretty);
        let output = self.inner.output();
        let status_checker = self.status_checker.clone();
        async move {
            let output = output.await.context(format!("Command failed to start: {}", pretty))?;
            status_checker(output.status).with_context(|| {
                format!(
                    "Command failed: {}. Stderr: {}",
                    pretty,
                    String::from_utf8_lossy(&output.stderr)
                )
            })?;
            Ok(output)
        }
        .boxed()
    }
}

impl Command {
    pub fn arg<S: AsRef<OsStr>>(&mut self, arg: S) -> &mut Command {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>, {
        self.inner.args(args);
        self
    }

    pub fn current_dir<P: AsRef<Path>>(&mut self, dir: P) -> &mut Command {
        self.inner.current_dir(dir);
        self
    }
}
