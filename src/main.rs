use conda_bootstrap::prelude::*;

use conda_bootstrap::bootstrap::Bootstrapper;
use conda_bootstrap::env::known;
use conda_bootstrap::env::Variable;
use conda_bootstrap::log::setup_logging;
use conda_bootstrap::platform::OsKind;

/// Install conda and create a named environment with a pinned Python version.
///
/// Every option falls back to the CI environment: the OS to TRAVIS_OS_NAME, the Python version
/// to PYTHON_VERSION, the prefix to ~/miniconda, the environment name to "test-environment".
#[derive(FromArgs, Debug)]
struct Args {
    /// target worker OS ("linux" or "osx"); defaults to TRAVIS_OS_NAME
    #[argh(option)]
    os: Option<OsKind>,

    /// python version to pin the environment to, e.g. "3.6"; defaults to PYTHON_VERSION
    #[argh(option)]
    python_version: Option<String>,

    /// installation prefix for the conda distribution
    #[argh(option)]
    prefix: Option<PathBuf>,

    /// name of the environment to create
    #[argh(option)]
    env_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result {
    setup_logging()?;
    let args: Args = argh::from_env();

    let os = match args.os {
        Some(os) => os,
        None => known::TravisOsName::fetch()?,
    };
    let python_version = match args.python_version {
        Some(version) => version,
        None => known::PythonVersion::fetch()?,
    };
    let mut bootstrapper = Bootstrapper::new(os, python_version)?;
    if let Some(prefix) = args.prefix {
        bootstrapper.install_prefix = prefix;
    }
    if let Some(env_name) = args.env_name {
        bootstrapper.environment_name = env_name;
    }

    bootstrapper.run().await
}
