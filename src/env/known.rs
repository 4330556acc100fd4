use super::*;

use crate::platform::OsKind;

/// The CI-provided OS discriminator.
pub struct TravisOsName;
impl Variable for TravisOsName {
    const NAME: &'static str = "TRAVIS_OS_NAME";
    type Value = OsKind;
}

/// The Python version that the created environment is pinned to.
pub struct PythonVersion;
impl Variable for PythonVersion {
    const NAME: &'static str = "PYTHON_VERSION";
    type Value = String;
}
