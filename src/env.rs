use crate::prelude::*;
use anyhow::Context;
use std::collections::BTreeSet;
use std::env::join_paths;
use std::env::split_paths;

pub mod known;

const PATH_ENVIRONMENT_NAME: &str = "PATH";

pub fn expect_var(name: impl AsRef<str>) -> Result<String> {
    let name = name.as_ref();
    std::env::var(name).context(anyhow!("Missing environment variable {}", name))
}

/// An environment variable with a known name and a typed value.
pub trait Variable {
    const NAME: &'static str;
    type Value: FromStr;

    fn fetch() -> Result<Self::Value>
    where <Self::Value as FromStr>::Err: Into<anyhow::Error> {
        let text = expect_var(Self::NAME)?;
        text.parse()
            .anyhow_err()
            .context(anyhow!("Failed to parse the value of {}: {}", Self::NAME, text))
    }
}

pub fn prepend_to_path(path: impl Into<PathBuf>) -> Result {
    let old_value = std::env::var_os(PATH_ENVIRONMENT_NAME);
    let old_pieces = old_value.iter().flat_map(split_paths);
    let new_pieces = once(path.into()).chain(old_pieces);
    let new_value = join_paths(new_pieces)?;
    std::env::set_var(PATH_ENVIRONMENT_NAME, new_value);
    Ok(())
}

#[derive(Clone, Debug)]
pub enum Action {
    Remove,
    Set(String),
    PrependPaths(Vec<PathBuf>),
}

#[derive(Clone, Debug)]
pub struct Modification {
    pub variable_name: String,
    pub action:        Action,
}

impl Modification {
    pub fn set(variable_name: impl Into<String>, value: impl Display) -> Self {
        Self { variable_name: variable_name.into(), action: Action::Set(value.to_string()) }
    }

    pub fn prepend_path(variable_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { variable_name: variable_name.into(), action: Action::PrependPaths(vec![path.into()]) }
    }

    pub fn apply(&self) -> Result {
        let name = self.variable_name.as_str();
        match &self.action {
            Action::Remove => {
                debug!("Removing {}", name);
                std::env::remove_var(name)
            }
            Action::Set(value) => {
                debug!("Setting {}={}", name, value);
                std::env::set_var(name, value);
            }
            Action::PrependPaths(paths_to_prepend) =>
                if let Ok(old_value) = std::env::var(name) {
                    debug!("Prepending to {} the following paths: {:?}", name, paths_to_prepend);
                    let new_paths_set = paths_to_prepend.iter().collect::<BTreeSet<_>>();
                    let old_paths = split_paths(&old_value).collect_vec();

                    let old_paths_filtered =
                        old_paths.iter().filter(|old_path| !new_paths_set.contains(old_path));
                    let new_value = join_paths(paths_to_prepend.iter().chain(old_paths_filtered))?;
                    std::env::set_var(name, new_value);
                } else {
                    let new_value = join_paths(paths_to_prepend)?;
                    std::env::set_var(name, new_value);
                },
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_var_missing() {
        assert!(expect_var("CONDA_BOOTSTRAP_NO_SUCH_VARIABLE").is_err());
    }

    #[test]
    fn modification_set_and_remove() -> Result {
        let name = "CONDA_BOOTSTRAP_TEST_SET_VAR";
        Modification::set(name, "some-value").apply()?;
        assert_eq!(std::env::var(name)?, "some-value");
        Modification { variable_name: name.into(), action: Action::Remove }.apply()?;
        assert!(std::env::var(name).is_err());
        Ok(())
    }

    #[test]
    fn modification_prepend_deduplicates() -> Result {
        let name = "CONDA_BOOTSTRAP_TEST_PATH_VAR";
        let first = PathBuf::from("/opt/first");
        let second = PathBuf::from("/opt/second");
        Modification::prepend_path(name, &first).apply()?;
        Modification::prepend_path(name, &second).apply()?;
        // Prepending an already-present entry must not duplicate it.
        Modification::prepend_path(name, &second).apply()?;
        let value = std::env::var(name)?;
        let pieces = split_paths(&value).collect_vec();
        assert_eq!(pieces, vec![second, first]);
        std::env::remove_var(name);
        Ok(())
    }
}
