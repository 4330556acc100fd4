use crate::prelude::*;

/// A program that can execute scripts.
pub trait Shell: Program {
    fn run_script(&self, script_path: impl AsRef<Path>) -> Result<Command>;
}
