pub mod bash;
pub mod conda;

pub use bash::Bash;
pub use conda::Conda;
