pub mod anyhow;
pub mod bootstrap;
pub mod env;
pub mod extensions;
pub mod fs;
pub mod io;
pub mod log;
pub mod platform;
pub mod program;
pub mod programs;

pub mod prelude {
    pub type Result<T = ()> = anyhow::Result<T>;
    pub use anyhow::anyhow;
    pub use anyhow::bail;
    pub use anyhow::ensure;
    pub use argh::FromArgs;
    pub use async_trait::async_trait;
    pub use fn_error_context::context;
    pub use futures_util::future::BoxFuture;
    pub use futures_util::FutureExt;
    pub use futures_util::Stream;
    pub use futures_util::StreamExt;
    pub use futures_util::TryFutureExt;
    pub use futures_util::TryStreamExt;
    pub use itertools::Itertools;
    pub use semver::Version;
    pub use std::borrow::Cow;
    pub use std::ffi::OsStr;
    pub use std::ffi::OsString;
    pub use std::fmt::Display;
    pub use std::future::ready;
    pub use std::future::Future;
    pub use std::iter::once;
    pub use std::path::Path;
    pub use std::path::PathBuf;
    pub use std::str::FromStr;
    pub use std::sync::Arc;
    pub use tokio::io::AsyncWriteExt;
    pub use tracing::debug;
    pub use tracing::info;
    pub use tracing::warn;
    pub use url::Url;

    pub use crate::anyhow::ResultExt;
    pub use crate::extensions::path::PathExt;
    pub use crate::program::command::Command;
    pub use crate::program::Program;
    pub use crate::program::Shell;
}

/// Check if the environment suggests that we are being run in a CI.
pub fn run_in_ci() -> bool {
    std::env::var("CI").is_ok()
}
