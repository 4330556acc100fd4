pub mod web;

use crate::prelude::*;

use reqwest::IntoUrl;

/// Take the trailing filename from URL path.
///
/// ```
/// use std::path::PathBuf;
/// use url::Url;
/// use conda_bootstrap::io::filename_from_url;
/// let url = Url::parse("https://repo.continuum.io/miniconda/Miniconda3-latest-Linux-x86_64.sh")
///     .unwrap();
/// assert_eq!(filename_from_url(&url).unwrap(), PathBuf::from("Miniconda3-latest-Linux-x86_64.sh"));
/// ```
pub fn filename_from_url(url: &Url) -> Result<PathBuf> {
    let filename = url
        .path_segments()
        .ok_or_else(|| anyhow!("Cannot split URL '{}' into path segments!", url))?
        .last()
        .ok_or_else(|| anyhow!("No segments in path for URL '{}'", url))?;
    ensure!(!filename.is_empty(), "URL '{}' does not end with a filename segment.", url);
    Ok(PathBuf::from(filename))
}

/// Download a file from URL into the given directory, named after the URL's trailing segment.
///
/// Returns the path of the downloaded file.
pub async fn download_to_dir(url: impl IntoUrl, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let url = url.into_url()?;
    let filename = filename_from_url(&url)?;
    let output_path = output_dir.as_ref().join(filename);
    web::download_file(url, &output_path).await?;
    Ok(output_path)
}
