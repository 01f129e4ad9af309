use anyhow::{Context, Result};

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if no browser handler is available. Callers treat this
/// as best-effort: the URL was still successfully produced.
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("failed to open browser for {}", url))?;
    Ok(())
}
