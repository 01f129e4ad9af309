use crate::gitconfig::ConfigStore;
use regex::Regex;
use thiserror::Error;

/// Config keys for the host override, following the hub convention.
const HOST_KEY: &str = "hub.host";
const PROTOCOL_KEY: &str = "hub.protocol";

#[derive(Debug, Error)]
pub enum MangleError {
    #[error("unsupported remote url: {0}")]
    UnsupportedUrl(String),

    #[error("invalid host: {0}")]
    InvalidHost(String),

    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Host, user and repo extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlParts {
    host: String,
    user: String,
    repo: String,
}

/// Classify a remote URL against the supported grammars, first match wins.
///
/// Supported shapes:
///   - `git@<host>:<user>/<repo>.git`
///   - `ssh://git@<host>/<user>/<repo>.git`
///   - `https://<anything>@<host>/<user>/<repo>[.git]`
///   - `https://<host>/<user>/<repo>[.git]`
///   - `git://<host>/<user>/<repo>.git`
///
/// Order matters: the embedded-username HTTPS form must be tried before
/// plain HTTPS, or the `user@` part would be folded into the host.
fn classify(url: &str) -> Option<UrlParts> {
    let grammars = [
        r"^git@([^:/]+):([^/]+)/(.+?)\.git$",
        r"^ssh://git@([^/]+)/([^/]+)/(.+?)\.git$",
        r"^https://[^@/]+@([^/]+)/([^/]+)/(.+?)(?:\.git)?$",
        r"^https://([^/]+)/([^/]+)/(.+?)(?:\.git)?$",
        r"^git://([^/]+)/([^/]+)/(.+?)\.git$",
    ];

    for pattern in grammars {
        let re = Regex::new(pattern).expect("remote url grammar");
        if let Some(m) = re.captures(url) {
            return Some(UrlParts {
                host: m[1].to_string(),
                user: m[2].to_string(),
                repo: m[3].to_string(),
            });
        }
    }

    None
}

/// Assemble the browser-facing URL for (host, user, repo).
///
/// github.com and bitbucket.org are built in; any other host must match
/// the configured `hub.host` override, using `hub.protocol` (default
/// https) as the scheme.
fn create_url(parts: &UrlParts, config: &impl ConfigStore) -> Result<String, MangleError> {
    let UrlParts { host, user, repo } = parts;

    if host == "github.com" || host == "bitbucket.org" {
        return Ok(format!("https://{}/{}/{}", host, user, repo));
    }

    let override_host = config.get(HOST_KEY).filter(|h| !h.is_empty());
    let Some(override_host) = override_host else {
        return Err(MangleError::InvalidHost(host.clone()));
    };

    let protocol = match config.get(PROTOCOL_KEY) {
        None => "https".to_string(),
        Some(p) if p.is_empty() => "https".to_string(),
        Some(p) if p == "http" || p == "https" => p,
        Some(p) => return Err(MangleError::UnsupportedProtocol(p)),
    };

    if *host != override_host {
        return Err(MangleError::InvalidHost(host.clone()));
    }

    Ok(format!("{}://{}/{}/{}", protocol, host, user, repo))
}

/// Convert a git remote URL into the corresponding web-hosting URL.
///
/// Pure with respect to `url` and the config snapshot; reads nothing else
/// and mutates nothing.
pub fn mangle_url(url: &str, config: &impl ConfigStore) -> Result<String, MangleError> {
    let parts = classify(url).ok_or_else(|| MangleError::UnsupportedUrl(url.to_string()))?;
    create_url(&parts, config)
}
