use regex::Regex;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// One configured git remote, as reported by `git remote -v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: String,
    /// Typically "fetch" or "push".
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no such directory: {0}")]
    MissingDir(String),

    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git remote -v failed: {0}")]
    GitFailed(std::process::ExitStatus),
}

/// List the remotes configured in the repository at `dir`.
///
/// Spawns `git remote -v` with `dir` as working directory and parses its
/// output line by line. Lines that don't look like
/// `<name> <url> (<kind>)` are skipped. A repository with no remotes
/// yields an empty vec.
pub fn list_remotes(dir: &Path) -> Result<Vec<Remote>, RemoteError> {
    if !dir.is_dir() {
        return Err(RemoteError::MissingDir(dir.display().to_string()));
    }

    let output = Command::new("git")
        .args(["remote", "-v"])
        .current_dir(dir)
        .stderr(Stdio::inherit())
        .output()?;

    if !output.status.success() {
        return Err(RemoteError::GitFailed(output.status));
    }

    let re = Regex::new(r"^(\S+)\s+(\S+)\s+\((\S+)\)").expect("remote line pattern");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let remotes = stdout
        .lines()
        .filter_map(|line| {
            re.captures(line).map(|m| Remote {
                name: m[1].to_string(),
                url: m[2].to_string(),
                kind: m[3].to_string(),
            })
        })
        .collect();

    Ok(remotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn git(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("not_found");

        let err = list_remotes(&gone).unwrap_err();
        assert!(matches!(err, RemoteError::MissingDir(_)));
        assert!(err.to_string().contains("not_found"));
    }

    #[test]
    fn test_not_a_repository() {
        let dir = tempdir().unwrap();

        let err = list_remotes(dir.path()).unwrap_err();
        assert!(matches!(err, RemoteError::GitFailed(_)));
    }

    #[test]
    fn test_lists_remotes_in_order() {
        let dir = tempdir().unwrap();
        if !git(dir.path(), &["init"]) {
            return; // git not installed
        }
        assert!(git(
            dir.path(),
            &["remote", "add", "origin", "git@github.com:username/repo.git"]
        ));
        assert!(git(
            dir.path(),
            &["remote", "add", "upstream", "https://github.com/upstream/repo.git"]
        ));

        let remotes = list_remotes(dir.path()).unwrap();

        // git remote -v prints one fetch and one push line per remote,
        // alphabetically by name
        assert_eq!(remotes.len(), 4);
        assert_eq!(remotes[0].name, "origin");
        assert_eq!(remotes[0].url, "git@github.com:username/repo.git");
        assert_eq!(remotes[0].kind, "fetch");
        assert_eq!(remotes[1].kind, "push");
        assert_eq!(remotes[2].name, "upstream");
        assert_eq!(remotes[2].url, "https://github.com/upstream/repo.git");
    }

    #[test]
    fn test_no_remotes_is_empty_not_error() {
        let dir = tempdir().unwrap();
        if !git(dir.path(), &["init"]) {
            return;
        }

        let remotes = list_remotes(dir.path()).unwrap();
        assert!(remotes.is_empty());
    }
}
