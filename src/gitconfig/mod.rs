use std::process::Command;

/// Read-only key-value configuration lookup.
///
/// The mangler takes this as a capability so tests can substitute an
/// in-memory map instead of depending on the machine's git config.
pub trait ConfigStore {
    /// Look up a key. `None` means unset (or unreadable).
    fn get(&self, key: &str) -> Option<String>;
}

/// Configuration backed by `git config --get <key>`.
pub struct GitConfig;

impl ConfigStore for GitConfig {
    fn get(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["config", "--get", key])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\n', '\0'])
            .to_string();
        Some(value)
    }
}
