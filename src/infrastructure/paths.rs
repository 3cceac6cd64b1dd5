//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`. `/host` points to the cwd
//! of the last focused terminal, or the folder Zellij was started in, which
//! for most setups is the home directory.

use std::path::PathBuf;

/// Data directory for plugin files (the span log).
///
/// # Examples
///
/// ```
/// use zevents::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/zevents"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zevents")
}

/// Maps a `~`-prefixed path onto the `/host` mount.
///
/// Used for the `theme_file` option so users can write `~/themes/x.toml`.
///
/// # Examples
///
/// ```
/// use zevents::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("/etc/zevents.toml"), "/etc/zevents.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
