//! Path handling for the Zellij sandbox.

use std::path::PathBuf;

/// Returns the directory holding the plugin's trace files.
///
/// In the sandbox `/host` is the cwd of the last focused terminal (usually
/// the home directory), so this resolves to
/// `~/.local/share/zellij/storefront` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("storefront")
}

/// Maps `~` and `~/..` onto the sandbox's `/host` mount.
///
/// ```
/// use zstorefront::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
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

/// Strips the `/host` prefix so a sandbox path reads like a host path.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_mount() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a/b.toml"), "/host/a/b.toml");
        assert_eq!(expand_tilde("~other/b.toml"), "~other/b.toml");
    }

    #[test]
    fn host_prefix_reads_as_home() {
        assert_eq!(
            strip_host_prefix("/host/.local/share/zellij/storefront/storefront-otlp.json"),
            "~/.local/share/zellij/storefront/storefront-otlp.json"
        );
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hostile/x"), "/hostile/x");
    }

    #[test]
    fn data_dir_lives_under_zellij_share() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/storefront"));
    }
}
