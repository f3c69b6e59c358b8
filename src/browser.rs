//! Browser discovery.
//!
//! Looks for a locally installed Chrome or Chromium in the usual install
//! locations for the platform. The lookup is pure: the platform, the Windows
//! local app-data directory and the existence check are all passed in.

use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// The platform this binary was built for. Anything that is neither
    /// macOS nor Windows is probed like Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Well-known install paths for `platform`, in probe order.
pub fn candidate_paths(platform: Platform, local_app_data: Option<&Path>) -> Vec<PathBuf> {
    match platform {
        Platform::MacOs => vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ],
        Platform::Windows => {
            let mut paths = vec![
                PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
                PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
            ];
            if let Some(dir) = local_app_data {
                paths.push(dir.join(r"Google\Chrome\Application\chrome.exe"));
            }
            paths
        }
        Platform::Linux => vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium-browser"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/snap/bin/chromium"),
        ],
    }
}

/// First candidate for which `exists` returns true.
///
/// `None` means "let the rendering service find a browser itself".
pub fn resolve_render_engine(
    platform: Platform,
    local_app_data: Option<&Path>,
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    candidate_paths(platform, local_app_data)
        .into_iter()
        .find(|p| exists(p.as_path()))
}

/// [`resolve_render_engine`] against the real machine.
pub fn detect_render_engine() -> Option<PathBuf> {
    let local_app_data = env::var_os("LOCALAPPDATA").map(PathBuf::from);
    resolve_render_engine(Platform::current(), local_app_data.as_deref(), Path::exists)
}
