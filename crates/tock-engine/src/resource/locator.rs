use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::{LazyLock, OnceLock};

use anyhow::Result;

/// Name of the asset root directory.
pub const RESOURCE_DIR: &str = "res";

/// Path segments the asset root is placed beside.
///
/// `src` for binaries built inside a source tree, `target` for cargo builds.
/// The last matching segment in the executable path wins.
const ANCHORS: [&str; 2] = ["src", "target"];

type BasePathFn = dyn Fn() -> io::Result<PathBuf> + Send + Sync;

static LOCATOR: LazyLock<ResourceLocator> = LazyLock::new(ResourceLocator::from_executable);

/// Returns the process-wide resource path for `sub_dir` (see [`ResourceLocator::resource_path`]).
pub fn resource_path(sub_dir: &str) -> String {
    LOCATOR.resource_path(sub_dir)
}

/// Resolves `name` inside the process-wide resource root.
///
/// Fails when the root could not be determined; nothing asset-dependent
/// should run after that.
pub fn require_resource_file(name: &str) -> Result<PathBuf> {
    LOCATOR.require_file(name)
}

/// Locates the asset root relative to a base directory and caches it.
///
/// The base directory normally comes from the running executable. The cache is
/// only filled on success, so a transient failure is retried on the next call.
pub struct ResourceLocator {
    base_path: Box<BasePathFn>,
    root: OnceLock<String>,
}

impl ResourceLocator {
    /// Locator anchored at the directory containing the current executable.
    pub fn from_executable() -> Self {
        Self::with_base_path(executable_dir)
    }

    /// Locator with a custom base-directory provider.
    pub fn with_base_path<F>(base_path: F) -> Self
    where
        F: Fn() -> io::Result<PathBuf> + Send + Sync + 'static,
    {
        Self {
            base_path: Box::new(base_path),
            root: OnceLock::new(),
        }
    }

    /// Returns the absolute path of `sub_dir` under the asset root, with a
    /// trailing separator. An empty `sub_dir` yields the root itself.
    ///
    /// Returns an empty string (after logging) when the base directory cannot
    /// be determined.
    pub fn resource_path(&self, sub_dir: &str) -> String {
        let Some(root) = self.root() else {
            return String::new();
        };

        if sub_dir.is_empty() {
            root.to_string()
        } else {
            format!("{root}{sub_dir}{MAIN_SEPARATOR}")
        }
    }

    /// Resolves `name` as a file directly inside the asset root.
    pub fn require_file(&self, name: &str) -> Result<PathBuf> {
        let root = self.resource_path("");
        anyhow::ensure!(
            !root.is_empty(),
            "resource directory is unavailable; cannot locate {name:?}"
        );
        Ok(Path::new(&root).join(name))
    }

    fn root(&self) -> Option<&str> {
        if let Some(root) = self.root.get() {
            return Some(root.as_str());
        }

        match (self.base_path)() {
            Ok(base) => {
                let root = self
                    .root
                    .get_or_init(|| resource_root(&base.to_string_lossy()));
                log::info!("resource root: {root}");
                Some(root.as_str())
            }
            Err(err) => {
                log::error!("error getting resource path: {err}");
                None
            }
        }
    }
}

fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path {} has no parent directory", exe.display()),
        )
    })
}

/// Builds the asset root for `base`: cut at the last anchor segment and append
/// `res/`, or append `res/` to `base` when no anchor is present.
fn resource_root(base: &str) -> String {
    let mut base = base.to_string();
    if !base.ends_with(MAIN_SEPARATOR) {
        base.push(MAIN_SEPARATOR);
    }

    let cut = ANCHORS
        .iter()
        .filter_map(|anchor| base.rfind(&format!("{MAIN_SEPARATOR}{anchor}{MAIN_SEPARATOR}")))
        .max()
        .map_or(base.len(), |sep| sep + 1);

    format!("{}{RESOURCE_DIR}{MAIN_SEPARATOR}", &base[..cut])
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed(base: &'static str) -> ResourceLocator {
        ResourceLocator::with_base_path(move || Ok(PathBuf::from(base)))
    }

    // ── root computation ──────────────────────────────────────────────────

    #[test]
    fn root_is_sibling_of_src() {
        assert_eq!(resource_root("/home/me/clock/src/"), "/home/me/clock/res/");
        assert_eq!(resource_root("/home/me/clock/src/build"), "/home/me/clock/res/");
    }

    #[test]
    fn root_is_sibling_of_target() {
        assert_eq!(resource_root("/work/tock/target/debug"), "/work/tock/res/");
    }

    #[test]
    fn last_anchor_wins() {
        assert_eq!(resource_root("/home/me/src/tock/target/release/"), "/home/me/src/tock/res/");
        assert_eq!(resource_root("/opt/target/app/src/"), "/opt/target/app/res/");
    }

    #[test]
    fn anchors_match_whole_segments() {
        // "srcs" and "mytarget" contain the anchor text but are not anchor segments.
        assert_eq!(resource_root("/opt/srcs/bin"), "/opt/srcs/bin/res/");
        assert_eq!(resource_root("/opt/mytarget"), "/opt/mytarget/res/");
    }

    #[test]
    fn no_anchor_appends_to_base() {
        assert_eq!(resource_root("/usr/local/bin/"), "/usr/local/bin/res/");
    }

    // ── resource_path ─────────────────────────────────────────────────────

    #[test]
    fn sub_dir_gets_trailing_separator() {
        let loc = fixed("/work/tock/target/debug");
        assert_eq!(loc.resource_path(""), "/work/tock/res/");
        assert_eq!(loc.resource_path("fonts"), "/work/tock/res/fonts/");
    }

    #[test]
    fn resolution_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let loc = ResourceLocator::with_base_path(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(PathBuf::from("/work/tock/target/debug"))
        });

        let first = loc.resource_path("");
        let second = loc.resource_path("");
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn process_wide_path_is_stable() {
        assert_eq!(resource_path(""), resource_path(""));
    }

    #[test]
    fn platform_failure_yields_empty_path_and_is_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let loc = ResourceLocator::with_base_path(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::new(io::ErrorKind::Unsupported, "no base path"))
        });

        assert_eq!(loc.resource_path(""), "");
        assert_eq!(loc.resource_path("fonts"), "");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn require_file_fails_without_root() {
        let loc = ResourceLocator::with_base_path(|| {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no base path"))
        });
        let err = loc.require_file("sample.ttf").unwrap_err();
        assert!(err.to_string().contains("sample.ttf"));
    }

    #[test]
    fn require_file_joins_root() {
        let loc = fixed("/work/tock/target/debug");
        assert_eq!(
            loc.require_file("sample.ttf").unwrap(),
            PathBuf::from("/work/tock/res/sample.ttf")
        );
    }
}
