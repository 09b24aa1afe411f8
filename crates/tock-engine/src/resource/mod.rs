//! Bundled asset lookup.
//!
//! Assets live in a `res` directory that sits beside the source/build tree the
//! executable was launched from. The root is resolved once per process.

mod locator;

pub use locator::{require_resource_file, resource_path, ResourceLocator, RESOURCE_DIR};
