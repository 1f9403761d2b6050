//! OS helpers
//!
//! Best-effort page-cache drop so read phases measure disk, not RAM.
//! Failing is fine; the run continues with warm caches and says so.

use tracing::info;

/// Ask the OS to drop clean page caches
///
/// Linux only, and needs root to write `drop_caches`. Returns whether the
/// drop actually happened.
pub fn drop_page_caches() -> bool {
    #[cfg(target_os = "linux")]
    {
        use std::io::Write;

        // sync first so dirty pages are not pinned in the cache
        let synced = std::process::Command::new("sync").status();
        if !matches!(synced, Ok(s) if s.success()) {
            info!("sync failed; skipping page-cache drop");
            return false;
        }

        match std::fs::OpenOptions::new()
            .write(true)
            .open("/proc/sys/vm/drop_caches")
            .and_then(|mut f| f.write_all(b"3"))
        {
            Ok(()) => true,
            Err(_) => {
                info!("page-cache drop needs root; reads may hit warm caches");
                false
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        info!("page-cache drop not supported on this platform");
        false
    }
}
