//! Tokio Runtime
//!
//! The controller is synchronous and lives on the caller's thread; fetches and
//! timers need tokio. The binary gets a lazily created process runtime from
//! here and hands its `Handle` to the service hub.
//!
//! ```text
//! controller (caller thread)
//!       │ ServiceHub::fetch_*
//!       ▼
//! Handle::spawn(async { ... })
//!       │ ServiceEvent
//!       ▼
//! crossbeam channel ──▶ controller.process_events()
//! ```

use std::sync::OnceLock;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::Result;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("axie-sales-io")
        .build()?;
    tracing::debug!("Tokio runtime started");

    // A runtime built by a racing caller is dropped here unused.
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Handle to the process runtime, for `ServiceHub::new`
pub fn runtime_handle() -> Result<Handle> {
    Ok(get_runtime()?.handle().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_on_process_runtime() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        let handle = runtime_handle().expect("runtime");
        handle.spawn(async move {
            flag_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn runtime_is_created_once() {
        runtime_handle().expect("runtime");
        let first = get_runtime().expect("runtime") as *const Runtime;
        let second = get_runtime().expect("runtime") as *const Runtime;
        assert_eq!(first, second);
    }
}
