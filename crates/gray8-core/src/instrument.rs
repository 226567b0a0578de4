//! Pixel-access instrumentation.
//!
//! Operations report how many pixel reads and writes they perform to an
//! optional [`PixelObserver`] attached to the image. This is purely for
//! measuring algorithm cost; attaching or detaching an observer never
//! changes computed pixels.
//!
//! # Counting Rules
//!
//! - `get_pixel` / `set_pixel`: 1 access each
//! - Bulk operations: one access per pixel read plus one per pixel written
//! - PGM load/save: one access per pixel copied
//!
//! # Example
//!
//! ```ignore
//! let counter = AccessCounter::new("pixmem");
//! image.attach_observer(counter.clone());
//! negative(&mut image);
//! println!("{} accesses", counter.count());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Receives pixel-access counts from image operations.
pub trait PixelObserver: Send + Sync {
    /// Called with the number of pixel accesses an operation performed.
    fn record(&self, accesses: u64);
}

/// A named, thread-safe pixel-access counter.
///
/// Clones share the same count, so one clone can be attached to an image
/// while another is kept for reading.
#[derive(Debug, Clone)]
pub struct AccessCounter {
    inner: Arc<CounterState>,
}

#[derive(Debug)]
struct CounterState {
    name: String,
    count: AtomicU64,
}

/// Snapshot of a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationReport {
    /// Counter name (e.g. "pixmem")
    pub name: String,
    /// Accesses recorded since the last reset
    pub count: u64,
}

impl AccessCounter {
    /// Create a counter starting at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(CounterState {
                name: name.into(),
                count: AtomicU64::new(0),
            }),
        }
    }

    /// Counter name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Accesses recorded since creation or the last reset.
    pub fn count(&self) -> u64 {
        self.inner.count.load(Ordering::Relaxed)
    }

    /// Zero the counter.
    pub fn reset(&self) {
        self.inner.count.store(0, Ordering::Relaxed);
    }

    /// Take a snapshot of the counter.
    pub fn report(&self) -> InstrumentationReport {
        InstrumentationReport {
            name: self.inner.name.clone(),
            count: self.count(),
        }
    }
}

impl PixelObserver for AccessCounter {
    fn record(&self, accesses: u64) {
        self.inner.count.fetch_add(accesses, Ordering::Relaxed);
    }
}
