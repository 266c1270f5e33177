//! Common test utilities

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Installs a subscriber writing through the test harness once per test binary. `RUST_LOG`
/// picks the level, `warn` by default so the per-node trace events stay quiet.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// An ordered value that bumps a shared counter when it is dropped, so tests can tell how
/// many values a tree released.
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
