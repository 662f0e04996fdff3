use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use gradeboard_core::{CycleReport, DashboardViewState};
use tokio::sync::watch;
use tokio::time::Instant;

#[derive(Default)]
struct Completion {
    at: Option<Instant>,
    report: Option<CycleReport>,
}

/// Single-writer store for the published view state and cycle bookkeeping.
///
/// Readers go through the `watch` channel: a snapshot is an `Arc` swap, so a
/// reader never sees fields from two different cycles.
pub(crate) struct Publisher {
    tx: watch::Sender<Arc<DashboardViewState>>,
    in_flight: AtomicBool,
    cycles: AtomicU64,
    completion: Mutex<Completion>,
}

impl Publisher {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(DashboardViewState::initial()));
        Self {
            tx,
            in_flight: AtomicBool::new(false),
            cycles: AtomicU64::new(0),
            completion: Mutex::new(Completion::default()),
        }
    }

    pub(crate) fn current(&self) -> Arc<DashboardViewState> {
        Arc::clone(&self.tx.borrow())
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<DashboardViewState>> {
        self.tx.subscribe()
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn next_cycle(&self) -> u64 {
        self.cycles.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Publish the previous snapshot with `is_loading` set.
    pub(crate) fn mark_loading(&self) {
        self.tx.send_modify(|s| *s = Arc::new(s.as_loading()));
    }

    /// Drop the loading flag without touching data (used when a cycle is abandoned).
    fn clear_loading(&self) {
        self.tx.send_if_modified(|s| {
            if !s.is_loading {
                return false;
            }
            *s = Arc::new(DashboardViewState {
                is_loading: false,
                ..(**s).clone()
            });
            true
        });
    }

    /// Record the cycle's completion and publish its final state.
    ///
    /// No await points: the cooldown timestamp and the published state always
    /// move together.
    pub(crate) fn complete(&self, state: DashboardViewState, report: CycleReport) {
        let mut done = self.completion.lock().expect("mutex poisoned");
        done.at = Some(Instant::now());
        done.report = Some(report);
        self.tx.send_replace(Arc::new(state));
    }

    pub(crate) fn last_completed(&self) -> Option<Instant> {
        self.completion.lock().expect("mutex poisoned").at
    }

    pub(crate) fn last_report(&self) -> Option<CycleReport> {
        self.completion.lock().expect("mutex poisoned").report.clone()
    }
}

/// Re-entrancy guard: at most one cycle holds it at a time.
///
/// Released on drop. If the owning cycle is dropped before it finishes (the
/// caller's future was cancelled), the loading flag is cleared so the UI is not
/// left spinning on the previous snapshot.
pub(crate) struct InFlight {
    publisher: Arc<Publisher>,
    finished: bool,
}

impl InFlight {
    pub(crate) fn try_begin(publisher: &Arc<Publisher>) -> Option<Self> {
        publisher
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                publisher: Arc::clone(publisher),
                finished: false,
            })
    }

    pub(crate) const fn finish(&mut self) {
        self.finished = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.finished {
            self.publisher.clear_loading();
        }
        self.publisher.in_flight.store(false, Ordering::Release);
    }
}
