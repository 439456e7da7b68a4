//! Deferred scrolling of a freshly opened picker.
//!
//! A picker list has to be laid out before it can be scrolled, so the scroll
//! runs once after a fixed delay. Each open supersedes the previous one and a
//! close cancels whatever is pending; a task that wakes up after either
//! simply does nothing. A cancel that races with a scroll already firing
//! blocks until its callback has returned, so nothing scrolls after a close.

use std::{
    future::Future,
    sync::{Arc, OnceLock},
    time::Duration,
};

use parking_lot::{Mutex, ReentrantMutex};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::{debug, trace};

use crate::{dp::Dp, error::CalendarError, picker_position::PickerQuery};

/// Receives the scroll offset once the picker has been laid out.
pub type ScrollCallback = Arc<dyn Fn(Dp) + Send + Sync>;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> Result<&'static Runtime, CalendarError> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("medcal-picker-scroll")
        .enable_time()
        .build()?;
    Ok(RUNTIME.get_or_init(|| runtime))
}

fn spawn<F>(future: F) -> Result<(), CalendarError>
where
    F: Future<Output = ()> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => {
            runtime()?.spawn(future);
        }
    }
    Ok(())
}

#[derive(Debug, Default)]
struct ScrollSlot {
    generation: u64,
    pending: Option<u64>,
}

/// Identifies one scheduled scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicket(u64);

/// Schedules at most one pending picker scroll at a time.
#[derive(Clone, Default)]
pub struct PickerScrollScheduler {
    slot: Arc<Mutex<ScrollSlot>>,
    // Held while a callback runs; reentrant so the callback may cancel.
    firing: Arc<ReentrantMutex<()>>,
}

fn fire(
    slot: &Mutex<ScrollSlot>,
    firing: &ReentrantMutex<()>,
    generation: u64,
    offset: Dp,
    on_scroll: &ScrollCallback,
) {
    let _firing = firing.lock();
    let fire = {
        let mut slot = slot.lock();
        if slot.pending == Some(generation) {
            slot.pending = None;
            true
        } else {
            false
        }
    };
    if fire {
        debug!(generation, offset = offset.0, "scrolling picker");
        on_scroll(offset);
    } else {
        trace!(generation, "picker scroll superseded");
    }
}

impl PickerScrollScheduler {
    /// Creates an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `on_scroll` with the offset of `query` after `delay`, unless
    /// [`cancel`](Self::cancel) or another `schedule` happens first.
    ///
    /// Spawns on the caller's tokio runtime when there is one, otherwise on a
    /// shared background runtime.
    pub fn schedule(
        &self,
        query: PickerQuery,
        delay: Duration,
        on_scroll: ScrollCallback,
    ) -> Result<ScrollTicket, CalendarError> {
        let generation = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            slot.pending = Some(slot.generation);
            slot.generation
        };

        let slot = self.slot.clone();
        let firing = self.firing.clone();
        let offset = query.offset();
        let spawned = spawn(async move {
            tokio::time::sleep(delay).await;
            fire(&slot, &firing, generation, offset, &on_scroll);
        });

        if let Err(err) = spawned {
            self.slot.lock().pending = None;
            return Err(err);
        }
        Ok(ScrollTicket(generation))
    }

    /// Drops the pending scroll, if any.
    ///
    /// If a scroll callback is running on another thread, waits for it to
    /// return first.
    pub fn cancel(&self) {
        let _firing = self.firing.lock();
        let mut slot = self.slot.lock();
        if let Some(generation) = slot.pending.take() {
            trace!(generation, "picker scroll cancelled");
        }
    }

    /// Returns true while a scroll is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().pending.is_some()
    }

    /// Returns true while `ticket` is the scroll waiting to fire.
    pub fn is_pending_ticket(&self, ticket: ScrollTicket) -> bool {
        self.slot.lock().pending == Some(ticket.0)
    }
}

impl std::fmt::Debug for PickerScrollScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerScrollScheduler")
            .field("pending", &self.is_pending())
            .finish()
    }
}
