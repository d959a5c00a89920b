//! Owned handle for the repeating tick.
//!
//! Dropping a handle cancels its callback. [`Ticker`] holds at most one
//! handle and drops the old one before scheduling a new one, so two live
//! tick sources can never decrement the countdown twice.

use log::debug;

/// Something that can run a callback every `interval_ms` until the returned
/// handle is dropped.
pub trait TickSource {
    type Handle;

    fn every<F>(&self, interval_ms: u32, on_tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

pub struct Ticker<S: TickSource> {
    source: S,
    active: Option<S::Handle>,
}

impl<S: TickSource> Ticker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            active: None,
        }
    }

    /// Replace the live tick (if any) with a new one.
    pub fn restart<F>(&mut self, interval_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        self.active = Some(self.source.every(interval_ms, on_tick));
        debug!("tick source scheduled every {}ms", interval_ms);
    }

    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            debug!("tick source released");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
