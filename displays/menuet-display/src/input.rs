//! Input sources and the event pump
//!
//! Encoders, buttons or a remote display deliver [`NavigationEvent`]s
//! through an [`InputSource`]. [`pump`] drains a source into a navigator
//! from the single input loop that owns it.

use heapless::Deque;
use menuet_core::{LineSink, MenuError, NavigationEvent, Navigator};

/// Anything that can produce navigation events
pub trait InputSource {
    /// Next pending event, `None` when nothing is waiting
    fn poll(&mut self) -> Option<NavigationEvent>;
}

/// Bounded FIFO of events, filled from an interrupt or a receive task
pub struct EventQueue<const N: usize> {
    events: Deque<NavigationEvent, N>,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Queue an event, handing it back if the queue is full
    pub fn push(&mut self, event: NavigationEvent) -> Result<(), NavigationEvent> {
        let result = self.events.push_back(event);
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Input queue full, dropping {:?}", event);
        }
        result
    }

    /// Queue one step per detent of an encoder rotation
    ///
    /// Returns the number of steps queued.
    pub fn push_rotation(&mut self, delta: i8) -> usize {
        let Some(event) = NavigationEvent::from_rotation(delta) else {
            return 0;
        };
        let mut queued = 0;
        for _ in 0..delta.unsigned_abs() {
            if self.push(event).is_err() {
                break;
            }
            queued += 1;
        }
        queued
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> InputSource for EventQueue<N> {
    fn poll(&mut self) -> Option<NavigationEvent> {
        self.events.pop_front()
    }
}

/// Outcome counts of one [`pump`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpReport {
    /// Events taken from the source
    pub handled: usize,
    /// Events refused at a list or value boundary
    pub boundaries: usize,
    /// Events that hit a wiring fault (no tree, no sink, bad node type)
    pub faults: usize,
    /// Last error other than a boundary
    pub last_error: Option<MenuError>,
}

/// Feed every pending event of `source` to `navigator`
pub fn pump<S, I, const N: usize>(navigator: &mut Navigator<'_, S, N>, source: &mut I) -> PumpReport
where
    S: LineSink,
    I: InputSource + ?Sized,
{
    let mut report = PumpReport::default();
    while let Some(event) = source.poll() {
        report.handled += 1;
        match navigator.handle(event) {
            Ok(()) => {}
            Err(e) if e.is_boundary() => report.boundaries += 1,
            Err(e) => {
                if e.is_integration_fault() {
                    report.faults += 1;
                }
                report.last_error = Some(e);
            }
        }
    }
    report
}
