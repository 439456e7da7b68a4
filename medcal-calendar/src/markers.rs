//! Per-day event markers (the dots under a calendar day).
//!
//! The engine has no rule of its own for which dots a day carries. A host
//! derives them from its schedule data by implementing [`MarkerSource`]; the
//! engine only attaches them to grid cells. The same source and grid always
//! produce the same markers.

use smallvec::SmallVec;

use crate::{
    date::CalendarDate,
    date_grid::{GridCell, MonthGrid},
};

/// Markers attached to one day. Most days carry at most a few.
pub type DayMarkers<M> = SmallVec<[M; 3]>;

/// Supplies the markers for a date.
pub trait MarkerSource {
    /// Marker payload, e.g. a colour or a medication status.
    type Marker: Clone;

    /// Markers shown under `date`, in display order.
    fn markers_for(&self, date: CalendarDate) -> DayMarkers<Self::Marker>;
}

/// A source that never marks anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMarkers;

impl MarkerSource for NoMarkers {
    type Marker = ();

    fn markers_for(&self, _date: CalendarDate) -> DayMarkers<()> {
        SmallVec::new()
    }
}

impl<F, M> MarkerSource for F
where
    F: Fn(CalendarDate) -> DayMarkers<M>,
    M: Clone,
{
    type Marker = M;

    fn markers_for(&self, date: CalendarDate) -> DayMarkers<M> {
        self(date)
    }
}

/// Pairs every grid cell with its markers.
pub fn annotate<S: MarkerSource>(
    grid: &MonthGrid,
    source: &S,
) -> Vec<(GridCell, DayMarkers<S::Marker>)> {
    grid.iter()
        .map(|cell| (*cell, source.markers_for(cell.date)))
        .collect()
}
