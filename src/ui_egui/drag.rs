use crate::models::calendar_date::CalendarDate;
use crate::models::range::CommittedRange;
use crate::services::range_geometry;

/// An in-progress press-drag-release gesture over day cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    /// Day the pointer was pressed on; fixed for the session
    pub anchor: CalendarDate,
    /// Most recently hovered day
    pub cursor: CalendarDate,
}

impl DragSession {
    /// The session's days as `(earliest, latest)`.
    pub fn normalized(&self) -> (CalendarDate, CalendarDate) {
        range_geometry::normalize(self.anchor, self.cursor)
    }
}

/// Pointer-driven selection, independent of the committed value.
///
/// A single click is a press and release on the same day and commits a
/// one-day range; clicking a start day and then an end day is two such
/// gestures. There is no separate click mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSelectionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragSelectionState {
    /// Pointer pressed on a day. Starts a new session, replacing any stale one.
    pub fn press(&mut self, day: CalendarDate) {
        if let Self::Dragging(stale) = self {
            log::debug!("Discarding unreleased drag anchored at {}", stale.anchor);
        }
        log::debug!("Drag started at {}", day);
        *self = Self::Dragging(DragSession {
            anchor: day,
            cursor: day,
        });
    }

    /// Pointer entered a day cell. Ignored while idle.
    pub fn hover_enter(&mut self, day: CalendarDate) {
        if let Self::Dragging(session) = self {
            if session.cursor != day {
                log::trace!("Drag cursor moved to {}", day);
                session.cursor = day;
            }
        }
    }

    /// Pointer released. Returns the normalized range to commit, or `None`
    /// if no drag was active.
    pub fn release(&mut self) -> Option<CommittedRange> {
        match std::mem::take(self) {
            Self::Dragging(session) => {
                let (start, end) = session.normalized();
                log::debug!("Drag released: {} .. {}", start, end);
                Some(CommittedRange {
                    start: Some(start),
                    end: Some(end),
                })
            }
            Self::Idle => None,
        }
    }

    /// Pointer left the widget without releasing. Aborts the gesture without
    /// a commit; returns whether a session was discarded.
    pub fn pointer_left(&mut self) -> bool {
        let aborted = self.is_active();
        if aborted {
            log::debug!("Drag aborted: pointer left the picker");
        }
        *self = Self::Idle;
        aborted
    }

    /// Discard any session without committing.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<DragSession> {
        match self {
            Self::Dragging(session) => Some(*session),
            Self::Idle => None,
        }
    }

    /// The in-progress pair as `(earliest, latest)`.
    pub fn preview(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.session().map(|session| session.normalized())
    }
}
