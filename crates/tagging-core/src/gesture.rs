//! Translation of UI gestures into engine operations.

use crate::engine::{CheckResult, EngineResult, PlacementEngine, Snapshot};
use crate::tag::TagId;
use serde::{Deserialize, Serialize};

/// Area of the widget a gesture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The pool of unplaced tags.
    Pool,
    /// The answer area.
    AnswerArea,
}

/// A user gesture, already interpreted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// A tag started being dragged.
    DragStart { id: TagId },
    /// The dragged tag was dropped on a zone.
    Drop { zone: Zone },
    /// A tag was clicked where it currently sits.
    Click { id: TagId, zone: Zone },
    /// The check button was pressed.
    CheckPressed,
    /// The reset button was pressed.
    ResetPressed,
}

/// What the engine produced for a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The gesture was recorded but changed nothing (drag start, stray drop).
    Pending,
    /// The engine state after a placement change or reset.
    Changed(Snapshot),
    /// The result of a check.
    Checked(CheckResult),
}

/// Routes gestures to a [`PlacementEngine`], tracking the drag payload
/// between drag-start and drop.
#[derive(Debug, Clone, Default)]
pub struct GestureRouter {
    dragging: Option<TagId>,
}

impl GestureRouter {
    /// Create a new router with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag currently being dragged, if any.
    pub fn dragging(&self) -> Option<&TagId> {
        self.dragging.as_ref()
    }

    /// Apply a gesture to the engine.
    pub fn dispatch(
        &mut self,
        engine: &mut PlacementEngine,
        gesture: Gesture,
    ) -> EngineResult<Outcome> {
        match gesture {
            Gesture::DragStart { id } => {
                self.dragging = Some(id);
                Ok(Outcome::Pending)
            }
            Gesture::Drop { zone } => match self.dragging.take() {
                Some(id) => Self::move_to(engine, &id, zone).map(Outcome::Changed),
                None => Ok(Outcome::Pending),
            },
            Gesture::Click { id, zone } => {
                // Clicking a tag sends it to the other zone.
                let target = match zone {
                    Zone::Pool => Zone::AnswerArea,
                    Zone::AnswerArea => Zone::Pool,
                };
                Self::move_to(engine, &id, target).map(Outcome::Changed)
            }
            Gesture::CheckPressed => Ok(Outcome::Checked(engine.check())),
            Gesture::ResetPressed => {
                self.dragging = None;
                Ok(Outcome::Changed(engine.reset()))
            }
        }
    }

    fn move_to(engine: &mut PlacementEngine, id: &TagId, zone: Zone) -> EngineResult<Snapshot> {
        match zone {
            Zone::AnswerArea => engine.place(id),
            Zone::Pool => engine.remove(id),
        }
    }
}
