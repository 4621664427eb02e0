// Resize interaction controller
//
// Idle -> Resizing -> Idle. Every pointer move is turned into a candidate
// span; accepted candidates update the preview and are written to the store
// immediately, rejected ones leave the preview where it was.

use crate::card::{Card, CardId, CardPatch};
use crate::config::GridConfig;
use crate::grid::geometry::{pixel_delta_to_cell_delta, resize_axis};
use crate::grid::span::Span;
use crate::interaction::pointer::{CardDragState, PointerPosition};
use crate::interaction::subscription::{InputSurface, Subscription};
use crate::interaction::validity::{span_fits, ResizeRule};
use crate::layout::{LayoutRepository, LayoutVariant};
use log::{debug, trace, warn};
use std::fmt;

/// Result of feeding one pointer move to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// No session is running
    Ignored,
    /// Candidate accepted; `committed` is false when it equals the stored span
    Accepted { span: Span, committed: bool },
    /// Candidate refused, preview unchanged
    Rejected { candidate: Span },
    /// The session could not continue and was ended
    Ended,
}

/// Why a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    PointerUp,
    PointerCancel,
    WindowBlur,
    LayoutChanged,
    CardRemoved,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::PointerUp => "pointer up",
            EndReason::PointerCancel => "pointer cancel",
            EndReason::WindowBlur => "window blur",
            EndReason::LayoutChanged => "layout changed",
            EndReason::CardRemoved => "card removed",
        };
        f.write_str(text)
    }
}

#[derive(Debug)]
pub struct ResizeSession {
    layout: LayoutVariant,
    start_pointer: PointerPosition,
    start_span: Span,
    preview: Span,
    // Dropped with the session, which releases the global listeners
    _listeners: Subscription,
}

impl ResizeSession {
    pub fn layout(&self) -> LayoutVariant {
        self.layout
    }

    pub fn start_span(&self) -> Span {
        self.start_span
    }

    pub fn preview(&self) -> Span {
        self.preview
    }
}

#[derive(Debug, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

pub struct ResizeController {
    card_id: CardId,
    state: ResizeState,
    rule: Option<Box<dyn ResizeRule>>,
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("card_id", &self.card_id)
            .field("state", &self.state)
            .field("has_rule", &self.rule.is_some())
            .finish()
    }
}

impl ResizeController {
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            state: ResizeState::Idle,
            rule: None,
        }
    }

    /// Install the host's extra resize hook, called with (card, cols, rows)
    pub fn with_rule<F>(self, rule: F) -> Self
    where
        F: Fn(&CardId, u32, u32) -> bool + 'static,
    {
        self.with_resize_rule(rule)
    }

    pub fn with_resize_rule<T>(mut self, rule: T) -> Self
    where
        T: ResizeRule + 'static,
    {
        self.rule = Some(Box::new(rule));
        self
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    /// The running session, if it belongs to the layout `repo` has active.
    /// A session left over from another layout counts as idle.
    fn live_session<R>(&self, repo: &R) -> Option<&ResizeSession>
    where
        R: LayoutRepository + ?Sized,
    {
        match &self.state {
            ResizeState::Resizing(session) if session.layout == repo.active_layout() => {
                Some(session)
            }
            _ => None,
        }
    }

    pub fn is_resizing<R>(&self, repo: &R) -> bool
    where
        R: LayoutRepository + ?Sized,
    {
        self.live_session(repo).is_some()
    }

    /// Span shown while a session is running in the active layout
    pub fn preview<R>(&self, repo: &R) -> Option<Span>
    where
        R: LayoutRepository + ?Sized,
    {
        self.live_session(repo).map(|session| session.preview)
    }

    /// Preview span if resizing, otherwise the stored span in the active layout
    pub fn display_span<R>(&self, repo: &R) -> Option<Span>
    where
        R: LayoutRepository + ?Sized,
    {
        self.preview(repo).or_else(|| {
            repo.card(repo.active_layout(), &self.card_id)
                .map(|card| card.size)
        })
    }

    /// Whether the corner resize handle should be shown.
    ///
    /// Only on layouts without nudge controls, never for a card that is being
    /// dragged or is the drag overlay, and only while the card can still grow
    /// one cell both right and down.
    pub fn handle_visible<R>(&self, repo: &R, grid: &GridConfig, drag: CardDragState) -> bool
    where
        R: LayoutRepository + ?Sized,
    {
        let layout = repo.active_layout();
        if layout.uses_nudge_controls() || !drag.is_idle() {
            return false;
        }
        repo.card(layout, &self.card_id).map_or(false, |card| {
            can_resize_right(card, grid) && can_resize_bottom(card, grid)
        })
    }

    /// Start a session from a pointer-down on the resize handle.
    ///
    /// Returns false and stays idle on mobile, while the card is dragged or
    /// overlaid, when a session is already running, or if the card is unknown.
    pub fn begin<R, S>(
        &mut self,
        repo: &R,
        surface: &S,
        pointer: PointerPosition,
        drag: CardDragState,
    ) -> bool
    where
        R: LayoutRepository + ?Sized,
        S: InputSurface + ?Sized,
    {
        let layout = repo.active_layout();
        self.layout_changed(layout);
        if self.is_resizing(repo) || !drag.is_idle() {
            return false;
        }
        if !layout.allows_pointer_resize() {
            return false;
        }
        let Some(card) = repo.card(layout, &self.card_id) else {
            return false;
        };

        let start_span = card.size;
        let listeners = surface.attach(&self.card_id);
        self.state = ResizeState::Resizing(ResizeSession {
            layout,
            start_pointer: pointer,
            start_span,
            preview: start_span,
            _listeners: listeners,
        });
        debug!(
            "↘️ Resize of {} started at {} in {} layout",
            self.card_id, start_span, layout
        );
        true
    }

    /// Process one pointer move of the running session
    pub fn pointer_move<R>(
        &mut self,
        repo: &mut R,
        grid: &GridConfig,
        pointer: PointerPosition,
    ) -> ResizeOutcome
    where
        R: LayoutRepository + ?Sized,
    {
        let (layout, start_pointer, start_span) = match &self.state {
            ResizeState::Idle => return ResizeOutcome::Ignored,
            ResizeState::Resizing(session) => {
                (session.layout, session.start_pointer, session.start_span)
            }
        };
        if repo.active_layout() != layout {
            self.end(EndReason::LayoutChanged);
            return ResizeOutcome::Ended;
        }
        let Some(card) = repo.card(layout, &self.card_id).cloned() else {
            self.end(EndReason::CardRemoved);
            return ResizeOutcome::Ended;
        };

        let (dx, dy) = pointer.delta_from(start_pointer);
        let candidate = Span::new(
            resize_axis(
                start_span.cols,
                pixel_delta_to_cell_delta(dx, grid.cell_size, grid.gap),
                grid.max_cols,
            ),
            resize_axis(
                start_span.rows,
                pixel_delta_to_cell_delta(dy, grid.cell_size, grid.gap),
                grid.max_rows,
            ),
        );

        if !self.accepts(&*repo, layout, grid, &card, candidate) {
            trace!("{}: rejected candidate {}", self.card_id, candidate);
            return ResizeOutcome::Rejected { candidate };
        }

        let committed = candidate != card.size;
        if committed {
            if let Err(err) = repo.apply_update(&card.id, CardPatch::size(candidate)) {
                warn!("⚠️ Store refused resize of {} to {}: {}", card.id, candidate, err);
                return ResizeOutcome::Rejected { candidate };
            }
            debug!("{}: resized to {}", card.id, candidate);
        }
        if let ResizeState::Resizing(session) = &mut self.state {
            session.preview = candidate;
        }
        ResizeOutcome::Accepted {
            span: candidate,
            committed,
        }
    }

    /// Normal end of a session. Whatever was committed stays.
    pub fn pointer_up(&mut self) -> Option<Span> {
        self.end(EndReason::PointerUp)
    }

    /// Pointer capture lost or window blurred: end the session the same way
    pub fn cancel(&mut self, reason: EndReason) -> Option<Span> {
        self.end(reason)
    }

    /// Tell the controller the active layout changed; ends a session that
    /// belongs to another layout. Returns true if a session was ended.
    pub fn layout_changed(&mut self, layout: LayoutVariant) -> bool {
        let stale = matches!(
            &self.state,
            ResizeState::Resizing(session) if session.layout != layout
        );
        if stale {
            self.end(EndReason::LayoutChanged);
        }
        stale
    }

    fn accepts<R>(
        &self,
        repo: &R,
        layout: LayoutVariant,
        grid: &GridConfig,
        card: &Card,
        candidate: Span,
    ) -> bool
    where
        R: LayoutRepository + ?Sized,
    {
        span_fits(repo, layout, grid, card, candidate)
            && self
                .rule
                .as_ref()
                .map_or(true, |rule| rule.allows(&card.id, candidate.cols, candidate.rows))
    }

    /// Drop the session, which releases its listeners; returns the last preview
    fn end(&mut self, reason: EndReason) -> Option<Span> {
        match std::mem::take(&mut self.state) {
            ResizeState::Resizing(session) => {
                debug!(
                    "Resize of {} ended ({}) at {}",
                    self.card_id, reason, session.preview
                );
                Some(session.preview)
            }
            ResizeState::Idle => None,
        }
    }
}

/// The card could grow one column without leaving the grid
pub fn can_resize_right(card: &Card, grid: &GridConfig) -> bool {
    let col = card.grid_position.map_or(0, |position| position.col);
    col.saturating_add(card.size.cols) < grid.max_cols
}

/// The card could grow one row without leaving the grid
pub fn can_resize_bottom(card: &Card, grid: &GridConfig) -> bool {
    let row = card.grid_position.map_or(0, |position| position.row);
    row.saturating_add(card.size.rows) < grid.max_rows
}
