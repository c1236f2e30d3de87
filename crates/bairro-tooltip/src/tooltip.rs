// File: crates/bairro-tooltip/src/tooltip.rs
// Summary: Showing, repositioning and hiding an overlay for one hover target, plus the
// Hidden/Visible state machine driven by pointer enter/leave.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::TooltipError;
use crate::geometry::Rect;
use crate::host::{ElementId, Listener, ListenerId, OverlayId, TooltipHost, ViewportEvent};
use crate::placement::{compute_placement, Placement, TooltipConfig};

/// Latest association between the target box and where its overlay went.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipAnchor {
    /// Target bounding box in document coordinates.
    pub target: Rect,
    pub placement: Placement,
    pub overlay_height: f64,
}

/// Live overlay plus the scroll/resize listeners keeping it in place.
/// Must be released with [`TooltipSubscription::dispose`].
#[must_use = "an undisposed subscription leaks its listeners and overlay"]
pub struct TooltipSubscription {
    target: ElementId,
    overlay: OverlayId,
    listeners: Vec<ListenerId>,
    anchor: Rc<Cell<TooltipAnchor>>,
    disposed: bool,
}

impl TooltipSubscription {
    pub fn target(&self) -> ElementId { self.target }
    pub fn overlay(&self) -> OverlayId { self.overlay }
    pub fn listeners(&self) -> &[ListenerId] { &self.listeners }

    /// Position after the most recent scroll/resize.
    pub fn anchor(&self) -> TooltipAnchor { self.anchor.get() }

    /// Remove every listener and the overlay node.
    pub fn dispose(mut self, host: &mut dyn TooltipHost) {
        for id in self.listeners.drain(..) {
            if !host.unsubscribe(id) {
                warn!(?id, "tooltip listener was already removed");
            }
        }
        host.remove_overlay(self.overlay);
        self.disposed = true;
        debug!(target_id = ?self.target, overlay = ?self.overlay, "tooltip hidden");
    }
}

impl Drop for TooltipSubscription {
    fn drop(&mut self) {
        if !self.disposed {
            warn!(
                target_id = ?self.target,
                overlay = ?self.overlay,
                listeners = self.listeners.len(),
                "tooltip subscription dropped without dispose"
            );
        }
    }
}

/// Insert the overlay hidden, size and measure it, place it, then reveal it and
/// start following scroll and resize.
pub fn show(
    host: &mut dyn TooltipHost,
    target: ElementId,
    message: &str,
    config: &TooltipConfig,
) -> Result<TooltipSubscription, TooltipError> {
    if host.bounding_client_rect(target).is_none() {
        return Err(TooltipError::UnknownTarget(target));
    }
    let overlay = host.insert_overlay(message, &config.style);
    let first = match reposition(host, target, overlay, config) {
        Ok(anchor) => anchor,
        Err(e) => {
            host.remove_overlay(overlay);
            return Err(e);
        }
    };
    if let Err(e) = host.reveal_overlay(overlay) {
        host.remove_overlay(overlay);
        return Err(e);
    }

    let anchor = Rc::new(Cell::new(first));
    let listener: Listener = {
        let anchor = Rc::clone(&anchor);
        let config = config.clone();
        Rc::new(move |host: &mut dyn TooltipHost, event: ViewportEvent| {
            match reposition(host, target, overlay, &config) {
                Ok(a) => anchor.set(a),
                Err(e) => warn!(?event, error = %e, "tooltip reposition skipped"),
            }
        })
    };
    let listeners = [ViewportEvent::Scroll, ViewportEvent::Resize]
        .into_iter()
        .map(|event| host.subscribe(event, Rc::clone(&listener)))
        .collect();

    debug!(target_id = ?target, ?overlay, top = first.placement.top, "tooltip shown");
    Ok(TooltipSubscription { target, overlay, listeners, anchor, disposed: false })
}

/// Recompute width, height and position against the current viewport.
pub fn reposition(
    host: &mut dyn TooltipHost,
    target: ElementId,
    overlay: OverlayId,
    config: &TooltipConfig,
) -> Result<TooltipAnchor, TooltipError> {
    let viewport = host.viewport();
    let rect = host.bounding_client_rect(target).ok_or(TooltipError::UnknownTarget(target))?;
    // Width first: the measured height depends on how the message wraps.
    host.set_overlay_width(overlay, config.overlay_width(viewport.width))?;
    let overlay_height = host.measure_overlay_height(overlay)?;
    let placement = compute_placement(&viewport, &rect, overlay_height, config);
    host.place_overlay(overlay, placement)?;
    Ok(TooltipAnchor { target: viewport.to_document(&rect), placement, overlay_height })
}

#[derive(Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(TooltipSubscription),
}

/// Tooltip bound to one annotated element. Independent of every other tooltip.
pub struct Tooltip {
    target: ElementId,
    message: String,
    config: TooltipConfig,
    state: TooltipState,
}

impl Tooltip {
    pub fn new(target: ElementId, message: impl Into<String>, config: TooltipConfig) -> Self {
        Self { target, message: message.into(), config, state: TooltipState::Hidden }
    }

    pub fn target(&self) -> ElementId { self.target }
    pub fn message(&self) -> &str { &self.message }
    pub fn state(&self) -> &TooltipState { &self.state }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible(_))
    }

    pub fn anchor(&self) -> Option<TooltipAnchor> {
        match &self.state {
            TooltipState::Visible(sub) => Some(sub.anchor()),
            TooltipState::Hidden => None,
        }
    }

    /// Hidden -> Visible. A repeated enter while visible is ignored.
    pub fn pointer_enter(&mut self, host: &mut dyn TooltipHost) -> Result<(), TooltipError> {
        if self.is_visible() {
            return Ok(());
        }
        let sub = show(host, self.target, &self.message, &self.config)?;
        self.state = TooltipState::Visible(sub);
        Ok(())
    }

    /// Visible -> Hidden, detaching the listeners.
    pub fn pointer_leave(&mut self, host: &mut dyn TooltipHost) {
        if let TooltipState::Visible(sub) = std::mem::take(&mut self.state) {
            sub.dispose(host);
        }
    }

    /// Release everything when the annotated element goes away.
    pub fn teardown(mut self, host: &mut dyn TooltipHost) {
        self.pointer_leave(host);
    }
}
