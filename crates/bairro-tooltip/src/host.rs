// File: crates/bairro-tooltip/src/host.rs
// Summary: The document/window seam. A browser binding or the headless window implements
// `TooltipHost`; the engine only talks to it through these calls.

use std::rc::Rc;

use crate::error::TooltipError;
use crate::geometry::{Rect, Viewport};
use crate::placement::{OverlayStyle, Placement};

/// Element the host can report a bounding box for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Overlay node inserted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Handle returned by `subscribe`, needed to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Window events that move the target relative to the viewport or change its width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

/// Called synchronously by the host for every dispatched event, with the host itself
/// so the listener can measure and move nodes.
pub type Listener = Rc<dyn Fn(&mut dyn TooltipHost, ViewportEvent)>;

pub trait TooltipHost {
    fn viewport(&self) -> Viewport;

    /// Bounding box of `element` relative to the viewport (`getBoundingClientRect`).
    fn bounding_client_rect(&self, element: ElementId) -> Option<Rect>;

    /// Insert an overlay holding `message`, laid out but fully transparent.
    fn insert_overlay(&mut self, message: &str, style: &OverlayStyle) -> OverlayId;

    /// Fix the overlay width; text wraps against it.
    fn set_overlay_width(&mut self, overlay: OverlayId, width: f64) -> Result<(), TooltipError>;

    /// Rendered height at the current width (`offsetHeight`).
    fn measure_overlay_height(&self, overlay: OverlayId) -> Result<f64, TooltipError>;

    fn place_overlay(&mut self, overlay: OverlayId, placement: Placement) -> Result<(), TooltipError>;

    /// Make a placed overlay visible.
    fn reveal_overlay(&mut self, overlay: OverlayId) -> Result<(), TooltipError>;

    /// Returns false when the overlay was already gone.
    fn remove_overlay(&mut self, overlay: OverlayId) -> bool;

    fn subscribe(&mut self, event: ViewportEvent, listener: Listener) -> ListenerId;

    /// Returns false for an unknown or already removed listener.
    fn unsubscribe(&mut self, listener: ListenerId) -> bool;
}
