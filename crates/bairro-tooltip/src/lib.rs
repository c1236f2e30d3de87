// File: crates/bairro-tooltip/src/lib.rs
// Summary: Tooltip position engine; floating overlays centred in the viewport above their target.

pub mod error;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod placement;
pub mod tooltip;

pub use error::TooltipError;
pub use geometry::{Rect, Viewport};
pub use headless::{OverlayNode, SimulatedWindow, TextMetrics};
pub use host::{ElementId, Listener, ListenerId, OverlayId, TooltipHost, ViewportEvent};
pub use placement::{compute_placement, OverlayStyle, Placement, TooltipConfig};
pub use tooltip::{reposition, show, Tooltip, TooltipAnchor, TooltipState, TooltipSubscription};
