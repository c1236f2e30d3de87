// File: crates/bairro-tooltip/src/error.rs
// Summary: Error type for tooltip placement against a host document.

use thiserror::Error;

use crate::host::{ElementId, OverlayId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TooltipError {
    #[error("target element {0:?} is not in the document")]
    UnknownTarget(ElementId),

    #[error("overlay {0:?} is no longer in the document")]
    OverlayDetached(OverlayId),
}
