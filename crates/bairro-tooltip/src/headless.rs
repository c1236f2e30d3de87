// File: crates/bairro-tooltip/src/headless.rs
// Summary: In-memory window/document implementing `TooltipHost`, for tests and non-browser hosts.
// Elements live in document coordinates; text height follows a simple greedy word-wrap model.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::error::TooltipError;
use crate::geometry::{Rect, Viewport};
use crate::host::{ElementId, Listener, ListenerId, OverlayId, TooltipHost, ViewportEvent};
use crate::placement::{OverlayStyle, Placement};

/// Glyph metrics, as multiples of the overlay font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub char_width_em: f64,
    pub line_height_em: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width_em: 0.55, line_height_em: 1.2 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayNode {
    pub message: String,
    pub style: OverlayStyle,
    /// `None` until the engine sizes it; wraps against the viewport width meanwhile.
    pub width: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub opacity: f64,
}

impl OverlayNode {
    pub fn is_revealed(&self) -> bool {
        self.opacity > 0.0
    }
}

pub struct SimulatedWindow {
    viewport: Viewport,
    metrics: TextMetrics,
    elements: HashMap<ElementId, Rect>,
    overlays: BTreeMap<OverlayId, OverlayNode>,
    listeners: BTreeMap<ListenerId, (ViewportEvent, Listener)>,
    next_id: u64,
}

impl SimulatedWindow {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_metrics(viewport, TextMetrics::default())
    }

    pub fn with_metrics(viewport: Viewport, metrics: TextMetrics) -> Self {
        Self {
            viewport,
            metrics,
            elements: HashMap::new(),
            overlays: BTreeMap::new(),
            listeners: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an element whose box is given in document coordinates.
    pub fn add_element(&mut self, document_rect: Rect) -> ElementId {
        let id = ElementId(self.next());
        self.elements.insert(id, document_rect);
        id
    }

    pub fn move_element(&mut self, element: ElementId, document_rect: Rect) -> bool {
        match self.elements.get_mut(&element) {
            Some(r) => {
                *r = document_rect;
                true
            }
            None => false,
        }
    }

    pub fn remove_element(&mut self, element: ElementId) -> bool {
        self.elements.remove(&element).is_some()
    }

    pub fn overlay(&self, overlay: OverlayId) -> Option<&OverlayNode> {
        self.overlays.get(&overlay)
    }

    pub fn overlay_count(&self) -> usize { self.overlays.len() }
    pub fn listener_count(&self) -> usize { self.listeners.len() }

    /// Scroll and dispatch `scroll` synchronously. Returns the listeners notified.
    pub fn scroll_to(&mut self, scroll_x: f64, scroll_y: f64) -> usize {
        self.viewport.scroll_x = scroll_x;
        self.viewport.scroll_y = scroll_y;
        self.dispatch(ViewportEvent::Scroll)
    }

    /// Resize and dispatch `resize` synchronously. Returns the listeners notified.
    pub fn resize(&mut self, width: f64, height: f64) -> usize {
        self.viewport.width = width;
        self.viewport.height = height;
        self.dispatch(ViewportEvent::Resize)
    }

    /// One call per listener per event; no coalescing.
    pub fn dispatch(&mut self, event: ViewportEvent) -> usize {
        let targets: Vec<Listener> = self
            .listeners
            .values()
            .filter(|(e, _)| *e == event)
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in &targets {
            listener(&mut *self, event);
        }
        targets.len()
    }

    /// Wrapped line count for `message` inside a content box `content_width` wide.
    fn line_count(&self, message: &str, font_size: f64, content_width: f64) -> usize {
        let char_w = (self.metrics.char_width_em * font_size).max(f64::EPSILON);
        let per_line = ((content_width / char_w).floor() as usize).max(1);
        let mut lines = 1;
        let mut used = 0usize;
        for word in message.split_whitespace() {
            let len = word.chars().count();
            let needed = if used == 0 { len } else { used + 1 + len };
            if used > 0 && needed > per_line {
                lines += 1;
                used = len;
            } else {
                used = needed;
            }
            // Overlong words break across lines.
            while used > per_line {
                lines += 1;
                used -= per_line;
            }
        }
        lines
    }
}

impl TooltipHost for SimulatedWindow {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn bounding_client_rect(&self, element: ElementId) -> Option<Rect> {
        self.elements.get(&element).map(|r| self.viewport.to_client(r))
    }

    fn insert_overlay(&mut self, message: &str, style: &OverlayStyle) -> OverlayId {
        let id = OverlayId(self.next());
        self.overlays.insert(
            id,
            OverlayNode {
                message: message.to_string(),
                style: style.clone(),
                width: None,
                left: None,
                top: None,
                opacity: 0.0,
            },
        );
        id
    }

    fn set_overlay_width(&mut self, overlay: OverlayId, width: f64) -> Result<(), TooltipError> {
        let node = self.overlays.get_mut(&overlay).ok_or(TooltipError::OverlayDetached(overlay))?;
        node.width = Some(width);
        Ok(())
    }

    fn measure_overlay_height(&self, overlay: OverlayId) -> Result<f64, TooltipError> {
        let node = self.overlays.get(&overlay).ok_or(TooltipError::OverlayDetached(overlay))?;
        let pad = node.style.padding;
        let width = node.width.unwrap_or(self.viewport.width);
        let content = (width - 2.0 * pad).max(1.0);
        let lines = self.line_count(&node.message, node.style.font_size, content);
        Ok(lines as f64 * self.metrics.line_height_em * node.style.font_size + 2.0 * pad)
    }

    fn place_overlay(&mut self, overlay: OverlayId, placement: Placement) -> Result<(), TooltipError> {
        let node = self.overlays.get_mut(&overlay).ok_or(TooltipError::OverlayDetached(overlay))?;
        node.width = Some(placement.width);
        node.left = Some(placement.left);
        node.top = Some(placement.top);
        Ok(())
    }

    fn reveal_overlay(&mut self, overlay: OverlayId) -> Result<(), TooltipError> {
        let node = self.overlays.get_mut(&overlay).ok_or(TooltipError::OverlayDetached(overlay))?;
        node.opacity = 1.0;
        Ok(())
    }

    fn remove_overlay(&mut self, overlay: OverlayId) -> bool {
        self.overlays.remove(&overlay).is_some()
    }

    fn subscribe(&mut self, event: ViewportEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next());
        self.listeners.insert(id, (event, listener));
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) -> bool {
        self.listeners.remove(&listener).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_messages() {
        let w = SimulatedWindow::new(Viewport::new(1000.0, 800.0));
        // 0.55 * 10px -> 5.5px per char, 55px content -> 10 chars per line
        assert_eq!(w.line_count("short", 10.0, 55.0), 1);
        assert_eq!(w.line_count("aaaa bbbb cccc", 10.0, 55.0), 2);
        assert_eq!(w.line_count("abcdefghijklmnopqrstuvwxy", 10.0, 55.0), 3);
        assert_eq!(w.line_count("", 10.0, 55.0), 1);
    }

    #[test]
    fn client_rect_follows_scroll() {
        let mut w = SimulatedWindow::new(Viewport::new(1000.0, 800.0));
        let el = w.add_element(Rect::new(10.0, 700.0, 40.0, 20.0));
        w.scroll_to(0.0, 200.0);
        assert_eq!(w.bounding_client_rect(el).map(|r| r.top), Some(500.0));
    }
}
