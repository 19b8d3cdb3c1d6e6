use super::{Config, DetachHandle, PlacementServer};
use crate::models::{Align, BBox, Bar, BarId, Edge, Margins, Screen, ScreenId};
use crate::placement_request::PlacementRequest;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Attachment {
    bar: BarId,
    screen: ScreenId,
    edge: Edge,
    /// Distance from the screen edge to the far side of the bar.
    reach: u32,
}

/// Computes where every bar ends up without touching a real display.
/// Keeps track of the workarea that attached bars reserve on each screen.
#[derive(Debug, Clone, Default)]
pub struct GeometryPlacementServer {
    screens: Vec<Screen>,
    font_height: u32,
    attachments: HashMap<u64, Attachment>,
    geometries: HashMap<BarId, BBox>,
    next_handle: u64,
}

impl GeometryPlacementServer {
    #[must_use]
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Last rectangle a bar was placed at.
    #[must_use]
    pub fn geometry(&self, bar: BarId) -> Option<BBox> {
        self.geometries.get(&bar).copied()
    }

    /// The part of the screen not reserved by attached bars.
    #[must_use]
    pub fn workarea(&self, screen: ScreenId) -> Option<BBox> {
        let bbox = self.screen_geometry(screen)?;
        let mut reserved = Margins::default();
        for attachment in self.attachments.values().filter(|a| a.screen == screen) {
            let current = reserved.get(attachment.edge);
            reserved.set(attachment.edge, current.max(attachment.reach));
        }
        Some(shrink(bbox, reserved))
    }

    pub fn add_screen(&mut self, screen: Screen) {
        self.screens.retain(|s| s.id != screen.id);
        self.screens.push(screen);
    }

    /// Forgets the screen along with anything reserved on it.
    pub fn remove_screen(&mut self, screen: ScreenId) -> Option<Screen> {
        let index = self.screens.iter().position(|s| s.id == screen)?;
        self.attachments.retain(|_, a| a.screen != screen);
        Some(self.screens.remove(index))
    }

    pub fn set_screen_geometry(&mut self, screen: ScreenId, bbox: BBox) {
        if let Some(s) = self.screens.iter_mut().find(|s| s.id == screen) {
            s.bbox = bbox;
        }
    }
}

impl PlacementServer for GeometryPlacementServer {
    fn new(config: &impl Config) -> Self {
        Self {
            screens: config.screens(),
            font_height: config.font_height(),
            ..Self::default()
        }
    }

    fn place(&mut self, bar: &Bar, request: &PlacementRequest) -> Option<DetachHandle> {
        let screen = bar.screen()?;
        let Some(area) = self.screen_geometry(screen) else {
            tracing::warn!("Cannot place {} on missing {}", bar.id, screen);
            return None;
        };
        let bbox = place_on(area, bar.width(), bar.height(), request);
        self.geometries.insert(bar.id, bbox);

        if !request.attach {
            return None;
        }
        let reach = if request.update_workarea && bar.visible() {
            request
                .margins
                .get(request.edge)
                .saturating_add(bar.extent(request.edge))
        } else {
            0
        };
        self.next_handle += 1;
        self.attachments.insert(
            self.next_handle,
            Attachment {
                bar: bar.id,
                screen,
                edge: request.edge,
                reach,
            },
        );
        Some(DetachHandle::new(self.next_handle))
    }

    fn detach(&mut self, handle: DetachHandle) {
        if let Some(attachment) = self.attachments.remove(&handle.id()) {
            tracing::trace!("Released workarea held by {}", attachment.bar);
        }
    }

    fn screen_geometry(&self, screen: ScreenId) -> Option<BBox> {
        self.screens.iter().find(|s| s.id == screen).map(|s| s.bbox)
    }

    fn primary_screen(&self) -> Option<ScreenId> {
        self.screens.iter().map(|s| s.id).min()
    }

    fn font_height(&self, _font: Option<&str>) -> u32 {
        self.font_height
    }
}

fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn shrink(bbox: BBox, margins: Margins) -> BBox {
    let (left, right) = (signed(margins.left), signed(margins.right));
    let (top, bottom) = (signed(margins.top), signed(margins.bottom));
    BBox {
        x: bbox.x.saturating_add(left),
        y: bbox.y.saturating_add(top),
        width: bbox.width.saturating_sub(left).saturating_sub(right).max(0),
        height: bbox.height.saturating_sub(top).saturating_sub(bottom).max(0),
    }
}

fn align_along(start: i32, span: i32, size: i32, align: Align) -> i32 {
    let slack = span.saturating_sub(size);
    match align {
        Align::Start => start,
        Align::Centered => start.saturating_add(slack / 2),
        Align::End => start.saturating_add(slack),
    }
}

fn far_side(start: i32, span: i32, size: i32) -> i32 {
    start.saturating_add(span).saturating_sub(size)
}

fn place_on(area: BBox, width: u32, height: u32, request: &PlacementRequest) -> BBox {
    let inner = shrink(area, request.margins);
    let (width, height) = (signed(width), signed(height));
    let maximized = request.maximize.is_some();
    match request.edge {
        Edge::Top | Edge::Bottom => {
            let (x, width) = if maximized {
                (inner.x, inner.width)
            } else {
                (align_along(inner.x, inner.width, width, request.align), width)
            };
            let y = if request.edge == Edge::Top {
                inner.y
            } else {
                far_side(inner.y, inner.height, height)
            };
            BBox::new(x, y, width, height)
        }
        Edge::Left | Edge::Right => {
            let (y, height) = if maximized {
                (inner.y, inner.height)
            } else {
                (align_along(inner.y, inner.height, height, request.align), height)
            };
            let x = if request.edge == Edge::Left {
                inner.x
            } else {
                far_side(inner.x, inner.width, width)
            };
            BBox::new(x, y, width, height)
        }
    }
}
