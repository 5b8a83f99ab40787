//! Scroll-position mapping.
//!
//! `ScrollMap` owns the authoritative scroll offset and derives everything
//! the chrome needs from it: the indicator thumb position and height, the
//! fractional active section for the landmark rail, per-marker opacities,
//! and jump targets. Both input paths (the document surface's scroll ticks
//! and manual thumb drags) funnel through the same clamped setter, so the
//! offset has a single writer and the two sources cannot fight each other.
//!
//! The logic is isolated here so it stays testable without a layout pass:
//! no iced types, no I/O, just arithmetic with guarded divisions.

/// Number of equal bands the document is partitioned into for the rail.
pub const SECTION_COUNT: usize = 10;

/// Opacity for markers far from the active section.
pub const MIN_MARKER_OPACITY: f32 = 0.3;

/// Distance (in fractional sections) at which a marker fades to the minimum.
const OPACITY_FALLOFF_DISTANCE: f32 = 0.5;

/// Maps the scroll offset to indicator and section geometry.
///
/// The document extent is defined as `page_count x viewport_height`: the
/// surface renders each page frame exactly one viewport tall, so the measured
/// content height and this derived extent agree by construction. Until a
/// document reports its page count the extent defaults to one viewport
/// height, which keeps every derivation well-defined before load.
#[derive(Debug, Clone)]
pub struct ScrollMap {
    viewport_height: f32,
    page_count: usize,
    scroll_offset: f32,
    thumb_inset: f32,
}

impl ScrollMap {
    pub fn new(viewport_height: f32, thumb_inset: f32) -> Self {
        Self {
            viewport_height: sanitize(viewport_height),
            page_count: 0,
            scroll_offset: 0.0,
            thumb_inset: sanitize(thumb_inset),
        }
    }

    /// Total scrollable extent. One viewport tall until a page count arrives.
    pub fn document_height(&self) -> f32 {
        if self.page_count > 0 {
            self.page_count as f32 * self.viewport_height
        } else {
            self.viewport_height
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Upper bound for the scroll offset; 0 when nothing overflows.
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Record the page count reported by the document on load.
    ///
    /// A zero page count leaves the default one-viewport extent in place so
    /// no derived value ever divides by zero downstream.
    pub fn set_page_count(&mut self, page_count: usize) {
        if page_count == 0 {
            return;
        }
        self.page_count = page_count;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
    }

    /// Adopt a new viewport height, preserving relative scroll progress.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        let progress = self.relative_offset();
        self.viewport_height = sanitize(viewport_height);
        self.scroll_offset = self.clamp_offset(progress * self.max_scroll());
    }

    /// Primary high-frequency path: a raw offset report from the document.
    pub fn document_scrolled(&mut self, offset: f32) {
        self.scroll_offset = self.clamp_offset(offset);
    }

    /// Manual drag path: map a pointer position on the track to a scroll
    /// offset, adopt it, and return the offset the caller must command the
    /// document surface to jump to. The jump is one-directional; when the
    /// surface echoes the move back through `document_scrolled` the offset is
    /// already identical, so the thumb cannot oscillate.
    pub fn indicator_dragged(&mut self, pointer_y: f32) -> f32 {
        let candidate = if self.viewport_height > 0.0 {
            (sanitize(pointer_y) + self.thumb_inset) * (self.document_height() / self.viewport_height)
        } else {
            0.0
        };
        self.scroll_offset = self.clamp_offset(candidate);
        self.scroll_offset
    }

    /// Thumb height: the track scaled by how much of the document is visible.
    /// Fills the whole track when there is nothing to scroll.
    pub fn indicator_height(&self) -> f32 {
        let document = self.document_height();
        if document > self.viewport_height && document > 0.0 {
            self.viewport_height * (self.viewport_height / document)
        } else {
            self.viewport_height
        }
    }

    /// Thumb position within `[0, viewport_height - indicator_height()]`.
    pub fn indicator_offset(&self) -> f32 {
        let document = self.document_height();
        if document <= 0.0 {
            return 0.0;
        }
        let travel = (self.viewport_height - self.indicator_height()).max(0.0);
        ((self.scroll_offset / document) * self.viewport_height - self.thumb_inset)
            .clamp(0.0, travel)
    }

    /// Fractional active section in `[0, SECTION_COUNT - 1]`.
    pub fn active_section(&self) -> f32 {
        let band = self.document_height() / SECTION_COUNT as f32;
        if band <= 0.0 {
            return 0.0;
        }
        (self.scroll_offset / band).clamp(0.0, (SECTION_COUNT - 1) as f32)
    }

    /// Triangular falloff around the fractional active section: 1.0 on the
    /// active marker, `MIN_MARKER_OPACITY` at half a section away or more.
    pub fn marker_opacity(&self, index: usize) -> f32 {
        let distance = (self.active_section() - index as f32).abs();
        if distance >= OPACITY_FALLOFF_DISTANCE {
            return MIN_MARKER_OPACITY;
        }
        let fade = distance / OPACITY_FALLOFF_DISTANCE;
        1.0 - (1.0 - MIN_MARKER_OPACITY) * fade
    }

    /// Offset of the start of a section band, clamped to the scroll range.
    pub fn section_target(&self, index: usize) -> f32 {
        let band = self.document_height() / SECTION_COUNT as f32;
        self.clamp_offset(index.min(SECTION_COUNT - 1) as f32 * band)
    }

    /// Jump to the start of a section and return the adopted offset so the
    /// caller can animate the document surface there.
    pub fn jump_to_section(&mut self, index: usize) -> f32 {
        let target = self.section_target(index);
        self.document_scrolled(target);
        self.scroll_offset
    }

    /// Scroll progress in `[0, 1]`, the coordinate `scrollable::snap_to`
    /// expects. 0 when nothing overflows.
    pub fn relative_offset(&self) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_offset / max).clamp(0.0, 1.0)
    }

    /// 1-based page under the viewport top, for the page caption.
    pub fn current_page(&self) -> usize {
        if self.page_count == 0 || self.viewport_height <= 0.0 {
            return 1;
        }
        let page = (self.scroll_offset / self.viewport_height).floor() as usize + 1;
        page.min(self.page_count)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        sanitize(offset).clamp(0.0, self.max_scroll())
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
