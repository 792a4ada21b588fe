//=========================================================================
// Canvas Capability
//=========================================================================
//
// The rendering seam between the framework and the host engine.
//
// The framework never draws pixels itself. Base draws (background fill,
// sprite blit, debug overlays) are expressed against this trait and the
// host supplies the implementation. Tests use recording doubles.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle, top-left origin, sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap test: rectangles that merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

//=== StageBounds =========================================================

/// Host-declared stage dimensions in pixels.
///
/// The edge tests treat a position as inside when it lies within
/// `[inset, dimension - inset]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBounds {
    pub width: f32,
    pub height: f32,
}

impl StageBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `pos` is beyond the inset edges on either axis.
    pub fn is_beyond(&self, pos: Vec2, inset: Vec2) -> bool {
        if pos.x < inset.x || pos.x > self.width - inset.x {
            return true;
        }
        if pos.y < inset.y || pos.y > self.height - inset.y {
            return true;
        }
        false
    }
}

//=== Canvas ==============================================================

/// Host-supplied 2D drawing surface, valid for one frame.
///
/// Images are referenced by name; resolution to actual surfaces is the
/// host's business. Coordinates are screen space (pixels, top-left
/// origin, y grows downward).
pub trait Canvas {
    /// Fills the whole surface with a solid color.
    fn fill(&mut self, color: Color);

    /// Blits the named image with its top-left corner at `top_left`,
    /// rotated by `angle` degrees counter-clockwise around its center.
    fn blit(&mut self, image: &str, top_left: Vec2, angle: f32);

    /// Draws a rectangle outline.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draws a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws text with its top edge centered on `mid_top`.
    fn draw_text(&mut self, text: &str, mid_top: Vec2, color: Color);
}

//=========================================================================
// Unit Tests
//=========================================================================
