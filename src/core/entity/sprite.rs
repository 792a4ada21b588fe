//=========================================================================
// Sprite & Collision Mask
//=========================================================================
//
// The visual footprint of a game object: a host-resolved image name, a
// pixel size, and a bit mask derived from the image's alpha channel for
// pixel-accurate collision.
//
// The framework never touches pixels for rendering — the host blits by
// name — but it does own the mask so that `overlaps` can test exact
// visual intersection after the cheap bounding-rect gate.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Mask ================================================================

/// Bit-packed per-pixel opacity mask.
///
/// A bit is set where the source pixel has non-zero alpha. Rows are
/// packed into `u64` words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    //--- Construction -----------------------------------------------------

    /// Fully transparent mask.
    pub fn empty(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize + 63) / 64;
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Fully opaque mask.
    pub fn filled(width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y);
            }
        }
        mask
    }

    /// Mask from tightly packed RGBA data (row-major, 4 bytes per pixel).
    ///
    /// A pixel is solid when its alpha byte is non-zero. Out-of-range
    /// data is treated as transparent.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let mut mask = Self::empty(width, height);
        for y in 0..height {
            for x in 0..width {
                let alpha_index = ((y * width + x) * 4 + 3) as usize;
                if rgba.get(alpha_index).copied().unwrap_or(0) > 0 {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    //--- Access -----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the pixel at (x, y) is solid.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let word = y as usize * self.words_per_row + (x / 64) as usize;
        self.bits[word] & (1u64 << (x % 64)) != 0
    }

    fn set(&mut self, x: u32, y: u32) {
        let word = y as usize * self.words_per_row + (x / 64) as usize;
        self.bits[word] |= 1u64 << (x % 64);
    }

    //--- Overlap ----------------------------------------------------------

    /// Pixel intersection test against `other` positioned at `offset`
    /// relative to this mask's top-left corner.
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        for y in 0..other.height {
            let sy = y as i32 + offset.1;
            if sy < 0 || sy >= self.height as i32 {
                continue;
            }
            for x in 0..other.width {
                let sx = x as i32 + offset.0;
                if sx < 0 || sx >= self.width as i32 {
                    continue;
                }
                if other.get(x, y) && self.get(sx as u32, sy as u32) {
                    return true;
                }
            }
        }
        false
    }
}

//=== Sprite ==============================================================

/// A game object's current visual surface.
///
/// The image is referenced by name and resolved by the host; the mask is
/// kept here for collision. A sprite without an image is the invisible
/// 1×1 placeholder every game object starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: Option<String>,
    width: u32,
    height: u32,
    mask: Mask,
}

impl Sprite {
    //--- Construction -----------------------------------------------------

    /// The default sprite: 1×1, fully transparent, no image.
    pub fn invisible() -> Self {
        Self {
            image: None,
            width: 1,
            height: 1,
            mask: Mask::empty(1, 1),
        }
    }

    /// Sprite with a mask computed from RGBA pixel data.
    pub fn from_rgba(image: impl Into<String>, width: u32, height: u32, rgba: &[u8]) -> Self {
        Self {
            image: Some(image.into()),
            width,
            height,
            mask: Mask::from_rgba(width, height, rgba),
        }
    }

    /// Sprite treated as fully opaque (no per-pixel data available).
    pub fn opaque(image: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            image: Some(image.into()),
            width,
            height,
            mask: Mask::filled(width, height),
        }
    }

    //--- Access -----------------------------------------------------------

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::invisible()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
