// Format-agnostic repository of RGBA textures decoded by the asset loader.
// The renderer and the tile map interact through `TextureId` only.

use std::collections::HashMap;

/// Runtime handle for a texture in this bank.
///
/// Ids are handed out in insertion order starting at **0**, so a bank filled
/// in the same order as a level's texture list resolves the level's tile ids
/// directly.
pub type TextureId = u16;

/// One RGBA texel.
pub type Rgba = [u8; 4];

/// CPU-side storage: 8-bit **RGBA** in row-major order, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u8>,
}

/// Convenience checkerboard 8×8 (magenta/black), used for unknown ids.
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: Rgba = [0xFF, 0x00, 0xFF, 0xFF];
        const DARK: Rgba = [0x20, 0x20, 0x20, 0xFF];
        let mut pix = Vec::with_capacity(8 * 8 * 4);
        for y in 0..8 {
            for x in 0..8 {
                pix.extend_from_slice(if (x ^ y) & 1 == 0 { &LIGHT } else { &DARK });
            }
        }
        Texture {
            name: "CHECKER".to_string(),
            w: 8,
            h: 8,
            pixels: pix,
        }
    }
}

impl Texture {
    /// Build a texture from raw RGBA bytes.
    ///
    /// Panics if `pixels` is not exactly `4 * w * h` bytes long; the loader
    /// guarantees this for decoded images.
    pub fn from_rgba<S: Into<String>>(name: S, w: usize, h: usize, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), 4 * w * h, "RGBA buffer does not match {w}x{h}");
        Self {
            name: name.into(),
            w,
            h,
            pixels,
        }
    }

    /// A `w×h` texture filled with one colour.
    pub fn solid<S: Into<String>>(name: S, w: usize, h: usize, colour: Rgba) -> Self {
        Self::from_rgba(name, w, h, colour.repeat(w * h))
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Point sample. The caller keeps `x < w` and `y < h`.
    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = 4 * (y * self.w + x);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Point sample with repeat addressing. Uses `rem_euclid`, so
    /// non-power-of-two sizes wrap correctly too.
    #[inline(always)]
    pub fn sample_wrapped(&self, x: i32, y: i32) -> Rgba {
        let u = x.rem_euclid(self.w as i32) as usize;
        let v = y.rem_euclid(self.h as i32) as usize;
        self.pixel(u, v)
    }

    /// Point sample at normalised coordinates, clamped to the edge texel.
    #[inline(always)]
    pub fn sample_unit(&self, u: f32, v: f32) -> Rgba {
        let x = ((u * self.w as f32) as usize).min(self.w - 1);
        let y = ((v * self.h as f32) as usize).min(self.h - 1);
        self.pixel(x, y)
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// Bank is full.
    #[error("texture bank is full")]
    Full,
}

/// A format-agnostic cache of textures.
///
/// * Does **not** know about PNG or windows; decoding lives in `assets`.
/// * Stores exactly one copy of every name.
/// * Draw-time lookups of unknown ids fall back to a checkerboard.
///
/// **Thread-safety:** access `TextureBank` from a single thread; the renderer
/// only ever borrows it immutably.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
    missing: Texture,
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::new(Texture::default())
    }
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank; `missing_tex` is drawn for ids the bank does
    /// not hold.
    pub fn new(missing_tex: Texture) -> Self {
        Self {
            by_name: HashMap::new(),
            data: Vec::new(),
            missing: missing_tex,
        }
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Fallback-safe lookup for a map tile id: negative or unknown ids
    /// resolve to the checkerboard.
    pub fn texture_or_missing(&self, tile_id: i32) -> &Texture {
        TextureId::try_from(tile_id)
            .ok()
            .and_then(|id| self.data.get(id as usize))
            .unwrap_or(&self.missing)
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = TextureId::try_from(self.data.len()).map_err(|_| TextureError::Full)?;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(colour: u8) -> Texture {
        Texture::solid("Dummy", 2, 2, [colour, colour, colour, 0xFF])
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default();
        let red = bank.insert("RED", dummy_tex(0x00)).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(0xFF)).unwrap();

        assert_eq!(red, 0);
        assert_eq!(blue, 1);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("NOPE"), None);

        assert_eq!(bank.texture(red).unwrap().pixels[0], 0x00);
        assert_eq!(bank.texture(blue).unwrap().pixels[0], 0xFF);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(-1).name, "CHECKER");
        assert_eq!(bank.texture_or_missing(7).name, "CHECKER");
    }

    #[test]
    fn pixel_reads_rgba_row_major() {
        let pixels = vec![
            1, 2, 3, 4, 5, 6, 7, 8, //
            9, 10, 11, 12, 13, 14, 15, 16,
        ];
        let tex = Texture::from_rgba("T", 2, 2, pixels);
        assert_eq!(tex.dimensions(), (2, 2));
        assert_eq!(tex.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(tex.pixel(0, 1), [9, 10, 11, 12]);
    }

    #[test]
    fn wrapped_sampling_handles_non_power_of_two() {
        let mut pixels = Vec::new();
        for x in 0..3u8 {
            pixels.extend_from_slice(&[x, 0, 0, 255]);
        }
        let tex = Texture::from_rgba("STRIP", 3, 1, pixels);
        assert_eq!(tex.sample_wrapped(3, 0)[0], 0);
        assert_eq!(tex.sample_wrapped(4, 0)[0], 1);
        assert_eq!(tex.sample_wrapped(-1, 0)[0], 2);
        assert_eq!(tex.sample_wrapped(2, 5)[0], 2);
    }

    #[test]
    fn unit_sampling_clamps_to_last_texel() {
        let tex = Texture::from_rgba("T", 2, 1, vec![0, 0, 0, 255, 9, 9, 9, 255]);
        assert_eq!(tex.sample_unit(0.0, 0.0)[0], 0);
        assert_eq!(tex.sample_unit(0.99, 0.0)[0], 9);
        assert_eq!(tex.sample_unit(1.0, 1.0)[0], 9);
    }
}
