use crate::world::{
    Rgba, Texture, TextureBank, TextureError, TextureId,
    demo::{BARREL_TEXTURE, WALL_TEXTURES},
};

/// Side length of every generated texture.
pub const SIZE: usize = 64;

fn generate(name: &str, f: impl Fn(usize, usize) -> Rgba) -> Texture {
    let mut pixels = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            pixels.extend_from_slice(&f(x, y));
        }
    }
    Texture::from_rgba(name, SIZE, SIZE, pixels)
}

/// Brick courses: `mortar` in the joints, `face` elsewhere, alternate rows
/// offset by half a brick.
fn bricks(x: usize, y: usize, face: Rgba, mortar: Rgba) -> Rgba {
    let row = y / 8;
    let bx = (x + if row % 2 == 1 { 8 } else { 0 }) % 16;
    if y % 8 == 0 || bx == 0 { mortar } else { face }
}

/// Pattern for each entry of `WALL_TEXTURES`, by index.
fn wall(index: usize, x: usize, y: usize) -> Rgba {
    let xor = ((x ^ y) * 256 / SIZE) as u8;
    let diag = (x * 4 + y * 4) as u8;
    match index {
        // wood: vertical grain
        0 => {
            let g = (x % 8) as u8 * 6;
            [0x70 + g, 0x40 + g / 2, 0x18, 0xFF]
        }
        // greystone
        1 => bricks(x, y, [0x80, 0x80, 0x80, 0xFF], [0x50, 0x50, 0x50, 0xFF]),
        // mossy
        2 => {
            let moss = (x * 7 + y * 13) % 5 == 0;
            if moss {
                [0x30, 0x80, 0x30, 0xFF]
            } else {
                bricks(x, y, [0x70, 0x78, 0x70, 0xFF], [0x40, 0x48, 0x40, 0xFF])
            }
        }
        // bluestone
        3 => bricks(x, y, [0x30, 0x40, 0xB0, 0xFF], [0x18, 0x20, 0x60, 0xFF]),
        // purplestone
        4 => [0x60 + xor / 4, 0x20, 0x80 + xor / 4, 0xFF],
        // colorstone: xor rainbow
        5 => [xor, diag, 255 - xor, 0xFF],
        // redbrick
        6 => bricks(x, y, [0xA0, 0x30, 0x20, 0xFF], [0xC0, 0xB0, 0xA0, 0xFF]),
        // eagle: cross on a dark field
        _ => {
            let c = SIZE / 2;
            if x.abs_diff(c) < 4 || y.abs_diff(c) < 4 {
                [0xD0, 0xB0, 0x30, 0xFF]
            } else {
                [0x20, 0x20, 0x40, 0xFF]
            }
        }
    }
}

/// Banded disc on pure black; the black corners are keyed out by the sprite
/// pass.
fn barrel(x: usize, y: usize) -> Rgba {
    let c = SIZE as f32 * 0.5;
    let (dx, dy) = (x as f32 + 0.5 - c, y as f32 + 0.5 - c);
    if dx * dx + dy * dy > c * c * 0.8 {
        return [0, 0, 0, 0xFF];
    }
    if y % 16 < 2 {
        [0x60, 0x60, 0x60, 0xFF]
    } else {
        [0x40, 0x90, 0x40, 0xFF]
    }
}

/// Insert the eight wall textures (ids 0‥7 in an empty bank) followed by
/// the barrel sprite. Returns the barrel's id.
pub fn procedural_set(bank: &mut TextureBank) -> Result<TextureId, TextureError> {
    for (i, name) in WALL_TEXTURES.iter().enumerate() {
        bank.insert(*name, generate(name, |x, y| wall(i, x, y)))?;
    }
    let id = bank.insert(BARREL_TEXTURE, generate(BARREL_TEXTURE, barrel))?;
    log::info!("generated {} procedural textures", bank.len());
    Ok(id)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
