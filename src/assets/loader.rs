use std::path::{Path, PathBuf};

use crate::world::{Texture, TextureBank, TextureError, TextureId};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to decode texture {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path} has no pixels")]
    Empty { path: PathBuf },

    #[error(transparent)]
    Bank(#[from] TextureError),
}

/// Decode one image file into an RGBA8 texture named after the file stem.
pub fn load_texture(path: &Path) -> Result<Texture, LoadError> {
    let img = image::open(path)
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (w, h) = (img.width() as usize, img.height() as usize);
    if w == 0 || h == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("loaded {} ({w}x{h})", path.display());
    Ok(Texture::from_rgba(name, w, h, img.into_raw()))
}

/// Load `<dir>/<name>.png` for every name, in order, into `bank`.
///
/// Inserting in list order keeps bank ids equal to the level's tile ids
/// when the bank starts out empty.
pub fn load_texture_dir(
    dir: &Path,
    names: &[&str],
    bank: &mut TextureBank,
) -> Result<Vec<TextureId>, LoadError> {
    let ids = names
        .iter()
        .map(|name| {
            let tex = load_texture(&dir.join(format!("{name}.png")))?;
            Ok(bank.insert(*name, tex)?)
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    log::info!("loaded {} textures from {}", ids.len(), dir.display());
    Ok(ids)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
