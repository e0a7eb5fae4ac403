use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::layout::{size_of, InputFace, OutputFace};

/// Reads a `.mdl` face stream: packed input faces, nothing else.
pub fn read_faces<P: AsRef<Path>>(path: P) -> Result<Vec<InputFace>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read face stream {}", path.display()))?;

    if bytes.len() % size_of::INPUT_FACE != 0 {
        anyhow::bail!(
            "{} is {} bytes, not a multiple of the {}-byte input face",
            path.display(),
            bytes.len(),
            size_of::INPUT_FACE
        );
    }

    let faces: Vec<InputFace> = bytemuck::pod_collect_to_vec(&bytes);
    log::debug!("Read {} faces from {}", faces.len(), path.display());
    Ok(faces)
}

pub fn write_faces<P: AsRef<Path>>(path: P, faces: &[InputFace]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytemuck::cast_slice::<InputFace, u8>(faces))
        .with_context(|| format!("Failed to write face stream {}", path.display()))?;
    log::debug!("Wrote {} faces to {}", faces.len(), path.display());
    Ok(())
}

/// Reads a baked stream of packed output faces.
pub fn read_baked<P: AsRef<Path>>(path: P) -> Result<Vec<OutputFace>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read baked stream {}", path.display()))?;

    if bytes.len() % size_of::OUTPUT_FACE != 0 {
        anyhow::bail!(
            "{} is {} bytes, not a multiple of the {}-byte output face",
            path.display(),
            bytes.len(),
            size_of::OUTPUT_FACE
        );
    }

    Ok(bytemuck::pod_collect_to_vec(&bytes))
}

pub fn write_baked<P: AsRef<Path>>(path: P, faces: &[OutputFace]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytemuck::cast_slice::<OutputFace, u8>(faces))
        .with_context(|| format!("Failed to write baked stream {}", path.display()))?;
    log::debug!("Wrote {} baked faces to {}", faces.len(), path.display());
    Ok(())
}
