//! PNG encoding for straight-alpha RGBA rasters.
//!
//! Two output layouts are produced:
//! - **Indexed (color type 3)** when the raster holds at most 256 distinct
//!   colors. Concentration footprints are flat fills, so this is the
//!   common case.
//! - **RGBA (color type 6)** otherwise, e.g. when anti-aliased edges of many
//!   overlapping contours blend into more than 256 colors.

use overlay_common::Rgba;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::error::{RenderError, RenderResult};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum palette entries for an indexed PNG
const MAX_PALETTE_SIZE: usize = 256;

/// Pixel count above which palette extraction runs on the rayon pool
const PARALLEL_THRESHOLD: usize = 4096;

const COLOR_TYPE_INDEXED: u8 = 3;
const COLOR_TYPE_RGBA: u8 = 6;

/// Encode RGBA pixels, picking the indexed layout when the colors fit.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    check_buffer(pixels, width, height)?;

    let palette = if pixels.len() / 4 >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Encode an indexed PNG from a palette and one index byte per pixel.
pub fn encode_indexed(
    width: u32,
    height: u32,
    palette: &[Rgba],
    indices: &[u8],
) -> RenderResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage);
    }
    let expected = width as usize * height as usize;
    if indices.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: indices.len(),
        });
    }

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, COLOR_TYPE_INDEXED));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c.r, c.g, c.b]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c.a < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c.a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width as usize, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode a full-color RGBA PNG.
pub fn encode_rgba(pixels: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    check_buffer(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, COLOR_TYPE_RGBA));

    let idat = deflate_scanlines(pixels, width as usize * 4, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_buffer(pixels: &[u8], width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage);
    }
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

fn ihdr(width: u32, height: u32, color_type: u8) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = color_type;
    // compression, filter and interlace methods stay 0
    data
}

#[inline(always)]
fn pack(px: &[u8]) -> u32 {
    u32::from_le_bytes([px[0], px[1], px[2], px[3]])
}

#[inline(always)]
fn unpack(packed: u32) -> Rgba {
    let [r, g, b, a] = packed.to_le_bytes();
    Rgba::new(r, g, b, a)
}

fn extract_palette_sequential(pixels: &[u8]) -> Option<(Vec<Rgba>, Vec<u8>)> {
    let mut lookup: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let packed = pack(px);
        let index = match lookup.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(unpack(packed));
                lookup.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Collect distinct colors per chunk in parallel, merge them into one
/// palette, then map pixels to indices in parallel.
fn extract_palette_parallel(pixels: &[u8]) -> Option<(Vec<Rgba>, Vec<u8>)> {
    let pixels_per_chunk = (pixels.len() / 4 / rayon::current_num_threads()).max(256);

    let chunk_colors: Vec<Vec<u32>> = pixels
        .par_chunks(pixels_per_chunk * 4)
        .map(|chunk| {
            let mut local = HashSet::with_capacity(MAX_PALETTE_SIZE);
            for px in chunk.chunks_exact(4) {
                local.insert(pack(px));
                if local.len() > MAX_PALETTE_SIZE {
                    break;
                }
            }
            local.into_iter().collect()
        })
        .collect();

    let mut lookup: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    for packed in chunk_colors.into_iter().flatten() {
        if lookup.contains_key(&packed) {
            continue;
        }
        if palette.len() >= MAX_PALETTE_SIZE {
            return None;
        }
        lookup.insert(packed, palette.len() as u8);
        palette.push(unpack(packed));
    }

    let indices: Vec<u8> = pixels
        .par_chunks_exact(4)
        .map(|px| lookup.get(&pack(px)).copied().unwrap_or(0))
        .collect();

    Some((palette, indices))
}

/// Prefix each scanline with filter byte 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], row_bytes: usize, rows: usize) -> RenderResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(rows * (row_bytes + 1));
    for row in data.chunks_exact(row_bytes).take(rows) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
