//! Uncompressed 24-bit BMP writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::color::Color;
use crate::picture::{Bgr8, Picture};

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Whole inches-per-metre factor applied to the dpi.
const INCHES_PER_METRE: u32 = 39;

/// Bytes per stored row, padded to a 4-byte boundary.
fn row_stride(width: u32) -> Option<u32> {
    width.checked_mul(3)?.checked_add(3).map(|len| len & !3)
}

/// Total file size, or `None` when the image does not fit the 32-bit size fields.
pub fn file_size(width: u32, height: u32) -> Option<u32> {
    row_stride(width)?
        .checked_mul(height)?
        .checked_add(FILE_HEADER_LEN + INFO_HEADER_LEN)
}

fn too_large(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{what} does not fit a bitmap header"))
}

fn header(width: u32, height: u32, dpi: u32) -> io::Result<[u8; 54]> {
    let total = file_size(width, height).ok_or_else(|| too_large("image size"))?;
    let image_size = total - FILE_HEADER_LEN - INFO_HEADER_LEN;
    let ppm = dpi.checked_mul(INCHES_PER_METRE).ok_or_else(|| too_large("resolution"))?;

    let mut header = [0u8; 54];
    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&total.to_le_bytes());
    header[10..14].copy_from_slice(&(FILE_HEADER_LEN + INFO_HEADER_LEN).to_le_bytes());

    let info = &mut header[14..];
    info[0..4].copy_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    info[4..8].copy_from_slice(&width.to_le_bytes());
    info[8..12].copy_from_slice(&height.to_le_bytes());
    info[12..14].copy_from_slice(&1u16.to_le_bytes());
    info[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    // bytes 16..20: compression, 0 = none
    info[20..24].copy_from_slice(&image_size.to_le_bytes());
    info[24..28].copy_from_slice(&ppm.to_le_bytes());
    info[28..32].copy_from_slice(&ppm.to_le_bytes());
    Ok(header)
}

/// Writes `picture` as a bottom-up bitmap: buffer row 0 is the first stored row.
pub fn write_bmp<W: Write>(picture: &Picture<Bgr8>, dpi: u32, mut out: W) -> io::Result<()> {
    let width = picture.width();
    out.write_all(&header(width, picture.height(), dpi)?)?;

    let stride = row_stride(width).ok_or_else(|| too_large("row width"))?;
    let padding = [0u8; 3];
    let pad = (stride - width * 3) as usize;
    for y in 0..picture.height() {
        out.write_all(bytemuck::cast_slice(picture.row(y)))?;
        out.write_all(&padding[..pad])?;
    }
    out.flush()
}

pub fn save_bmp(picture: &Picture<Color>, dpi: u32, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    write_bmp(&picture.to_bgr8(), dpi, BufWriter::new(file))
}
