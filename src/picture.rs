use bytemuck_derive::NoUninit;

use crate::color::Color;

/// One 24-bit pixel in the byte order bitmap files store it.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, NoUninit)]
#[repr(C)]
pub struct Bgr8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl From<Color> for Bgr8 {
    fn from(value: Color) -> Self {
        Bgr8 {
            b: quantize(value.b),
            g: quantize(value.g),
            r: quantize(value.r),
        }
    }
}

fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// Row-major pixel buffer; index `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Picture<T> {
    pixels: Vec<T>,
    size: (u32, u32),
}

impl<T: Clone> Picture<T> {
    pub fn filled(value: T, size: (u32, u32)) -> Self {
        let len = size.0 as usize * size.1 as usize;
        Picture { pixels: vec![value; len], size }
    }
}

impl<T> Picture<T> {
    /// `pixels.len()` must equal `width * height`.
    pub fn new(pixels: Vec<T>, size: (u32, u32)) -> Self {
        debug_assert_eq!(pixels.len(), size.0 as usize * size.1 as usize);
        Picture { pixels, size }
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    fn to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> &T {
        &self.pixels[self.to_index(x, y)]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut T {
        let index = self.to_index(x, y);
        &mut self.pixels[index]
    }

    pub fn row(&self, y: u32) -> &[T] {
        let from = self.to_index(0, y);
        &self.pixels[from..from + self.width() as usize]
    }

    pub fn buffer(&self) -> &[T] {
        &self.pixels
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Picture<U> {
        Picture {
            pixels: self.pixels.iter().map(f).collect(),
            size: self.size,
        }
    }
}

impl Picture<Color> {
    pub fn to_bgr8(&self) -> Picture<Bgr8> {
        self.map(|color| Bgr8::from(*color))
    }
}
