use std::path::Path;

use image::RgbaImage;

use crate::Result;

/// An owned RGB pixel grid, addressed by `(x, y)`.
///
/// This is the only pixel representation the codec touches; interchange with
/// generic bitmap formats goes through the `image`-crate adapters below.
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// A black grid of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.offset(x, y);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Raw RGB triples, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the RGB channels of a generic bitmap; alpha is discarded.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut raster = Self::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            raster.set(x, y, r, g, b);
        }
        raster
    }

    /// Re-expose the grid as a generic bitmap with fully opaque alpha.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b) = self.get(x, y);
            image::Rgba([r, g, b, 0xFF])
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path)?;
        Ok(Self::from_rgba(&img.to_rgba8()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgba().save(path)?;
        Ok(())
    }
}
