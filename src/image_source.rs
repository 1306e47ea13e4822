use crate::RegionError;

/// A fully loaded raster that can be read pixel by pixel.
///
/// Implementations must be pure: `color_at` returns equal colours for equal
/// coordinates for as long as the source lives. `color_at` is only called with
/// `x < width()` and `y < height()`.
pub trait ImageSource {
    /// An opaque pixel colour. Only equality between colours is ever used.
    type Color: Eq;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn color_at(&self, x: usize, y: usize) -> Self::Color;
}

impl<S: ImageSource + ?Sized> ImageSource for &S {
    type Color = S::Color;

    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn color_at(&self, x: usize, y: usize) -> Self::Color {
        (**self).color_at(x, y)
    }
}

/// An in-memory, row-major raster of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage<C> {
    width: usize,
    height: usize,
    data: Vec<C>,
}

impl<C> RasterImage<C> {

    /// Wraps a row-major pixel buffer.
    ///
    /// # Returns
    /// * the raster, or an error if `width * height` overflows or disagrees
    ///   with the length of `data`.
    pub fn from_vec(width: usize, height: usize, data: Vec<C>) -> Result<Self, RegionError> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(RegionError::SizeMismatch(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                data.len()
            )));
        }
        Ok(RasterImage { width, height, data })
    }

    /// Builds a raster from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, RegionError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(RegionError::SizeMismatch(format!(
                    "row 0 has {width} pixels, but row {y} has {}",
                    row.len()
                )));
            }
        }
        let data = rows.into_iter().flatten().collect();
        RasterImage::from_vec(width, height, data)
    }

    /// The row-major pixel buffer.
    pub fn data(&self) -> &[C] {
        &self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<&C> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }
}

impl<C: Clone> RasterImage<C> {

    /// A raster where every pixel has the same colour.
    pub fn new_fill(width: usize, height: usize, color: C) -> Result<Self, RegionError> {
        let len = checked_area(width, height)?;
        Ok(RasterImage { width, height, data: vec![color; len] })
    }
}

impl<C: Eq + Clone> ImageSource for RasterImage<C> {
    type Color = C;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    /// # Panics
    /// * if `(x, y)` lies outside the image.
    fn color_at(&self, x: usize, y: usize) -> C {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} image",
            self.width,
            self.height
        );
        self.data[y * self.width + x].clone()
    }
}

pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize, RegionError> {
    width.checked_mul(height).ok_or_else(|| {
        RegionError::InvalidDimensions(format!(
            "{width}x{height} pixels exceeds the addressable index range"
        ))
    })
}
