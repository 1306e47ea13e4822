use std::fmt::Display;
use num_traits::PrimInt;
use crate::image_source::checked_area;
use crate::union_find::DisjointSetForest;
use crate::{ImageSource, RegionError, RegionMapParams};

/// The connected same-colour regions of an image, ready for size queries.
///
/// Two pixels share a region when they are joined by a chain of pixels of the
/// same colour, each sharing an edge with the next. Diagonal neighbours are
/// not connected. Built once from an [`ImageSource`] and read-only afterwards,
/// so a map can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct RegionMap {
    width: usize,
    height: usize,
    forest: DisjointSetForest,
}

impl RegionMap {

    /// Computes the regions of `source` using the default parameters.
    ///
    /// # Parameters
    /// * `source` - the fully loaded image.
    ///
    /// # Returns
    /// * The region map, or `RegionError::InvalidDimensions` if the number of
    ///   pixels cannot be indexed.
    ///
    /// # Examples
    /// ```
    ///use counties::{RasterImage, RegionMap};
    ///
    ///let image = RasterImage::from_rows(vec![
    ///    vec!['a', 'a', 'b'],
    ///    vec!['b', 'a', 'b'],
    ///]).unwrap();
    ///let map = RegionMap::new(&image).unwrap();
    ///assert_eq!(map.region_size(0, 0), Ok(3));
    ///assert_eq!(map.region_size(2, 1), Ok(2));
    ///assert_eq!(map.region_size(0, 1), Ok(1));
    /// ```
    pub fn new<S: ImageSource>(source: &S) -> Result<Self, RegionError> {
        RegionMap::with_params(source, RegionMapParams::default())
    }

    /// Computes the regions of `source` using custom parameters.
    ///
    /// Every pixel is visited in raster order and unioned with each in-bounds
    /// neighbour of the same colour selected by the parameters' neighbour scan.
    ///
    /// # Parameters
    /// * `source` - the fully loaded image.
    /// * `params` - the construction parameters.
    ///
    /// # Returns
    /// * The region map, or `RegionError::InvalidDimensions` if the number of
    ///   pixels cannot be indexed.
    ///
    /// # Examples
    /// ```
    ///use counties::{NeighbourScan, RasterImage, RegionMap, RegionMapParams};
    ///
    ///let image = RasterImage::from_vec(3, 1, vec![7, 8, 7]).unwrap();
    ///let params = RegionMapParams::builder()
    ///    .neighbour_scan(NeighbourScan::Forward)
    ///    .build();
    ///let map = RegionMap::with_params(&image, params).unwrap();
    ///assert_eq!(map.region_count(), 3);
    /// ```
    pub fn with_params<S: ImageSource>(
        source: &S,
        params: RegionMapParams,
    ) -> Result<Self, RegionError> {
        let width = source.width();
        let height = source.height();
        let n_pixels = checked_area(width, height)?;

        let mut forest = DisjointSetForest::new(n_pixels);
        let offsets = params.neighbour_scan.offsets();
        let mut n_merges = 0_usize;

        for y in 0..height {
            for x in 0..width {
                let color = source.color_at(x, y);
                let index = y * width + x;
                for &(dx, dy) in offsets {
                    let Some((nx, ny)) = neighbour(x, y, dx, dy, width, height) else {
                        continue;
                    };
                    if source.color_at(nx, ny) == color && forest.union(index, ny * width + nx) {
                        n_merges += 1;
                    }
                }
            }
        }

        if params.flatten {
            forest.flatten();
        }

        log::debug!(
            "built region map for {width}x{height} image ({:?} scan): {n_merges} merges, {} regions",
            params.neighbour_scan,
            forest.component_count()
        );

        Ok(RegionMap { width, height, forest })
    }

    /// The image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of pixels in the region containing pixel `(x, y)`.
    ///
    /// # Returns
    /// * A size between 1 and `width * height`, or `RegionError::OutOfRange`
    ///   if `(x, y)` lies outside the image (including negative coordinates).
    ///
    /// Coordinates must be integers; fractional positions do not name a pixel.
    /// ```compile_fail
    ///use counties::{RasterImage, RegionMap};
    ///
    ///let image = RasterImage::from_vec(3, 1, vec![1, 2, 2]).unwrap();
    ///let map = RegionMap::new(&image).unwrap();
    ///let _ = map.region_size(-0.5f64, 0.0f64);
    /// ```
    pub fn region_size<I: PrimInt + Display>(&self, x: I, y: I) -> Result<usize, RegionError> {
        let index = self.linear_index(x, y)?;
        Ok(self.forest.size_of_root(index))
    }

    /// Whether two pixels belong to the same region.
    pub fn same_region<I: PrimInt + Display>(
        &self,
        a: (I, I),
        b: (I, I),
    ) -> Result<bool, RegionError> {
        let a = self.linear_index(a.0, a.1)?;
        let b = self.linear_index(b.0, b.1)?;
        Ok(self.forest.root(a) == self.forest.root(b))
    }

    /// The number of maximal same-colour regions in the image. Regions are not
    /// classified, so lakes and oceans are counted alongside counties.
    pub fn region_count(&self) -> usize {
        self.forest.component_count()
    }

    fn linear_index<I: PrimInt + Display>(&self, x: I, y: I) -> Result<usize, RegionError> {
        match (x.to_usize(), y.to_usize()) {
            (Some(xu), Some(yu)) if xu < self.width && yu < self.height => {
                Ok(yu * self.width + xu)
            }
            _ => Err(RegionError::OutOfRange(format!(
                "({x}, {y}) is outside the {}x{} image",
                self.width, self.height
            ))),
        }
    }
}

fn neighbour(
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    if nx < width && ny < height {
        Some((nx, ny))
    } else {
        None
    }
}
