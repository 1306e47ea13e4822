//! Connected same-colour regions ("counties") in raster images, and their sizes.
//!
//! A map image without text is made of single-colour areas. Some of them are
//! counties, others are lakes, oceans or islands; telling them apart is left to
//! the caller. This crate finds every maximal area of identically coloured
//! pixels, where pixels are connected through their left, right, upper and
//! lower neighbours (never diagonally), and answers "how many pixels are in the
//! region containing (x, y)?".
//!
//! Regions are tracked with a weighted union-find ([`DisjointSetForest`]):
//! union-by-size keeps trees shallow, and path halving during `find` keeps
//! repeated lookups close to constant time. Building a [`RegionMap`] scans the
//! image once; afterwards every query is read-only.
//!
//! Images are consumed through the [`ImageSource`] trait, which needs only the
//! dimensions and an equality-comparable colour per pixel. [`RasterImage`] is a
//! simple in-memory implementation.
//!
//! # Examples
//! ```
//!use counties::{RasterImage, RegionMap};
//!
//!let image = RasterImage::from_rows(vec![
//!    vec![0xff0000, 0xff0000, 0x0000ff, 0x0000ff],
//!    vec![0xff0000, 0x00ff00, 0x00ff00, 0x0000ff],
//!    vec![0x00ff00, 0x00ff00, 0x0000ff, 0x0000ff],
//!]).unwrap();
//!let map = RegionMap::new(&image).unwrap();
//!assert_eq!(map.region_size(0, 0), Ok(3));
//!assert_eq!(map.region_size(1, 1), Ok(4));
//!assert_eq!(map.region_size(3, 2), Ok(5));
//!assert_eq!(map.region_count(), 3);
//!assert!(map.region_size(-1, 0).is_err());
//! ```

pub use crate::error::RegionError;
pub use crate::image_source::{ImageSource, RasterImage};
pub use crate::params::{NeighbourScan, RegionMapParams, RegionMapParamsBuilder};
pub use crate::region_map::RegionMap;
pub use crate::union_find::DisjointSetForest;

mod error;
mod image_source;
mod params;
mod region_map;
mod union_find;
