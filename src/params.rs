// Defaults for parameters
const NEIGHBOUR_SCAN_DEFAULT: NeighbourScan = NeighbourScan::FourWay;
const FLATTEN_DEFAULT: bool = true;

/// Which neighbours of each pixel are compared while building a region map.
/// Both options produce exactly the same regions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NeighbourScan {
    /// Right, left, below and above. The left and above checks repeat work
    /// already done from the neighbouring pixel and end up as no-op unions.
    FourWay,
    /// Right and below only. Every adjacent pair is still visited once by the
    /// raster-order scan.
    Forward,
}

impl NeighbourScan {
    pub(crate) fn offsets(&self) -> &'static [(isize, isize)] {
        match *self {
            Self::FourWay => &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            Self::Forward => &[(1, 0), (0, 1)],
        }
    }
}

/// Parameters controlling how a `RegionMap` is built. Use
/// `RegionMapParams::default()` unless you need to change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMapParams {
    pub(crate) neighbour_scan: NeighbourScan,
    pub(crate) flatten: bool,
}

/// Builder object to set custom region map parameters.
pub struct RegionMapParamsBuilder {
    neighbour_scan: Option<NeighbourScan>,
    flatten: Option<bool>,
}

impl Default for RegionMapParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RegionMapParams {

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter builder
    pub fn builder() -> RegionMapParamsBuilder {
        RegionMapParamsBuilder {
            neighbour_scan: None,
            flatten: None,
        }
    }

    pub fn neighbour_scan(&self) -> NeighbourScan {
        self.neighbour_scan
    }

    pub fn flatten(&self) -> bool {
        self.flatten
    }
}

impl RegionMapParamsBuilder {

    /// Sets which neighbours are compared for each pixel during construction.
    /// Defaults to `NeighbourScan::FourWay`.
    ///
    /// # Parameters
    /// * neighbour_scan - the neighbour scan strategy
    ///
    /// # Returns
    /// * the parameter builder
    pub fn neighbour_scan(mut self, neighbour_scan: NeighbourScan) -> RegionMapParamsBuilder {
        self.neighbour_scan = Some(neighbour_scan);
        self
    }

    /// Sets whether every pixel is pointed directly at its region's root once
    /// construction is done. With flattening, size queries take a single step.
    /// Without it, queries walk up the tree without modifying it.
    /// Defaults to true.
    ///
    /// # Parameters
    /// * flatten - whether to flatten the forest after construction
    ///
    /// # Returns
    /// * the parameter builder
    pub fn flatten(mut self, flatten: bool) -> RegionMapParamsBuilder {
        self.flatten = Some(flatten);
        self
    }

    /// Finishes the building of the parameters.
    ///
    /// # Returns
    /// * The completed region map parameters.
    pub fn build(self) -> RegionMapParams {
        RegionMapParams {
            neighbour_scan: self.neighbour_scan.unwrap_or(NEIGHBOUR_SCAN_DEFAULT),
            flatten: self.flatten.unwrap_or(FLATTEN_DEFAULT),
        }
    }
}
