//! Row virtualization for the guide grid
//!
//! Windowing over channel rows: given scroll metrics and per-row size
//! estimates, compute the subset of rows worth mounting, with a fixed
//! overscan margin so fast scrolling never reveals blank rows. Offsets
//! are prefix sums, so lookups are binary searches.
//!
//! Row identity is not stable across dataset or layout swaps; both force
//! a full [`RowVirtualizer::remeasure`] rather than an incremental patch.

/// Extra rows kept mounted above and below the visible window
pub const DEFAULT_OVERSCAN: usize = 4;

/// Scroll metrics of the host container.
///
/// This is the whole contract the geometry needs from its surroundings:
/// scroll offsets plus client size, refreshed on scroll and resize. Any
/// host that can produce these four numbers can drive the guide.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollViewport {
    /// Horizontal scroll offset
    pub scroll_left: f32,
    /// Vertical scroll offset
    pub scroll_top: f32,
    /// Client width of the container
    pub width: f32,
    /// Client height of the container
    pub height: f32,
}

/// One mounted row: its index and vertical extent in content space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualItem {
    /// Row index in `[0, item_count)`
    pub index: usize,
    /// Top offset within the scrollable content
    pub start: f32,
    /// Row height
    pub size: f32,
}

/// Windowing state for a vertically scrolled row list
#[derive(Debug, Clone)]
pub struct RowVirtualizer {
    /// Prefix sums of row sizes; `offsets[i]` is row i's top edge,
    /// `offsets[len]` the total content height
    offsets: Vec<f32>,
    overscan: usize,
}

impl RowVirtualizer {
    /// Measure `item_count` rows with the given size estimator
    pub fn new(item_count: usize, estimate_size: impl Fn(usize) -> f32, overscan: usize) -> Self {
        let mut virtualizer = Self {
            offsets: vec![0.0],
            overscan,
        };
        virtualizer.remeasure(item_count, estimate_size);
        virtualizer
    }

    /// Re-measure from scratch.
    ///
    /// Called when the dataset is replaced or the layout config changes;
    /// row identity is not positionally stable, so incremental patching
    /// would be wrong.
    pub fn remeasure(&mut self, item_count: usize, estimate_size: impl Fn(usize) -> f32) {
        self.offsets.clear();
        self.offsets.reserve(item_count + 1);
        self.offsets.push(0.0);
        let mut acc = 0.0;
        for index in 0..item_count {
            acc += estimate_size(index).max(0.0);
            self.offsets.push(acc);
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total height of the scrollable content
    pub fn total_size(&self) -> f32 {
        *self.offsets.last().unwrap_or(&0.0)
    }

    /// The row at an index, if in range
    pub fn item(&self, index: usize) -> Option<VirtualItem> {
        (index < self.len()).then(|| VirtualItem {
            index,
            start: self.offsets[index],
            size: self.offsets[index + 1] - self.offsets[index],
        })
    }

    /// The row containing a vertical content offset, if any
    pub fn index_at(&self, offset: f32) -> Option<usize> {
        if self.is_empty() || offset < 0.0 || offset >= self.total_size() {
            return None;
        }
        let index = self.offsets[1..].partition_point(|&end| end <= offset);
        (index < self.len()).then_some(index)
    }

    /// Rows intersecting the viewport, plus the overscan margin.
    ///
    /// A not-yet-laid-out container (zero or negative height) yields an
    /// empty set; queries before first paint are valid and cheap.
    pub fn visible_items(&self, viewport: &ScrollViewport) -> Vec<VirtualItem> {
        if self.is_empty() || viewport.height <= 0.0 {
            return Vec::new();
        }

        let top = viewport.scroll_top;
        let bottom = viewport.scroll_top + viewport.height;

        // First row whose bottom edge is below the window top, and one past
        // the last row whose top edge is above the window bottom.
        let first = self.offsets[1..].partition_point(|&end| end <= top);
        let last = self.offsets[..self.len()].partition_point(|&start| start < bottom);

        let first = first.saturating_sub(self.overscan);
        let last = (last + self.overscan).min(self.len());

        (first..last)
            .filter_map(|index| self.item(index))
            .collect()
    }
}
