use serde::Serialize;

/// Grid dimensions plus the index ↔ coordinate mapping.
///
/// Dimensions derive from the bit depth by splitting the `3·bits` total bits
/// between the two axes, so the grid is as close to square as a power of two
/// allows and `width · height` equals the color-space size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub width: usize,
    pub height: usize,
}

impl GridLayout {
    /// Layout matching the color space at `bits` bits per channel.
    pub fn for_bits(bits: u8) -> Self {
        let total = 3 * bits as u32;
        let shorter = total / 2;
        let longer = total - shorter;
        Self {
            width: 1usize << longer,
            height: 1usize << shorter,
        }
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Linear index for `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn coord_to_index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// `(x, y)` for a linear index, or `None` outside the grid.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells()).then(|| (index % self.width, index / self.width))
    }

    /// Up to eight Moore-neighborhood indices of `index`, excluding the cell
    /// itself and anything beyond the grid edges. An invalid `index` yields
    /// an empty iterator.
    pub fn neighbor_indices(&self, index: usize) -> NeighborIndices {
        let mut neighbors = NeighborIndices::default();
        let Some((x, y)) = self.index_to_coord(index) else {
            return neighbors;
        };
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                if let Some(n) = self.coord_to_index(nx as usize, ny as usize) {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }
}

/// Fixed-capacity iterator over Moore-neighborhood indices.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborIndices {
    buf: [usize; 8],
    len: usize,
    pos: usize,
}

impl NeighborIndices {
    #[inline]
    fn push(&mut self, index: usize) {
        self.buf[self.len] = index;
        self.len += 1;
    }
}

impl Iterator for NeighborIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.pos < self.len {
            let index = self.buf[self.pos];
            self.pos += 1;
            Some(index)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NeighborIndices {}
