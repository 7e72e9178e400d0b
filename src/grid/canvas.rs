use super::layout::GridLayout;
use crate::types::Rgb;

/// Owned grid of write-once cells.
///
/// Each cell is either unset or holds one placed color; `set` refuses both
/// out-of-range indices and overwrites so a finished canvas is guaranteed to
/// hold each placed color exactly where the engine put it.
#[derive(Clone, Debug)]
pub struct Canvas {
    layout: GridLayout,
    cells: Vec<Option<Rgb>>,
    set_count: usize,
}

impl Canvas {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            cells: vec![None; layout.cells()],
            set_count: 0,
        }
    }

    #[inline]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Color at `index`, or `None` when unset or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied().flatten()
    }

    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Writes `color` at `index`. Returns `false` (and leaves the canvas
    /// untouched) when the index is out of range or the cell already holds a
    /// color.
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(color);
                self.set_count += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.set_count == self.cells.len()
    }

    /// Row-major iteration over the set cells as `(x, y, color)` triples.
    /// Covers every cell exactly once on a completed canvas.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        let width = self.layout.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| {
                cell.map(|color| (index % width, index / width, color))
            })
    }
}
