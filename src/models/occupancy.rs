//! Dense occupancy grid.

use std::fmt;

/// A `rows × columns` grid of booleans, stored row-major.
///
/// A cell is `true` iff some occupying (non-placeholder) item covers it.
/// Built fresh per call and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl OccupancyMatrix {
    /// Creates a matrix with every cell empty.
    ///
    /// Returns `None` when `rows × columns` overflows or cannot be allocated.
    #[must_use]
    pub fn try_new(rows: usize, columns: usize) -> Option<Self> {
        let len = rows.checked_mul(columns)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, false);
        Some(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.columns {
            Some(row * self.columns + col)
        } else {
            None
        }
    }

    /// Returns whether the cell is occupied, or `None` outside the grid.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col)
            .and_then(|idx| self.cells.get(idx).copied())
    }

    /// Marks a cell as occupied. Returns `false` if the cell lies outside the grid.
    pub fn mark(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col).and_then(|idx| self.cells.get_mut(idx)) {
            Some(cell) => {
                *cell = true;
                true
            }
            None => false,
        }
    }

    /// Iterates over the empty cells as `(row, col)`, row-major ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| !**occupied)
            .map(move |(idx, _)| (idx / columns, idx % columns))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Copies the matrix into nested rows (`matrix[row][col]`).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.columns).map(<[bool]>::to_vec).collect()
    }
}

/// Renders `#` for occupied and `.` for empty cells, one line per row.
impl fmt::Display for OccupancyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            let line: String = row.iter().map(|c| if *c { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
