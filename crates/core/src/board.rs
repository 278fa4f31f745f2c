//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the
//! generic locked marker. Uses a flat array for cache locality and
//! zero-allocation scanning.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Shape cells above the board (y < 0) are legal during
//! spawn and are never occupancy-checked.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, Locked, BOARD_HEIGHT, BOARD_WIDTH};

use crate::shapes::{occupied_cells, ShapeMatrix};
use crate::tetromino::Tetromino;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row list bounded by the board height
pub type RowList = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if an in-bounds cell is occupied
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a shape fits at anchor (x, y).
    ///
    /// Fails if any occupied shape cell lands outside [0, WIDTH) horizontally
    /// or at or below the bottom edge, or overlaps a locked cell. Cells with
    /// board-y < 0 are allowed (piece partially above the visible board at
    /// spawn) and never occupancy-checked. No side effects.
    pub fn is_valid_position(&self, shape: &ShapeMatrix, x: i8, y: i8) -> bool {
        for (dx, dy) in occupied_cells(shape) {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return false;
            }
            if by >= 0 && self.is_occupied(bx, by) {
                return false;
            }
        }
        true
    }

    /// Fix a piece's occupied cells into the grid as locked markers.
    ///
    /// Cells with board-y < 0 are silently ignored; they cannot occur for a
    /// piece that passed `is_valid_position` and then only moved down.
    pub fn place_piece(&mut self, piece: &Tetromino) {
        for (dx, dy) in occupied_cells(piece.current_shape()) {
            let by = piece.y + dy;
            if by >= 0 {
                self.set(piece.x + dx, by, Some(Locked));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Scan all rows and return the indices of fully occupied ones,
    /// top to bottom (ascending)
    pub fn find_full_rows(&self) -> RowList {
        let mut full = RowList::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                full.push(y);
            }
        }
        full
    }

    /// Physically delete the given rows and compact the remainder downward.
    ///
    /// `rows` must be sorted ascending. Scans bottom to top with a counter of
    /// rows to drop through: a row in the removal set increments the counter;
    /// any other row is copied down by the current counter. Vacated top rows
    /// are cleared afterward. Each surviving row drops by exactly the number
    /// of removed rows below it, so non-adjacent removals cascade correctly.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));

        let width = BOARD_WIDTH as usize;
        let mut drop = 0usize;

        for y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&y) {
                drop += 1;
            } else if drop > 0 {
                let src = y * width;
                let dst = (y + drop) * width;
                self.cells.copy_within(src..src + width, dst);
                self.cells[src..src + width].fill(None);
            }
        }

        for y in 0..drop {
            let start = y * width;
            self.cells[start..start + width].fill(None);
        }
    }

    /// Reset all cells to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into a u8 matrix (0 = empty, 1 = locked) for the
    /// snapshot surface
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = self.cells[y * BOARD_WIDTH as usize + x].is_some() as u8;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    fn single_cell_shape() -> ShapeMatrix {
        let mut m = [[0u8; 5]; 5];
        m[0][0] = 1;
        m
    }

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(Locked));
        }
    }

    #[test]
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_valid_position_borders() {
        let board = Board::new();
        let shape = single_cell_shape();

        assert!(board.is_valid_position(&shape, 0, 0));
        assert!(!board.is_valid_position(&shape, -1, 0));
        assert!(!board.is_valid_position(&shape, BOARD_WIDTH as i8, 0));
        assert!(!board.is_valid_position(&shape, 0, BOARD_HEIGHT as i8));
        // Above the visible board is legal (spawn allowance)
        assert!(board.is_valid_position(&shape, 0, -1));
    }

    #[test]
    fn test_valid_position_occupancy() {
        let mut board = Board::new();
        let shape = single_cell_shape();

        board.set(4, 10, Some(Locked));
        assert!(!board.is_valid_position(&shape, 4, 10));
        // Adjacent cells stay valid
        assert!(board.is_valid_position(&shape, 3, 10));
        assert!(board.is_valid_position(&shape, 5, 10));
        assert!(board.is_valid_position(&shape, 4, 9));
        assert!(board.is_valid_position(&shape, 4, 11));
    }

    #[test]
    fn test_place_piece_marks_locked() {
        let mut board = Board::new();
        let piece = Tetromino::new(PieceKind::O);
        board.place_piece(&piece);

        // O occupies matrix rows 2-3, cols 1-2 relative to the anchor
        assert_eq!(board.get(4, 2), Some(Some(Locked)));
        assert_eq!(board.get(5, 2), Some(Some(Locked)));
        assert_eq!(board.get(4, 3), Some(Some(Locked)));
        assert_eq!(board.get(5, 3), Some(Some(Locked)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn test_place_piece_ignores_cells_above_board() {
        let mut board = Board::new();
        let mut piece = Tetromino::new(PieceKind::I);
        // Vertical I at y = -2: matrix rows 0-1 land above the board
        piece.set_position(3, -2);
        board.place_piece(&piece);

        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
        assert_eq!(board.get(5, 0), Some(Some(Locked)));
        assert_eq!(board.get(5, 1), Some(Some(Locked)));
    }

    #[test]
    fn test_find_full_rows() {
        let mut board = Board::new();
        assert!(board.find_full_rows().is_empty());

        fill_row(&mut board, 19);
        fill_row(&mut board, 16);
        board.set(0, 18, Some(Locked));

        let full = board.find_full_rows();
        assert_eq!(full.as_slice(), &[16, 19]);
    }

    #[test]
    fn test_remove_single_row_drops_marker() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(4, 18, Some(Locked));

        board.remove_rows(&[19]);

        assert_eq!(board.get(4, 19), Some(Some(Locked)));
        assert_eq!(board.get(4, 18), Some(None));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_remove_four_rows_drops_marker() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y);
        }
        board.set(2, 15, Some(Locked));

        board.remove_rows(&[16, 17, 18, 19]);

        assert_eq!(board.get(2, 19), Some(Some(Locked)));
        assert_eq!(board.get(2, 15), Some(None));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_remove_non_adjacent_rows_cascade() {
        let mut board = Board::new();
        fill_row(&mut board, 16);
        fill_row(&mut board, 18);
        // Markers between and above the removed rows
        board.set(0, 17, Some(Locked));
        board.set(1, 15, Some(Locked));

        board.remove_rows(&[16, 18]);

        // Row 17 had one removed row below it, drops by 1
        assert_eq!(board.get(0, 18), Some(Some(Locked)));
        // Row 15 had two removed rows below it, drops by 2
        assert_eq!(board.get(1, 17), Some(Some(Locked)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        fill_row(&mut board, 10);
        board.clear();
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(3, 7, Some(Locked));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[7][3], 1);
        let total: u32 = grid.iter().flatten().map(|&c| c as u32).sum();
        assert_eq!(total, 1);
    }
}
