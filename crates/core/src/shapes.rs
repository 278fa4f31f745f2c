//! Shape tables - precomputed rotation states for the 7 piece kinds
//!
//! Every kind uses a uniform 5x5 matrix so rotation needs no per-kind pivot
//! math: `rotation` just indexes into a 4-entry table. O's four entries are
//! identical, which locks its rotation without special-casing the algorithm.
//! I, S and Z cycle through two distinct states repeated twice.

use blockfall_types::{PieceKind, SHAPE_SIZE};

/// One rotation state; nonzero entries are occupied cells
pub type ShapeMatrix = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

/// Horizontal kick offsets tried, in order, when a rotation collides
pub const KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// Get the shape matrix for a piece kind and rotation index (0-3)
pub fn shape(kind: PieceKind, rotation: u8) -> &'static ShapeMatrix {
    &SHAPE_TABLE[kind.index()][(rotation % 4) as usize]
}

/// Iterate the occupied cells of a shape as (dx, dy) offsets from the anchor
pub fn occupied_cells(shape: &ShapeMatrix) -> impl Iterator<Item = (i8, i8)> + '_ {
    shape.iter().enumerate().flat_map(|(dy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, &cell)| cell != 0)
            .map(move |(dx, _)| (dx as i8, dy as i8))
    })
}

/// Rotation tables indexed by `PieceKind::index()`
static SHAPE_TABLE: [[ShapeMatrix; 4]; 7] = [
    I_SHAPES, J_SHAPES, L_SHAPES, O_SHAPES, S_SHAPES, T_SHAPES, Z_SHAPES,
];

const I_VERTICAL: ShapeMatrix = [
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
];

const I_HORIZONTAL: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

const I_SHAPES: [ShapeMatrix; 4] = [I_VERTICAL, I_HORIZONTAL, I_VERTICAL, I_HORIZONTAL];

const J_SHAPES: [ShapeMatrix; 4] = [
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0],
    ],
];

const L_SHAPES: [ShapeMatrix; 4] = [
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ],
];

const O_SQUARE: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0],
];

const O_SHAPES: [ShapeMatrix; 4] = [O_SQUARE, O_SQUARE, O_SQUARE, O_SQUARE];

const S_HORIZONTAL: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0],
];

const S_VERTICAL: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0],
];

const S_SHAPES: [ShapeMatrix; 4] = [S_HORIZONTAL, S_VERTICAL, S_HORIZONTAL, S_VERTICAL];

const T_SHAPES: [ShapeMatrix; 4] = [
    [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ],
];

const Z_HORIZONTAL: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

const Z_VERTICAL: ShapeMatrix = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
];

const Z_SHAPES: [ShapeMatrix; 4] = [Z_HORIZONTAL, Z_VERTICAL, Z_HORIZONTAL, Z_VERTICAL];
