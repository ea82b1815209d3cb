//! Regular-cell data consumed by [`crate::TransvoxelBlock`].
//!
//! The block engine treats this as an opaque data set with a fixed
//! contract: `REGULAR_CELL_CLASS` maps an 8-bit case code (bit set =
//! corner negative, binary corner order) to an equivalence class;
//! `REGULAR_CELL_DATA` gives each class's vertex count and triangle
//! list (indices into the cell's vertex list, in creation order); and
//! `REGULAR_VERTEX_DATA` lists one `0xDSVV` descriptor per vertex:
//!
//! * `D` - direction to the cell that owns the vertex. Bits 1/2/4 mean
//!   subtract one from x/y/z; bit 8 means the current cell creates it.
//! * `S` - vertex slot within the owning cell (1/2/3 for the x/y/z
//!   edges ending at its corner 7).
//! * `VV` - the two corner indices of the edge, low corner first.
//!
//! This data set is derived from [`crate::tables::CASES_CLASSIC`], so
//! its triangulation choices on ambiguous cases match the classic
//! Marching Cubes table.

/// Vertex count and triangle list for one equivalence class of cells.
pub struct RegularCellData {
    pub vertex_count: u8,
    /// Triangles as indices into the cell's vertex list; length is a
    /// multiple of 3.
    pub triangles: &'static [u8],
}

/// Case code to equivalence class.
pub const REGULAR_CELL_CLASS: [u8; 256] = [
    0, 1, 1, 2, 1, 2, 3, 4, 1, 3, 2, 4, 2, 4, 4, 5,
    1, 2, 3, 4, 3, 4, 6, 7, 8, 9, 9, 10, 9, 11, 12, 13,
    1, 3, 2, 4, 8, 9, 9, 14, 3, 6, 4, 7, 9, 15, 10, 13,
    2, 4, 4, 5, 9, 10, 15, 13, 9, 15, 14, 13, 16, 17, 17, 18,
    1, 3, 8, 9, 2, 4, 9, 19, 3, 6, 9, 15, 4, 20, 14, 13,
    2, 4, 9, 14, 4, 21, 12, 13, 9, 15, 22, 17, 19, 13, 17, 18,
    3, 6, 9, 15, 9, 12, 22, 17, 6, 23, 15, 24, 15, 24, 17, 8,
    4, 20, 19, 13, 11, 13, 17, 18, 12, 24, 17, 8, 17, 8, 8, 1,
    1, 8, 3, 9, 3, 9, 6, 15, 2, 9, 4, 14, 4, 10, 7, 13,
    3, 9, 6, 12, 6, 12, 23, 24, 9, 16, 15, 17, 12, 17, 24, 8,
    2, 9, 4, 10, 9, 16, 12, 17, 4, 15, 5, 13, 11, 17, 13, 18,
    4, 11, 7, 13, 12, 17, 24, 8, 10, 17, 13, 18, 17, 8, 8, 1,
    2, 9, 9, 22, 4, 11, 12, 17, 4, 12, 19, 17, 21, 13, 13, 18,
    4, 19, 12, 17, 20, 13, 24, 8, 11, 17, 17, 8, 13, 18, 8, 1,
    4, 15, 14, 17, 19, 17, 17, 8, 20, 24, 13, 8, 13, 8, 18, 1,
    21, 13, 13, 18, 13, 18, 8, 1, 13, 8, 18, 1, 18, 1, 1, 0,
];

/// Per-class templates; indexed by `REGULAR_CELL_CLASS` values.
pub const REGULAR_CELL_DATA: [RegularCellData; 25] = [
    RegularCellData { vertex_count: 0, triangles: &[] },
    RegularCellData { vertex_count: 3, triangles: &[0, 1, 2] },
    RegularCellData { vertex_count: 4, triangles: &[0, 1, 2, 3, 0, 2] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 0, 2, 3, 4, 5, 2, 5, 3, 2] },
    RegularCellData { vertex_count: 5, triangles: &[0, 1, 2, 0, 2, 3, 3, 2, 4] },
    RegularCellData { vertex_count: 4, triangles: &[0, 1, 2, 1, 3, 2] },
    RegularCellData { vertex_count: 9, triangles: &[0, 1, 2, 0, 3, 1, 0, 4, 3, 5, 3, 4, 6, 7, 8] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 3, 1, 0, 3, 4, 1, 3, 5, 4] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 3, 4, 5] },
    RegularCellData { vertex_count: 7, triangles: &[0, 1, 2, 0, 2, 3, 1, 4, 2, 5, 2, 6, 4, 6, 2] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 0, 3, 1, 0, 4, 3, 3, 5, 1] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 5, 3, 2] },
    RegularCellData { vertex_count: 8, triangles: &[0, 1, 2, 3, 4, 5, 4, 6, 5, 4, 7, 6] },
    RegularCellData { vertex_count: 5, triangles: &[0, 1, 2, 0, 3, 1, 3, 4, 1] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 0, 3, 1, 0, 4, 3, 5, 1, 3] },
    RegularCellData { vertex_count: 8, triangles: &[0, 1, 2, 3, 4, 5, 3, 5, 6, 5, 4, 7] },
    RegularCellData { vertex_count: 8, triangles: &[0, 1, 2, 0, 3, 1, 4, 5, 6, 5, 7, 6] },
    RegularCellData { vertex_count: 7, triangles: &[0, 1, 2, 0, 3, 1, 4, 5, 6] },
    RegularCellData { vertex_count: 4, triangles: &[0, 1, 2, 3, 1, 0] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 0, 2, 3, 0, 3, 4, 3, 2, 5] },
    RegularCellData { vertex_count: 6, triangles: &[0, 1, 2, 3, 0, 2, 3, 2, 4, 3, 4, 5] },
    RegularCellData { vertex_count: 4, triangles: &[0, 1, 2, 2, 1, 3] },
    RegularCellData { vertex_count: 8, triangles: &[0, 1, 2, 2, 1, 3, 4, 5, 6, 4, 6, 7] },
    RegularCellData { vertex_count: 12, triangles: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
    RegularCellData { vertex_count: 9, triangles: &[0, 1, 2, 3, 4, 5, 6, 7, 8] },
];

/// Edge descriptors for the vertices of each case code.
pub const REGULAR_VERTEX_DATA: [&[u16]; 256] = [
    &[],
    &[0x6101, 0x5202, 0x3304],
    &[0x6101, 0x2315, 0x4213],
    &[0x4213, 0x5202, 0x3304, 0x2315],
    &[0x5202, 0x4123, 0x1326],
    &[0x6101, 0x4123, 0x1326, 0x3304],
    &[0x5202, 0x6101, 0x2315, 0x1326, 0x4213, 0x4123],
    &[0x4213, 0x4123, 0x1326, 0x2315, 0x3304],
    &[0x4213, 0x8337, 0x4123],
    &[0x4123, 0x5202, 0x3304, 0x8337, 0x6101, 0x4213],
    &[0x2315, 0x8337, 0x4123, 0x6101],
    &[0x4123, 0x5202, 0x3304, 0x8337, 0x2315],
    &[0x5202, 0x4213, 0x8337, 0x1326],
    &[0x6101, 0x4213, 0x8337, 0x3304, 0x1326],
    &[0x5202, 0x6101, 0x2315, 0x1326, 0x8337],
    &[0x2315, 0x8337, 0x3304, 0x1326],
    &[0x2145, 0x3304, 0x1246],
    &[0x2145, 0x6101, 0x5202, 0x1246],
    &[0x2145, 0x2315, 0x4213, 0x1246, 0x6101, 0x3304],
    &[0x2145, 0x2315, 0x4213, 0x1246, 0x5202],
    &[0x1326, 0x1246, 0x2145, 0x4123, 0x3304, 0x5202],
    &[0x1326, 0x1246, 0x2145, 0x4123, 0x6101],
    &[0x2315, 0x1246, 0x2145, 0x1326, 0x4213, 0x4123, 0x6101, 0x3304, 0x5202],
    &[0x2145, 0x1326, 0x1246, 0x2315, 0x4123, 0x4213],
    &[0x4213, 0x8337, 0x4123, 0x3304, 0x1246, 0x2145],
    &[0x5202, 0x1246, 0x8337, 0x4123, 0x2145, 0x4213, 0x6101],
    &[0x2315, 0x8337, 0x1246, 0x2145, 0x4123, 0x3304, 0x6101],
    &[0x4123, 0x2315, 0x8337, 0x1246, 0x5202, 0x2145],
    &[0x5202, 0x4213, 0x2145, 0x3304, 0x8337, 0x1246, 0x1326],
    &[0x4213, 0x8337, 0x1326, 0x2145, 0x6101, 0x1246],
    &[0x6101, 0x3304, 0x5202, 0x2145, 0x2315, 0x1246, 0x1326, 0x8337],
    &[0x2145, 0x1326, 0x1246, 0x2315, 0x8337],
    &[0x2315, 0x2145, 0x8257],
    &[0x3304, 0x2145, 0x8257, 0x5202, 0x2315, 0x6101],
    &[0x6101, 0x2145, 0x8257, 0x4213],
    &[0x3304, 0x2145, 0x8257, 0x5202, 0x4213],
    &[0x2315, 0x2145, 0x8257, 0x4123, 0x1326, 0x5202],
    &[0x6101, 0x4123, 0x8257, 0x2315, 0x1326, 0x2145, 0x3304],
    &[0x6101, 0x2145, 0x1326, 0x5202, 0x8257, 0x4123, 0x4213],
    &[0x4123, 0x8257, 0x4213, 0x3304, 0x1326, 0x2145],
    &[0x8257, 0x8337, 0x4123, 0x2145, 0x4213, 0x2315],
    &[0x5202, 0x8337, 0x4123, 0x8257, 0x3304, 0x2145, 0x6101, 0x4213, 0x2315],
    &[0x8257, 0x8337, 0x4123, 0x2145, 0x6101],
    &[0x4123, 0x8257, 0x8337, 0x5202, 0x2145, 0x3304],
    &[0x8337, 0x1326, 0x2145, 0x8257, 0x5202, 0x2315, 0x4213],
    &[0x6101, 0x4213, 0x2315, 0x3304, 0x2145, 0x8337, 0x1326, 0x8257],
    &[0x8257, 0x6101, 0x2145, 0x1326, 0x8337, 0x5202],
    &[0x8257, 0x3304, 0x2145, 0x8337, 0x1326],
    &[0x2315, 0x3304, 0x1246, 0x8257],
    &[0x2315, 0x6101, 0x5202, 0x8257, 0x1246],
    &[0x6101, 0x3304, 0x1246, 0x4213, 0x8257],
    &[0x4213, 0x5202, 0x8257, 0x1246],
    &[0x1246, 0x8257, 0x4123, 0x1326, 0x2315, 0x5202, 0x3304],
    &[0x2315, 0x1246, 0x8257, 0x4123, 0x6101, 0x1326],
    &[0x6101, 0x3304, 0x5202, 0x4213, 0x4123, 0x1246, 0x8257, 0x1326],
    &[0x1326, 0x4213, 0x4123, 0x1246, 0x8257],
    &[0x2315, 0x3304, 0x4123, 0x4213, 0x1246, 0x8337, 0x8257],
    &[0x2315, 0x6101, 0x4213, 0x8257, 0x8337, 0x5202, 0x1246, 0x4123],
    &[0x3304, 0x4123, 0x6101, 0x8257, 0x1246, 0x8337],
    &[0x4123, 0x8257, 0x8337, 0x5202, 0x1246],
    &[0x8337, 0x1246, 0x8257, 0x1326, 0x2315, 0x3304, 0x4213, 0x5202],
    &[0x8257, 0x1326, 0x1246, 0x8337, 0x4213, 0x2315, 0x6101],
    &[0x1326, 0x8257, 0x8337, 0x1246, 0x3304, 0x5202, 0x6101],
    &[0x1326, 0x8257, 0x8337, 0x1246],
    &[0x1246, 0x1326, 0x8167],
    &[0x1246, 0x3304, 0x6101, 0x8167, 0x5202, 0x1326],
    &[0x6101, 0x2315, 0x4213, 0x1326, 0x8167, 0x1246],
    &[0x3304, 0x2315, 0x8167, 0x1246, 0x4213, 0x1326, 0x5202],
    &[0x1246, 0x5202, 0x4123, 0x8167],
    &[0x1246, 0x3304, 0x6101, 0x8167, 0x4123],
    &[0x4123, 0x8167, 0x2315, 0x4213, 0x1246, 0x6101, 0x5202],
    &[0x4213, 0x4123, 0x8167, 0x3304, 0x2315, 0x1246],
    &[0x1326, 0x4123, 0x4213, 0x1246, 0x8337, 0x8167],
    &[0x4213, 0x3304, 0x6101, 0x1246, 0x8337, 0x8167, 0x4123, 0x5202, 0x1326],
    &[0x4123, 0x6101, 0x1246, 0x1326, 0x2315, 0x8167, 0x8337],
    &[0x4123, 0x5202, 0x1326, 0x8337, 0x8167, 0x3304, 0x2315, 0x1246],
    &[0x8337, 0x8167, 0x1246, 0x4213, 0x5202],
    &[0x8337, 0x8167, 0x1246, 0x4213, 0x3304, 0x6101],
    &[0x6101, 0x1246, 0x5202, 0x8337, 0x2315, 0x8167],
    &[0x1246, 0x8337, 0x8167, 0x3304, 0x2315],
    &[0x8167, 0x2145, 0x3304, 0x1326],
    &[0x5202, 0x1326, 0x8167, 0x6101, 0x2145],
    &[0x3304, 0x1326, 0x4213, 0x6101, 0x8167, 0x2315, 0x2145],
    &[0x2315, 0x8167, 0x2145, 0x5202, 0x4213, 0x1326],
    &[0x3304, 0x5202, 0x4123, 0x2145, 0x8167],
    &[0x6101, 0x4123, 0x2145, 0x8167],
    &[0x5202, 0x6101, 0x3304, 0x4213, 0x4123, 0x2315, 0x2145, 0x8167],
    &[0x4213, 0x2145, 0x2315, 0x4123, 0x8167],
    &[0x8167, 0x2145, 0x4213, 0x8337, 0x3304, 0x4123, 0x1326],
    &[0x5202, 0x1326, 0x4123, 0x6101, 0x4213, 0x8167, 0x2145, 0x8337],
    &[0x6101, 0x3304, 0x4123, 0x1326, 0x2145, 0x2315, 0x8337, 0x8167],
    &[0x8337, 0x2145, 0x2315, 0x8167, 0x1326, 0x4123, 0x5202],
    &[0x3304, 0x5202, 0x4213, 0x8167, 0x2145, 0x8337],
    &[0x8337, 0x6101, 0x4213, 0x8167, 0x2145],
    &[0x2145, 0x8337, 0x8167, 0x2315, 0x6101, 0x3304, 0x5202],
    &[0x8337, 0x2145, 0x2315, 0x8167],
    &[0x8167, 0x8257, 0x2315, 0x1326, 0x2145, 0x1246],
    &[0x6101, 0x8257, 0x2315, 0x8167, 0x5202, 0x1326, 0x3304, 0x2145, 0x1246],
    &[0x8257, 0x4213, 0x1326, 0x8167, 0x6101, 0x1246, 0x2145],
    &[0x3304, 0x2145, 0x1246, 0x5202, 0x1326, 0x8257, 0x4213, 0x8167],
    &[0x1246, 0x5202, 0x2315, 0x2145, 0x4123, 0x8257, 0x8167],
    &[0x3304, 0x2145, 0x1246, 0x2315, 0x6101, 0x8257, 0x8167, 0x4123],
    &[0x4213, 0x4123, 0x8257, 0x8167, 0x5202, 0x6101, 0x2145, 0x1246],
    &[0x8167, 0x4213, 0x4123, 0x8257, 0x2145, 0x1246, 0x3304],
    &[0x2315, 0x4123, 0x4213, 0x1326, 0x2145, 0x1246, 0x8257, 0x8337, 0x8167],
    &[0x6101, 0x4213, 0x2315, 0x2145, 0x1246, 0x3304, 0x4123, 0x5202, 0x1326, 0x8257, 0x8337, 0x8167],
    &[0x8257, 0x8337, 0x8167, 0x2145, 0x1246, 0x4123, 0x6101, 0x1326],
    &[0x5202, 0x1326, 0x4123, 0x1246, 0x3304, 0x2145, 0x8337, 0x8167, 0x8257],
    &[0x8337, 0x8167, 0x8257, 0x4213, 0x2315, 0x1246, 0x5202, 0x2145],
    &[0x4213, 0x2315, 0x6101, 0x8257, 0x8337, 0x8167, 0x3304, 0x2145, 0x1246],
    &[0x2145, 0x5202, 0x6101, 0x1246, 0x8167, 0x8257, 0x8337],
    &[0x8257, 0x8337, 0x8167, 0x2145, 0x1246, 0x3304],
    &[0x8167, 0x8257, 0x2315, 0x1326, 0x3304],
    &[0x5202, 0x1326, 0x8167, 0x6101, 0x8257, 0x2315],
    &[0x6101, 0x3304, 0x1326, 0x8257, 0x4213, 0x8167],
    &[0x8167, 0x5202, 0x1326, 0x8257, 0x4213],
    &[0x8257, 0x2315, 0x3304, 0x4123, 0x8167, 0x5202],
    &[0x2315, 0x8167, 0x8257, 0x6101, 0x4123],
    &[0x4213, 0x8167, 0x8257, 0x4123, 0x5202, 0x6101, 0x3304],
    &[0x4213, 0x8167, 0x8257, 0x4123],
    &[0x8257, 0x8337, 0x8167, 0x4213, 0x2315, 0x4123, 0x1326, 0x3304],
    &[0x6101, 0x4213, 0x2315, 0x4123, 0x5202, 0x1326, 0x8257, 0x8337, 0x8167],
    &[0x1326, 0x6101, 0x3304, 0x4123, 0x8337, 0x8167, 0x8257],
    &[0x4123, 0x5202, 0x1326, 0x8337, 0x8167, 0x8257],
    &[0x4213, 0x3304, 0x5202, 0x2315, 0x8257, 0x8337, 0x8167],
    &[0x2315, 0x6101, 0x4213, 0x8257, 0x8337, 0x8167],
    &[0x6101, 0x3304, 0x5202, 0x8257, 0x8337, 0x8167],
    &[0x8337, 0x8167, 0x8257],
    &[0x8337, 0x8257, 0x8167],
    &[0x6101, 0x5202, 0x3304, 0x8257, 0x8167, 0x8337],
    &[0x8337, 0x4213, 0x6101, 0x8167, 0x2315, 0x8257],
    &[0x4213, 0x5202, 0x8167, 0x8337, 0x3304, 0x8257, 0x2315],
    &[0x8167, 0x1326, 0x5202, 0x8257, 0x4123, 0x8337],
    &[0x1326, 0x3304, 0x8257, 0x8167, 0x6101, 0x8337, 0x4123],
    &[0x6101, 0x1326, 0x5202, 0x8167, 0x2315, 0x8257, 0x4213, 0x4123, 0x8337],
    &[0x4213, 0x4123, 0x8337, 0x2315, 0x8257, 0x1326, 0x3304, 0x8167],
    &[0x4213, 0x8257, 0x8167, 0x4123],
    &[0x4213, 0x8257, 0x3304, 0x6101, 0x8167, 0x5202, 0x4123],
    &[0x2315, 0x8257, 0x8167, 0x6101, 0x4123],
    &[0x8257, 0x3304, 0x2315, 0x4123, 0x8167, 0x5202],
    &[0x8167, 0x1326, 0x5202, 0x8257, 0x4213],
    &[0x6101, 0x1326, 0x3304, 0x8257, 0x4213, 0x8167],
    &[0x5202, 0x8167, 0x1326, 0x6101, 0x8257, 0x2315],
    &[0x8167, 0x2315, 0x8257, 0x1326, 0x3304],
    &[0x1246, 0x8167, 0x8337, 0x3304, 0x8257, 0x2145],
    &[0x2145, 0x6101, 0x8337, 0x8257, 0x5202, 0x8167, 0x1246],
    &[0x4213, 0x8167, 0x8337, 0x1246, 0x6101, 0x3304, 0x2315, 0x8257, 0x2145],
    &[0x2315, 0x8257, 0x2145, 0x8337, 0x4213, 0x8167, 0x1246, 0x5202],
    &[0x5202, 0x2145, 0x3304, 0x8257, 0x4123, 0x8337, 0x1326, 0x1246, 0x8167],
    &[0x1246, 0x8167, 0x1326, 0x8257, 0x2145, 0x8337, 0x4123, 0x6101],
    &[0x8167, 0x1326, 0x1246, 0x4213, 0x4123, 0x8337, 0x6101, 0x3304, 0x5202, 0x2145, 0x2315, 0x8257],
    &[0x2315, 0x8257, 0x2145, 0x8337, 0x4213, 0x4123, 0x1246, 0x8167, 0x1326],
    &[0x8167, 0x4123, 0x3304, 0x1246, 0x4213, 0x2145, 0x8257],
    &[0x5202, 0x8167, 0x4123, 0x1246, 0x4213, 0x8257, 0x6101, 0x2145],
    &[0x2315, 0x8257, 0x2145, 0x6101, 0x3304, 0x8167, 0x4123, 0x1246],
    &[0x1246, 0x4123, 0x5202, 0x8167, 0x8257, 0x2145, 0x2315],
    &[0x1326, 0x1246, 0x8167, 0x3304, 0x5202, 0x2145, 0x8257, 0x4213],
    &[0x8257, 0x6101, 0x4213, 0x2145, 0x1246, 0x8167, 0x1326],
    &[0x6101, 0x3304, 0x5202, 0x2145, 0x2315, 0x8257, 0x1326, 0x1246, 0x8167],
    &[0x2145, 0x2315, 0x8257, 0x1246, 0x8167, 0x1326],
    &[0x8337, 0x2315, 0x2145, 0x8167],
    &[0x2145, 0x8167, 0x5202, 0x3304, 0x8337, 0x6101, 0x2315],
    &[0x8337, 0x4213, 0x6101, 0x8167, 0x2145],
    &[0x3304, 0x4213, 0x5202, 0x8167, 0x2145, 0x8337],
    &[0x8337, 0x2315, 0x5202, 0x4123, 0x2145, 0x1326, 0x8167],
    &[0x2145, 0x1326, 0x3304, 0x8167, 0x6101, 0x4123, 0x2315, 0x8337],
    &[0x4213, 0x4123, 0x8337, 0x5202, 0x6101, 0x1326, 0x8167, 0x2145],
    &[0x8167, 0x3304, 0x2145, 0x1326, 0x4123, 0x8337, 0x4213],
    &[0x4213, 0x2315, 0x2145, 0x4123, 0x8167],
    &[0x4213, 0x2315, 0x6101, 0x4123, 0x5202, 0x2145, 0x8167, 0x3304],
    &[0x6101, 0x2145, 0x4123, 0x8167],
    &[0x3304, 0x4123, 0x5202, 0x2145, 0x8167],
    &[0x2315, 0x2145, 0x8167, 0x5202, 0x4213, 0x1326],
    &[0x3304, 0x8167, 0x1326, 0x2145, 0x2315, 0x6101, 0x4213],
    &[0x5202, 0x8167, 0x1326, 0x6101, 0x2145],
    &[0x8167, 0x3304, 0x2145, 0x1326],
    &[0x1246, 0x8167, 0x8337, 0x3304, 0x2315],
    &[0x6101, 0x5202, 0x1246, 0x8337, 0x2315, 0x8167],
    &[0x8337, 0x1246, 0x8167, 0x4213, 0x3304, 0x6101],
    &[0x8337, 0x1246, 0x8167, 0x4213, 0x5202],
    &[0x8167, 0x1326, 0x1246, 0x4123, 0x8337, 0x5202, 0x3304, 0x2315],
    &[0x4123, 0x2315, 0x6101, 0x8337, 0x8167, 0x1326, 0x1246],
    &[0x4213, 0x4123, 0x8337, 0x5202, 0x6101, 0x3304, 0x8167, 0x1326, 0x1246],
    &[0x8337, 0x4213, 0x4123, 0x8167, 0x1326, 0x1246],
    &[0x4213, 0x8167, 0x4123, 0x3304, 0x2315, 0x1246],
    &[0x4123, 0x1246, 0x8167, 0x5202, 0x6101, 0x4213, 0x2315],
    &[0x1246, 0x6101, 0x3304, 0x8167, 0x4123],
    &[0x1246, 0x4123, 0x5202, 0x8167],
    &[0x3304, 0x4213, 0x2315, 0x5202, 0x1326, 0x1246, 0x8167],
    &[0x6101, 0x4213, 0x2315, 0x1326, 0x1246, 0x8167],
    &[0x5202, 0x6101, 0x3304, 0x1326, 0x1246, 0x8167],
    &[0x1246, 0x8167, 0x1326],
    &[0x1326, 0x8337, 0x8257, 0x1246],
    &[0x1326, 0x8337, 0x6101, 0x5202, 0x8257, 0x3304, 0x1246],
    &[0x8257, 0x1246, 0x6101, 0x2315, 0x1326, 0x4213, 0x8337],
    &[0x2315, 0x8257, 0x3304, 0x1246, 0x8337, 0x4213, 0x5202, 0x1326],
    &[0x4123, 0x8337, 0x8257, 0x5202, 0x1246],
    &[0x3304, 0x6101, 0x4123, 0x8257, 0x1246, 0x8337],
    &[0x8337, 0x4213, 0x4123, 0x2315, 0x8257, 0x6101, 0x5202, 0x1246],
    &[0x2315, 0x1246, 0x3304, 0x8257, 0x8337, 0x4213, 0x4123],
    &[0x1326, 0x4123, 0x4213, 0x1246, 0x8257],
    &[0x4123, 0x5202, 0x1326, 0x6101, 0x4213, 0x3304, 0x1246, 0x8257],
    &[0x2315, 0x8257, 0x1246, 0x4123, 0x6101, 0x1326],
    &[0x1246, 0x2315, 0x8257, 0x3304, 0x5202, 0x1326, 0x4123],
    &[0x4213, 0x8257, 0x5202, 0x1246],
    &[0x6101, 0x1246, 0x3304, 0x4213, 0x8257],
    &[0x2315, 0x5202, 0x6101, 0x8257, 0x1246],
    &[0x2315, 0x1246, 0x3304, 0x8257],
    &[0x8257, 0x2145, 0x3304, 0x8337, 0x1326],
    &[0x8257, 0x2145, 0x6101, 0x1326, 0x8337, 0x5202],
    &[0x2145, 0x2315, 0x8257, 0x6101, 0x3304, 0x4213, 0x8337, 0x1326],
    &[0x8337, 0x5202, 0x1326, 0x4213, 0x2315, 0x8257, 0x2145],
    &[0x4123, 0x8337, 0x8257, 0x5202, 0x2145, 0x3304],
    &[0x8257, 0x4123, 0x8337, 0x2145, 0x6101],
    &[0x5202, 0x6101, 0x3304, 0x4213, 0x4123, 0x8337, 0x2145, 0x2315, 0x8257],
    &[0x4213, 0x4123, 0x8337, 0x2315, 0x8257, 0x2145],
    &[0x4123, 0x4213, 0x8257, 0x3304, 0x1326, 0x2145],
    &[0x6101, 0x8257, 0x2145, 0x4213, 0x4123, 0x5202, 0x1326],
    &[0x6101, 0x1326, 0x4123, 0x3304, 0x2145, 0x2315, 0x8257],
    &[0x2315, 0x8257, 0x2145, 0x4123, 0x5202, 0x1326],
    &[0x3304, 0x8257, 0x2145, 0x5202, 0x4213],
    &[0x6101, 0x8257, 0x2145, 0x4213],
    &[0x2315, 0x8257, 0x2145, 0x6101, 0x3304, 0x5202],
    &[0x2315, 0x8257, 0x2145],
    &[0x2145, 0x1246, 0x1326, 0x2315, 0x8337],
    &[0x2145, 0x1246, 0x3304, 0x2315, 0x6101, 0x1326, 0x8337, 0x5202],
    &[0x4213, 0x1326, 0x8337, 0x2145, 0x6101, 0x1246],
    &[0x5202, 0x8337, 0x4213, 0x1326, 0x1246, 0x3304, 0x2145],
    &[0x4123, 0x8337, 0x2315, 0x1246, 0x5202, 0x2145],
    &[0x2315, 0x4123, 0x8337, 0x6101, 0x3304, 0x2145, 0x1246],
    &[0x5202, 0x2145, 0x1246, 0x6101, 0x4213, 0x4123, 0x8337],
    &[0x4213, 0x4123, 0x8337, 0x3304, 0x2145, 0x1246],
    &[0x2145, 0x1246, 0x1326, 0x2315, 0x4123, 0x4213],
    &[0x2315, 0x6101, 0x4213, 0x3304, 0x2145, 0x1246, 0x4123, 0x5202, 0x1326],
    &[0x1326, 0x2145, 0x1246, 0x4123, 0x6101],
    &[0x3304, 0x2145, 0x1246, 0x5202, 0x1326, 0x4123],
    &[0x2145, 0x4213, 0x2315, 0x1246, 0x5202],
    &[0x6101, 0x4213, 0x2315, 0x3304, 0x2145, 0x1246],
    &[0x2145, 0x5202, 0x6101, 0x1246],
    &[0x2145, 0x1246, 0x3304],
    &[0x2315, 0x3304, 0x8337, 0x1326],
    &[0x5202, 0x2315, 0x6101, 0x1326, 0x8337],
    &[0x6101, 0x8337, 0x4213, 0x3304, 0x1326],
    &[0x5202, 0x8337, 0x4213, 0x1326],
    &[0x4123, 0x3304, 0x5202, 0x8337, 0x2315],
    &[0x2315, 0x4123, 0x8337, 0x6101],
    &[0x6101, 0x3304, 0x5202, 0x4213, 0x4123, 0x8337],
    &[0x4213, 0x4123, 0x8337],
    &[0x4213, 0x1326, 0x4123, 0x2315, 0x3304],
    &[0x4213, 0x2315, 0x6101, 0x4123, 0x5202, 0x1326],
    &[0x6101, 0x1326, 0x4123, 0x3304],
    &[0x5202, 0x1326, 0x4123],
    &[0x4213, 0x3304, 0x5202, 0x2315],
    &[0x6101, 0x4213, 0x2315],
    &[0x6101, 0x3304, 0x5202],
    &[],
];
