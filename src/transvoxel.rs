//! Transvoxel-style block triangulation with directional vertex lookback.
//!
//! Cells are swept z-major, y, then x. Each vertex descriptor in the cell
//! tables carries the direction of the cell that owns the vertex; when that
//! cell was already processed, its vertex is reused instead of duplicated.
//! Only edges ending at a cell's corner 7 are registered for reuse; vertices
//! on other edges of cells along the low block faces are duplicated, exactly
//! as when a block's neighbor is missing.

use crate::{
    mesh::{MeshVertexId, NULL_MESH_VERTEX_ID},
    transvoxel_tables::{REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA},
    Error,
};
use glam::Vec3A;
use log::debug;
use std::collections::HashMap;

/// Per-cell vertex bookkeeping.
///
/// `corner_verts` maps the reuse slots (x/y/z edges ending at the cell's
/// corner 7) to block vertex indices. `vertex_ids` lists every vertex the
/// cell referenced in descriptor order; the class triangle templates index
/// into it.
#[derive(Debug)]
struct Cell {
    corner_verts: [MeshVertexId; 4],
    vertex_ids: Vec<MeshVertexId>,
}

impl Cell {
    fn new() -> Self {
        Self {
            corner_verts: [NULL_MESH_VERTEX_ID; 4],
            vertex_ids: Vec::with_capacity(12),
        }
    }
}

/// Triangulates one block of voxel samples.
///
/// The resolution counts samples per axis; a block of resolution `n` has
/// `n - 1` cells per axis. Output is positions plus a flat triangle index
/// list; normals are left to the consumer.
pub struct TransvoxelBlock {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    voxel_values: Vec<f32>,
    positions: Vec<Vec3A>,
    triangles: Vec<MeshVertexId>,
    cells: HashMap<usize, Cell>,
}

impl TransvoxelBlock {
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            voxel_values: vec![0.0; size_x * size_y * size_z],
            positions: Vec::new(),
            triangles: Vec::new(),
            cells: HashMap::new(),
        }
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    pub fn size_z(&self) -> usize {
        self.size_z
    }

    pub fn positions(&self) -> &[Vec3A] {
        &self.positions
    }

    /// Flat triangle list, three vertex indices per triangle.
    pub fn triangles(&self) -> &[MeshVertexId] {
        &self.triangles
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size_x + z * self.size_x * self.size_y
    }

    pub fn voxel_value(&self, x: usize, y: usize, z: usize) -> f32 {
        self.voxel_values[self.offset(x, y, z)]
    }

    pub fn set_voxel_value(&mut self, x: usize, y: usize, z: usize, value: f32) {
        let offset = self.offset(x, y, z);
        self.voxel_values[offset] = value;
    }

    /// Replaces the whole sample buffer; the length must match the block
    /// resolution.
    pub fn set_voxel_values(&mut self, values: Vec<f32>) -> Result<(), Error> {
        let expected = self.size_x * self.size_y * self.size_z;
        if values.len() != expected {
            return Err(Error::ResolutionMismatch {
                expected,
                got: values.len(),
            });
        }
        self.voxel_values = values;
        Ok(())
    }

    /// Fills the sample buffer from a field function of the lattice
    /// coordinate.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize, usize) -> f32) {
        let mut n = 0;
        for z in 0..self.size_z {
            for y in 0..self.size_y {
                for x in 0..self.size_x {
                    self.voxel_values[n] = f(x, y, z);
                    n += 1;
                }
            }
        }
    }

    /// Triangulates the block at `isovalue`, replacing any previous output.
    pub fn generate(&mut self, isovalue: f32) {
        self.positions.clear();
        self.triangles.clear();
        self.cells.clear();
        if self.size_x < 2 || self.size_y < 2 || self.size_z < 2 {
            return;
        }

        for z in 0..self.size_z - 1 {
            for y in 0..self.size_y - 1 {
                for x in 0..self.size_x - 1 {
                    let corners = self.cell_corners(x, y, z, isovalue);
                    let case_code = case_code(&corners);
                    if case_code == 0 || case_code == 0xFF {
                        continue;
                    }
                    self.process_edges(case_code, &corners, x, y, z);
                }
            }
        }
    }

    /// Corner samples in binary corner order, isovalue already subtracted.
    fn cell_corners(&self, x: usize, y: usize, z: usize, isovalue: f32) -> [f32; 8] {
        let mut corners = [0.0; 8];
        for (c, corner) in corners.iter_mut().enumerate() {
            *corner = self.voxel_value(x + (c & 1), y + ((c >> 1) & 1), z + ((c >> 2) & 1))
                - isovalue;
        }
        corners
    }

    fn process_edges(&mut self, case_code: u8, corners: &[f32; 8], x: usize, y: usize, z: usize) {
        let cell_index = self.offset(x, y, z);
        self.cells.insert(cell_index, Cell::new());

        let class = REGULAR_CELL_CLASS[case_code as usize] as usize;
        let cell_data = &REGULAR_CELL_DATA[class];
        let edge_codes = REGULAR_VERTEX_DATA[case_code as usize];

        // Which lookback directions stay inside the block.
        let valid_directions =
            (x > 0) as u8 | (((y > 0) as u8) << 1) | (((z > 0) as u8) << 2);

        for &edge in edge_codes {
            let v0 = ((edge >> 4) & 0x0F) as u8;
            let v1 = (edge & 0x0F) as u8;
            let d0 = corners[v0 as usize];
            let d1 = corners[v1 as usize];

            // 257-step fixed-point interpolation parameter, measured from v1.
            let t = ((d1 * 256.0) / (d1 - d0)).round() as i32;

            let direction_code = ((edge >> 12) & 0x0F) as u8;
            let slot = ((edge >> 8) & 0x0F) as u8;

            if t & 0xFF != 0 {
                // Vertex in the edge interior.
                let delta = (256 - t) as f32 / 256.0;
                let axis = v0 ^ v1;
                let point = self.corner_position(v0, x, y, z)
                    + delta
                        * Vec3A::new(
                            (axis & 1) as f32,
                            ((axis >> 1) & 1) as f32,
                            ((axis >> 2) & 1) as f32,
                        );
                if direction_code & valid_directions == direction_code {
                    self.reuse_or_create(x, y, z, direction_code, slot, point, cell_index);
                } else if v1 == 7 {
                    self.add_owned_vertex(cell_index, slot, point);
                } else {
                    self.add_extra_vertex(cell_index, point);
                }
            } else if t == 0 {
                // Vertex at the higher-numbered corner.
                let point = self.corner_position(v1, x, y, z);
                if v1 == 7 {
                    self.add_owned_vertex(cell_index, slot, point);
                } else {
                    let direction = v1 ^ 7;
                    if direction & valid_directions == direction {
                        self.reuse_or_create(x, y, z, direction, slot, point, cell_index);
                    } else {
                        self.add_extra_vertex(cell_index, point);
                    }
                }
            } else {
                // t == 256: vertex at the lower-numbered corner. Always a
                // lookback candidate since v0 < 7.
                let point = self.corner_position(v0, x, y, z);
                let direction = v0 ^ 7;
                if direction & valid_directions == direction {
                    self.reuse_or_create(x, y, z, direction, slot, point, cell_index);
                } else {
                    self.add_extra_vertex(cell_index, point);
                }
            }
        }

        let cell = &self.cells[&cell_index];
        for &vi in cell_data.triangles {
            self.triangles.push(cell.vertex_ids[vi as usize]);
        }
    }

    fn corner_position(&self, corner: u8, x: usize, y: usize, z: usize) -> Vec3A {
        Vec3A::new(
            (x + (corner & 1) as usize) as f32,
            (y + ((corner >> 1) & 1) as usize) as f32,
            (z + ((corner >> 2) & 1) as usize) as f32,
        )
    }

    /// Fetches the vertex from the cell `direction` away, creating it there
    /// when that cell skipped the edge, and references it from the current
    /// cell.
    fn reuse_or_create(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        direction: u8,
        slot: u8,
        point: Vec3A,
        current_cell: usize,
    ) {
        let px = x - (direction & 1) as usize;
        let py = y - ((direction >> 1) & 1) as usize;
        let pz = z - ((direction >> 2) & 1) as usize;
        let owner_index = self.offset(px, py, pz);

        let next_id = self.positions.len() as MeshVertexId;
        let owner = self.cells.entry(owner_index).or_insert_with(Cell::new);
        let existing = owner.corner_verts[slot as usize];
        let id = if existing != NULL_MESH_VERTEX_ID {
            existing
        } else {
            owner.corner_verts[slot as usize] = next_id;
            owner.vertex_ids.push(next_id);
            self.positions.push(point);
            debug!("created vertex in preceding cell ({px}, {py}, {pz}) slot {slot}");
            next_id
        };

        // The current cell is inserted at the top of process_edges.
        self.cells
            .get_mut(&current_cell)
            .unwrap()
            .vertex_ids
            .push(id);
    }

    fn add_owned_vertex(&mut self, cell_index: usize, slot: u8, point: Vec3A) {
        let id = self.positions.len() as MeshVertexId;
        self.positions.push(point);
        let cell = self.cells.get_mut(&cell_index).unwrap();
        cell.corner_verts[slot as usize] = id;
        cell.vertex_ids.push(id);
    }

    fn add_extra_vertex(&mut self, cell_index: usize, point: Vec3A) {
        let id = self.positions.len() as MeshVertexId;
        self.positions.push(point);
        self.cells
            .get_mut(&cell_index)
            .unwrap()
            .vertex_ids
            .push(id);
    }
}

/// One bit per corner, set when the corner sample is negative. Exact zeros
/// count as positive.
fn case_code(corners: &[f32; 8]) -> u8 {
    let mut code = 0;
    for (c, &v) in corners.iter().enumerate() {
        if v < 0.0 {
            code |= 1 << c;
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn uniform_sign_block_is_empty() {
        for fill in [-1.0, 1.0] {
            let mut block = TransvoxelBlock::new(3, 3, 3);
            block.fill_with(|_, _, _| fill);
            block.generate(0.0);
            assert!(block.positions().is_empty());
            assert!(block.triangles().is_empty());
        }
    }

    #[test]
    fn single_negative_corner_emits_one_triangle() {
        let mut block = TransvoxelBlock::new(3, 3, 3);
        block.fill_with(|_, _, _| 1.0);
        block.set_voxel_value(0, 0, 0, -1.0);
        block.generate(0.0);

        assert_eq!(block.positions().len(), 3);
        assert_eq!(block.triangles().len(), 3);
        for &v in block.triangles() {
            assert!((v as usize) < 3);
        }
        // Midpoints of the three edges leaving the corner.
        let mut points: Vec<_> = block
            .positions()
            .iter()
            .map(|p| (p.x, p.y, p.z))
            .collect();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            points,
            vec![(0.0, 0.0, 0.5), (0.0, 0.5, 0.0), (0.5, 0.0, 0.0)]
        );
    }

    #[test]
    fn planar_cut_block() {
        // Surface at x = 0.5; only the first column of cells crosses it.
        let mut block = TransvoxelBlock::new(3, 2, 2);
        block.fill_with(|x, _, _| x as f32 - 0.5);
        block.generate(0.0);

        assert_eq!(block.positions().len(), 4);
        assert_eq!(block.triangles().len(), 6);
        for p in block.positions() {
            assert_eq!(p.x, 0.5);
        }
    }

    #[test]
    fn adjacent_cells_share_the_corner7_vertex() {
        // Surface at y = 0.5 crossing two cells along x. Each cell has four
        // crossing y-edges; the edge ending at the first cell's corner 7 is
        // registered for reuse and the second cell looks it back up, so the
        // eight edge incidences produce seven vertices.
        let mut block = TransvoxelBlock::new(3, 3, 2);
        block.fill_with(|_, y, _| y as f32 - 0.5);
        block.generate(0.0);

        assert_eq!(block.positions().len(), 7);
        assert_eq!(block.triangles().len(), 12);
        for p in block.positions() {
            assert_eq!(p.y, 0.5);
        }
    }

    #[test]
    fn sphere_block_reuses_vertices() {
        let n = 8usize;
        let mut block = TransvoxelBlock::new(n, n, n);
        let center = (n as f32 - 1.0) / 2.0;
        block.fill_with(|x, y, z| {
            fields::sphere(
                2.5,
                Vec3A::new(x as f32 - center, y as f32 - center, z as f32 - center),
            )
        });
        block.generate(0.0);

        assert!(!block.triangles().is_empty());
        assert_eq!(block.triangles().len() % 3, 0);
        for &v in block.triangles() {
            assert!((v as usize) < block.positions().len());
        }

        // Every nontrivial cell lists one descriptor per vertex it touches;
        // lookback must make the vertex count strictly smaller than the
        // total number of incidences.
        let mut incidences = 0;
        for z in 0..n - 1 {
            for y in 0..n - 1 {
                for x in 0..n - 1 {
                    let corners = block.cell_corners(x, y, z, 0.0);
                    let code = case_code(&corners);
                    if code != 0 && code != 0xFF {
                        incidences += REGULAR_VERTEX_DATA[code as usize].len();
                    }
                }
            }
        }
        assert!(block.positions().len() < incidences);
    }

    #[test]
    fn regenerate_is_idempotent() {
        let mut block = TransvoxelBlock::new(3, 3, 3);
        block.fill_with(|_, _, _| 1.0);
        block.set_voxel_value(0, 0, 0, -1.0);

        block.generate(0.0);
        let positions = block.positions().to_vec();
        let triangles = block.triangles().to_vec();

        block.generate(0.0);
        assert_eq!(block.positions(), positions.as_slice());
        assert_eq!(block.triangles(), triangles.as_slice());
    }

    #[test]
    fn sample_buffer_length_is_checked() {
        let mut block = TransvoxelBlock::new(2, 2, 2);
        assert_eq!(
            block.set_voxel_values(vec![0.0; 9]),
            Err(Error::ResolutionMismatch {
                expected: 8,
                got: 9
            })
        );
        assert!(block.set_voxel_values(vec![1.0; 8]).is_ok());
        assert_eq!(block.voxel_value(1, 1, 1), 1.0);
    }
}
