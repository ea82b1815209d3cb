//! Topologically-controlled Marching Cubes over a dense scalar grid.
//!
//! The extractor runs in two passes: the first interpolates one mesh vertex
//! on every grid edge with a sign change and records its id in per-axis edge
//! caches, the second sweeps the cubes and tiles each one from the case
//! tables, resolving tiling edge symbols through the caches so neighboring
//! cubes share vertices exactly.

use crate::{
    mesh::{MeshBuffers, MeshVertexId, NULL_MESH_VERTEX_ID},
    tables::*,
    Error, ScalarGrid,
};
use glam::Vec3A;
use log::{trace, warn};

const INITIAL_BUFFER_CAPACITY: usize = 1 << 16;

/// Non-fatal inconsistency found while tiling.
///
/// These indicate a disagreement between the case tables and the edge caches
/// and should not occur on well-formed input; the run continues and reports
/// them afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// A tiling referenced an edge with no cached intersection vertex.
    MissingEdgeVertex { cube: [usize; 3], edge: i8 },
    /// The six face tests produced a bit pattern outside the case 13
    /// sub-case map.
    ImpossibleCase13Subconfig { cube: [usize; 3] },
}

/// Marching Cubes 33 extractor.
///
/// Samples may be owned by the extractor (write them with
/// [`set_value`](Self::set_value) after [`init_all`](Self::init_all)) or
/// borrowed from the caller via
/// [`set_external_data`](Self::set_external_data).
pub struct MarchingCubes<'a> {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    use_classic_tables: bool,

    external_samples: Option<&'a [f32]>,
    grid: Option<ScalarGrid<'a>>,

    // One slot per grid vertex, holding the mesh vertex on the edge leaving
    // that vertex in +x / +y / +z, or NULL.
    x_verts: Vec<MeshVertexId>,
    y_verts: Vec<MeshVertexId>,
    z_verts: Vec<MeshVertexId>,

    mesh: MeshBuffers,
    anomalies: Vec<Anomaly>,

    // State of the cube being tiled.
    cube: [f32; 8],
    i: usize,
    j: usize,
    k: usize,
    case: u8,
    config: u8,
    subconfig: u8,
    tunnel_orientation: i8,
}

impl<'a> MarchingCubes<'a> {
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            use_classic_tables: false,
            external_samples: None,
            grid: None,
            x_verts: Vec::new(),
            y_verts: Vec::new(),
            z_verts: Vec::new(),
            mesh: MeshBuffers::default(),
            anomalies: Vec::new(),
            cube: [0.0; 8],
            i: 0,
            j: 0,
            k: 0,
            case: 0,
            config: 0,
            subconfig: 0,
            tunnel_orientation: 0,
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

    pub fn num_vertices(&self) -> usize {
        self.mesh.num_vertices()
    }

    pub fn num_triangles(&self) -> usize {
        self.mesh.num_triangles()
    }

    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    pub fn positions(&self) -> &[Vec3A] {
        &self.mesh.positions
    }

    pub fn normals(&self) -> &[Vec3A] {
        &self.mesh.normals
    }

    pub fn triangles(&self) -> &[[MeshVertexId; 3]] {
        &self.mesh.triangles
    }

    /// Inconsistencies recorded by the last [`run`](Self::run).
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Changes the grid resolution. Takes effect at the next
    /// [`init_all`](Self::init_all).
    pub fn set_resolution(&mut self, size_x: usize, size_y: usize, size_z: usize) {
        self.size_x = size_x;
        self.size_y = size_y;
        self.size_z = size_z;
    }

    /// Selects the classic Marching Cubes table instead of the
    /// topologically-controlled one. The classic table can produce cracks on
    /// ambiguous faces.
    pub fn set_method(&mut self, classic: bool) {
        self.use_classic_tables = classic;
    }

    /// Borrows samples from the caller, laid out x fastest with length
    /// `size_x * size_y * size_z` (checked at [`init_temps`](Self::init_temps)).
    pub fn set_external_data(&mut self, data: &'a [f32]) {
        self.external_samples = Some(data);
        self.grid = None;
    }

    /// Switches back to extractor-owned sample storage.
    pub fn set_internal_data(&mut self) {
        self.external_samples = None;
        self.grid = None;
    }

    /// Reads one sample.
    pub fn value(&self, x: usize, y: usize, z: usize) -> Result<f32, Error> {
        let grid = self.grid.as_ref().ok_or(Error::Uninitialized)?;
        Ok(grid.value(x, y, z))
    }

    /// Writes one sample. Fails on external data.
    pub fn set_value(&mut self, x: usize, y: usize, z: usize, value: f32) -> Result<(), Error> {
        let grid = self.grid.as_mut().ok_or(Error::Uninitialized)?;
        grid.set_value(x, y, z, value)
    }

    /// Allocates the grid (unless external) and the edge caches for the
    /// current resolution.
    pub fn init_temps(&mut self) -> Result<(), Error> {
        let (sx, sy, sz) = (self.size_x, self.size_y, self.size_z);
        self.grid = Some(match self.external_samples {
            Some(data) => ScalarGrid::borrowed(sx, sy, sz, data)?,
            None => ScalarGrid::owned(sx, sy, sz),
        });
        let n = sx * sy * sz;
        self.x_verts = vec![NULL_MESH_VERTEX_ID; n];
        self.y_verts = vec![NULL_MESH_VERTEX_ID; n];
        self.z_verts = vec![NULL_MESH_VERTEX_ID; n];
        Ok(())
    }

    /// [`init_temps`](Self::init_temps) plus fresh mesh buffers.
    pub fn init_all(&mut self) -> Result<(), Error> {
        self.init_temps()?;
        self.mesh.clear();
        self.mesh
            .reserve(INITIAL_BUFFER_CAPACITY, INITIAL_BUFFER_CAPACITY);
        self.anomalies.clear();
        Ok(())
    }

    /// Releases the grid (owned only) and the edge caches.
    pub fn clean_temps(&mut self) {
        self.grid = None;
        self.x_verts = Vec::new();
        self.y_verts = Vec::new();
        self.z_verts = Vec::new();
    }

    /// [`clean_temps`](Self::clean_temps) plus the mesh buffers; the
    /// resolution is reset to zero.
    pub fn clean_all(&mut self) {
        self.clean_temps();
        self.mesh = MeshBuffers::default();
        self.anomalies.clear();
        self.size_x = 0;
        self.size_y = 0;
        self.size_z = 0;
    }

    /// Extracts the isosurface at `isovalue`.
    ///
    /// `isovalue` is subtracted from every sample read, exactly once; callers
    /// whose data is already expressed as `density - isovalue` pass `0.0`.
    /// Requires a prior [`init_all`](Self::init_all).
    pub fn run(&mut self, isovalue: f32) -> Result<(), Error> {
        let n = self.size_x * self.size_y * self.size_z;
        if n == 0 || self.grid.is_none() || self.x_verts.len() != n {
            return Err(Error::Uninitialized);
        }

        self.compute_intersection_points(isovalue);

        for k in 0..self.size_z - 1 {
            for j in 0..self.size_y - 1 {
                for i in 0..self.size_x - 1 {
                    self.i = i;
                    self.j = j;
                    self.k = k;
                    let mut lut_entry = 0u8;
                    for p in 0..8usize {
                        let v = nudged(
                            self.data(
                                i + ((p ^ (p >> 1)) & 1),
                                j + ((p >> 1) & 1),
                                k + ((p >> 2) & 1),
                            ) - isovalue,
                        );
                        self.cube[p] = v;
                        if v > 0.0 {
                            lut_entry |= 1u8 << p;
                        }
                    }
                    self.process_cube(lut_entry);
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn data(&self, x: usize, y: usize, z: usize) -> f32 {
        // run() checks that the grid is present before any call lands here.
        self.grid.as_ref().unwrap().value(x, y, z)
    }

    #[inline]
    fn vert_offset(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size_x + z * self.size_x * self.size_y
    }

    #[inline]
    fn x_vert(&self, x: usize, y: usize, z: usize) -> MeshVertexId {
        self.x_verts[self.vert_offset(x, y, z)]
    }

    #[inline]
    fn y_vert(&self, x: usize, y: usize, z: usize) -> MeshVertexId {
        self.y_verts[self.vert_offset(x, y, z)]
    }

    #[inline]
    fn z_vert(&self, x: usize, y: usize, z: usize) -> MeshVertexId {
        self.z_verts[self.vert_offset(x, y, z)]
    }

    /// First pass: walk every grid vertex and drop an interpolated mesh
    /// vertex on each of its forward edges that crosses the surface.
    fn compute_intersection_points(&mut self, isovalue: f32) {
        for k in 0..self.size_z {
            for j in 0..self.size_y {
                for i in 0..self.size_x {
                    self.i = i;
                    self.j = j;
                    self.k = k;

                    let c0 = nudged(self.data(i, j, k) - isovalue);
                    let c1 = if i < self.size_x - 1 {
                        nudged(self.data(i + 1, j, k) - isovalue)
                    } else {
                        c0
                    };
                    let c3 = if j < self.size_y - 1 {
                        nudged(self.data(i, j + 1, k) - isovalue)
                    } else {
                        c0
                    };
                    let c4 = if k < self.size_z - 1 {
                        nudged(self.data(i, j, k + 1) - isovalue)
                    } else {
                        c0
                    };
                    self.cube[0] = c0;
                    self.cube[1] = c1;
                    self.cube[3] = c3;
                    self.cube[4] = c4;

                    let offset = self.vert_offset(i, j, k);
                    if (c0 < 0.0) != (c1 < 0.0) {
                        let id = self.add_edge_vertex(1, [1, 0, 0]);
                        self.x_verts[offset] = id;
                    }
                    if (c0 < 0.0) != (c3 < 0.0) {
                        let id = self.add_edge_vertex(3, [0, 1, 0]);
                        self.y_verts[offset] = id;
                    }
                    if (c0 < 0.0) != (c4 < 0.0) {
                        let id = self.add_edge_vertex(4, [0, 0, 1]);
                        self.z_verts[offset] = id;
                    }
                }
            }
        }
    }

    /// Interpolates a vertex between cube corner 0 and `opposite`, with a
    /// normal lerped from the central-difference gradients at both ends.
    fn add_edge_vertex(&mut self, opposite: usize, axis: [usize; 3]) -> MeshVertexId {
        let u = self.cube[0] / (self.cube[0] - self.cube[opposite]);
        let (i, j, k) = (self.i, self.j, self.k);
        let position = Vec3A::new(
            i as f32 + u * axis[0] as f32,
            j as f32 + u * axis[1] as f32,
            k as f32 + u * axis[2] as f32,
        );
        let g0 = self.gradient(i, j, k);
        let g1 = self.gradient(i + axis[0], j + axis[1], k + axis[2]);
        let normal = ((1.0 - u) * g0 + u * g1).normalize_or_zero();
        self.mesh.push_vertex(position, normal)
    }

    /// Central-difference gradient, one-sided at the grid borders.
    fn gradient(&self, x: usize, y: usize, z: usize) -> Vec3A {
        let dx = if x > 0 {
            if x < self.size_x - 1 {
                (self.data(x + 1, y, z) - self.data(x - 1, y, z)) / 2.0
            } else {
                self.data(x, y, z) - self.data(x - 1, y, z)
            }
        } else {
            self.data(x + 1, y, z) - self.data(x, y, z)
        };
        let dy = if y > 0 {
            if y < self.size_y - 1 {
                (self.data(x, y + 1, z) - self.data(x, y - 1, z)) / 2.0
            } else {
                self.data(x, y, z) - self.data(x, y - 1, z)
            }
        } else {
            self.data(x, y + 1, z) - self.data(x, y, z)
        };
        let dz = if z > 0 {
            if z < self.size_z - 1 {
                (self.data(x, y, z + 1) - self.data(x, y, z - 1)) / 2.0
            } else {
                self.data(x, y, z) - self.data(x, y, z - 1)
            }
        } else {
            self.data(x, y, z + 1) - self.data(x, y, z)
        };
        Vec3A::new(dx, dy, dz)
    }

    /// Tiles the current cube.
    fn process_cube(&mut self, lut_entry: u8) {
        if self.use_classic_tables {
            let row = &CASES_CLASSIC[lut_entry as usize];
            let n = row.iter().position(|&e| e == -1).unwrap_or(row.len());
            self.add_triangles(&row[..n], NULL_MESH_VERTEX_ID);
            return;
        }

        let [case, config] = CASES[lut_entry as usize];
        self.case = case as u8;
        self.config = config.max(0) as u8;
        self.subconfig = 0;
        let c = self.config as usize;

        match self.case {
            0 => {}

            1 => self.add_triangles(&TILING1[c], NULL_MESH_VERTEX_ID),

            2 => self.add_triangles(&TILING2[c], NULL_MESH_VERTEX_ID),

            3 => {
                if self.test_face(TEST3[c]) {
                    self.add_triangles(&TILING3_2[c], NULL_MESH_VERTEX_ID); // 3.2
                } else {
                    self.add_triangles(&TILING3_1[c], NULL_MESH_VERTEX_ID); // 3.1
                }
            }

            4 => {
                if self.modified_test_interior(TEST4[c]) {
                    self.add_triangles(&TILING4_1[c], NULL_MESH_VERTEX_ID); // 4.1.1
                } else {
                    self.add_triangles(&TILING4_2[c], NULL_MESH_VERTEX_ID); // 4.1.2
                }
            }

            5 => self.add_triangles(&TILING5[c], NULL_MESH_VERTEX_ID),

            6 => {
                if self.test_face(TEST6[c][0]) {
                    self.add_triangles(&TILING6_2[c], NULL_MESH_VERTEX_ID); // 6.2
                } else if self.modified_test_interior(TEST6[c][1]) {
                    self.add_triangles(&TILING6_1_1[c], NULL_MESH_VERTEX_ID); // 6.1.1
                } else {
                    let v12 = self.add_c_vertex();
                    self.add_triangles(&TILING6_1_2[c], v12); // 6.1.2
                }
            }

            7 => {
                if self.test_face(TEST7[c][0]) {
                    self.subconfig += 1;
                }
                if self.test_face(TEST7[c][1]) {
                    self.subconfig += 2;
                }
                if self.test_face(TEST7[c][2]) {
                    self.subconfig += 4;
                }
                match self.subconfig {
                    0 => self.add_triangles(&TILING7_1[c], NULL_MESH_VERTEX_ID),
                    1 => self.add_triangles(&TILING7_2[c][0], NULL_MESH_VERTEX_ID),
                    2 => self.add_triangles(&TILING7_2[c][1], NULL_MESH_VERTEX_ID),
                    3 => {
                        let v12 = self.add_c_vertex();
                        self.add_triangles(&TILING7_3[c][0], v12);
                    }
                    4 => self.add_triangles(&TILING7_2[c][2], NULL_MESH_VERTEX_ID),
                    5 => {
                        let v12 = self.add_c_vertex();
                        self.add_triangles(&TILING7_3[c][1], v12);
                    }
                    6 => {
                        let v12 = self.add_c_vertex();
                        self.add_triangles(&TILING7_3[c][2], v12);
                    }
                    _ => {
                        if self.modified_test_interior(TEST7[c][3]) {
                            self.add_triangles(&TILING7_4_1[c], NULL_MESH_VERTEX_ID);
                        } else {
                            self.add_triangles(&TILING7_4_2[c], NULL_MESH_VERTEX_ID);
                        }
                    }
                }
            }

            8 => self.add_triangles(&TILING8[c], NULL_MESH_VERTEX_ID),

            9 => self.add_triangles(&TILING9[c], NULL_MESH_VERTEX_ID),

            10 => {
                if self.test_face(TEST10[c][0]) {
                    if self.test_face(TEST10[c][1]) {
                        if self.modified_test_interior(-TEST10[c][2]) {
                            self.add_triangles(&TILING10_1_1_INV[c], NULL_MESH_VERTEX_ID); // 10.1.1
                        } else {
                            self.add_triangles(&TILING10_1_2[5 - c], NULL_MESH_VERTEX_ID); // 10.1.2
                        }
                    } else {
                        let v12 = self.add_c_vertex();
                        self.add_triangles(&TILING10_2[c], v12); // 10.2
                    }
                } else if self.test_face(TEST10[c][1]) {
                    let v12 = self.add_c_vertex();
                    self.add_triangles(&TILING10_2_INV[c], v12); // 10.2
                } else if self.modified_test_interior(TEST10[c][2]) {
                    self.add_triangles(&TILING10_1_1[c], NULL_MESH_VERTEX_ID); // 10.1.1
                } else {
                    self.add_triangles(&TILING10_1_2[c], NULL_MESH_VERTEX_ID); // 10.1.2
                }
            }

            11 => self.add_triangles(&TILING11[c], NULL_MESH_VERTEX_ID),

            12 => {
                if self.test_face(TEST12[c][0]) {
                    if self.test_face(TEST12[c][1]) {
                        if self.modified_test_interior(-TEST12[c][2]) {
                            self.add_triangles(&TILING12_1_1_INV[c], NULL_MESH_VERTEX_ID); // 12.1.1
                        } else {
                            self.add_triangles(&TILING12_1_2[23 - c], NULL_MESH_VERTEX_ID); // 12.1.2
                        }
                    } else {
                        let v12 = self.add_c_vertex();
                        self.add_triangles(&TILING12_2[c], v12); // 12.2
                    }
                } else if self.test_face(TEST12[c][1]) {
                    let v12 = self.add_c_vertex();
                    self.add_triangles(&TILING12_2_INV[c], v12); // 12.2
                } else if self.modified_test_interior(TEST12[c][2]) {
                    self.add_triangles(&TILING12_1_1[c], NULL_MESH_VERTEX_ID); // 12.1.1
                } else {
                    self.add_triangles(&TILING12_1_2[c], NULL_MESH_VERTEX_ID); // 12.1.2
                }
            }

            13 => self.process_case13(c),

            14 => self.add_triangles(&TILING14[c], NULL_MESH_VERTEX_ID),

            _ => {}
        }
    }

    /// Case 13: six face tests select one of 46 sub-cases through the
    /// sub-configuration map.
    fn process_case13(&mut self, c: usize) {
        for (bit, &face) in TEST13[c].iter().take(6).enumerate() {
            if self.test_face(face) {
                self.subconfig += 1u8 << bit;
            }
        }

        match SUBCONFIG13[self.subconfig as usize] {
            0 => self.add_triangles(&TILING13_1[c], NULL_MESH_VERTEX_ID), // 13.1
            s @ 1..=6 => {
                // 13.2
                self.add_triangles(&TILING13_2[c][(s - 1) as usize], NULL_MESH_VERTEX_ID);
            }
            s @ 7..=18 => {
                // 13.3
                let v12 = self.add_c_vertex();
                self.add_triangles(&TILING13_3[c][(s - 7) as usize], v12);
            }
            s @ 19..=22 => {
                // 13.4
                let v12 = self.add_c_vertex();
                self.add_triangles(&TILING13_4[c][(s - 19) as usize], v12);
            }
            s @ 23..=26 => self.tile_case13_tunnel(c, (s - 23) as usize), // 13.5
            s @ 27..=38 => {
                // 13.3, complementary
                let v12 = self.add_c_vertex();
                self.add_triangles(&TILING13_3_INV[c][(s - 27) as usize], v12);
            }
            s @ 39..=44 => {
                // 13.2, complementary
                self.add_triangles(&TILING13_2_INV[c][(s - 39) as usize], NULL_MESH_VERTEX_ID);
            }
            45 => self.add_triangles(&TILING13_1_INV[c], NULL_MESH_VERTEX_ID), // 13.1, complementary
            _ => {
                warn!(
                    "impossible case 13 sub-configuration at cube ({}, {}, {}): {:?}",
                    self.i, self.j, self.k, self.cube
                );
                self.anomalies.push(Anomaly::ImpossibleCase13Subconfig {
                    cube: [self.i, self.j, self.k],
                });
            }
        }
    }

    /// Case 13.5: either two separate sheets (13.5.1) or a tunnel (13.5.2)
    /// whose triangulation depends on the tunnel orientation.
    fn tile_case13_tunnel(&mut self, c: usize, m: usize) {
        // Else-branch pairings between the two symmetric tunnel tables.
        const ALT0: [usize; 4] = [2, 0, 3, 1];
        const ALT1: [usize; 4] = [2, 3, 0, 2];

        self.subconfig = m as u8;
        if self.interior_test_case13() {
            self.add_triangles(&TILING13_5_1[c][m], NULL_MESH_VERTEX_ID);
            return;
        }
        self.update_tunnel_orientation();
        let row = if self.tunnel_orientation == 1 {
            &TILING13_5_2[c][m]
        } else if c == 0 {
            &TILING13_5_2[1][ALT0[m]]
        } else {
            &TILING13_5_2[0][ALT1[m]]
        };
        self.add_triangles(row, NULL_MESH_VERTEX_ID);
    }

    /// Saddle test on one cube face. A positive code means the test keeps
    /// the face's components separated when it passes.
    fn test_face(&self, face: i8) -> bool {
        let [a, b, c, d] = match face.abs() {
            1 => [self.cube[0], self.cube[4], self.cube[5], self.cube[1]],
            2 => [self.cube[1], self.cube[5], self.cube[6], self.cube[2]],
            3 => [self.cube[2], self.cube[6], self.cube[7], self.cube[3]],
            4 => [self.cube[3], self.cube[7], self.cube[4], self.cube[0]],
            5 => [self.cube[0], self.cube[3], self.cube[2], self.cube[1]],
            6 => [self.cube[4], self.cube[7], self.cube[6], self.cube[5]],
            _ => {
                warn!(
                    "invalid face code {} at cube ({}, {}, {})",
                    face, self.i, self.j, self.k
                );
                [0.0; 4]
            }
        };

        if (a * c - b * d).abs() < f32::EPSILON {
            return face >= 0;
        }
        // face and A invert signs together.
        face as f32 * a * (a * c - b * d) >= 0.0
    }

    /// Interior test for the ambiguous cases, per-edge quadratic form.
    fn modified_test_interior(&self, s: i8) -> bool {
        let c = self.config as usize;
        match self.case {
            4 | 7 => {
                let s = if self.case == 7 { -s } else { s };
                let mut inter_amb = 0;
                for amb_face in [1, 2, 5] {
                    let edge = self.interior_ambiguity(amb_face, s);
                    inter_amb += self.interior_ambiguity_verification(edge);
                }
                inter_amb != 0
            }
            6 => {
                let amb_face = TEST6[c][0].abs();
                let edge = self.interior_ambiguity(amb_face, s);
                self.interior_ambiguity_verification(edge) != 0
            }
            10 => {
                let amb_face = TEST10[c][0].abs();
                let edge = self.interior_ambiguity(amb_face, s);
                self.interior_ambiguity_verification(edge) != 0
            }
            12 => {
                let mut inter_amb = 0;
                for amb_face in [TEST12[c][0].abs(), TEST12[c][1].abs()] {
                    let edge = self.interior_ambiguity(amb_face, s);
                    inter_amb += self.interior_ambiguity_verification(edge);
                }
                inter_amb != 0
            }
            _ => {
                warn!("interior test reached for unexpected case {}", self.case);
                false
            }
        }
    }

    /// Picks the cube edge whose quadratic decides the interior connection
    /// for the ambiguous face, or -1 when no diagonal of matching sign
    /// exists.
    fn interior_ambiguity(&self, amb_face: i8, s: i8) -> i8 {
        let s = s as f32;
        let pair = |p: usize, q: usize| self.cube[p] * s > 0.0 && self.cube[q] * s > 0.0;
        let mut edge = -1;
        match amb_face {
            1 | 3 => {
                if pair(1, 7) {
                    edge = 4;
                }
                if pair(0, 6) {
                    edge = 5;
                }
                if pair(3, 5) {
                    edge = 6;
                }
                if pair(2, 4) {
                    edge = 7;
                }
            }
            2 | 4 => {
                if pair(1, 7) {
                    edge = 0;
                }
                if pair(2, 4) {
                    edge = 1;
                }
                if pair(3, 5) {
                    edge = 2;
                }
                if pair(0, 6) {
                    edge = 3;
                }
            }
            0 | 5 | 6 => {
                if pair(0, 6) {
                    edge = 8;
                }
                if pair(1, 7) {
                    edge = 9;
                }
                if pair(2, 4) {
                    edge = 10;
                }
                if pair(3, 5) {
                    edge = 11;
                }
            }
            _ => {}
        }
        edge
    }

    /// Evaluates the bilinear quadratic pinned to `edge` at its critical
    /// parameter. Returns 1 when the two surface components stay separated
    /// along that edge, 0 when they join.
    fn interior_ambiguity_verification(&self, edge: i8) -> i32 {
        let row = match usize::try_from(edge)
            .ok()
            .and_then(|e| INTERIOR_EDGE_CORNERS.get(e))
        {
            Some(row) => row,
            None => return 0,
        };
        let [pa, pb, pc, pd] = *row;

        let delta = |pair: [usize; 2]| self.cube[pair[0]] - self.cube[pair[1]];
        let at = |pair: [usize; 2], t: f32| self.cube[pair[1]] + delta(pair) * t;

        let a = delta(pa) * delta(pc) - delta(pb) * delta(pd);
        let b = self.cube[pc[1]] * delta(pa) + self.cube[pa[1]] * delta(pc)
            - self.cube[pd[1]] * delta(pb)
            - self.cube[pb[1]] * delta(pd);
        if a > 0.0 {
            return 1;
        }
        let t = -b / (2.0 * a);
        if t < 0.0 || t > 1.0 {
            return 1;
        }

        let verify = at(pa, t) * at(pc, t) - at(pb, t) * at(pd, t);
        if verify < 0.0 {
            1
        } else {
            0
        }
    }

    /// Case 13.5 tunnel test. True when the interior is empty (two sheets),
    /// false when the components join through a tunnel.
    fn interior_test_case13(&self) -> bool {
        let q = &self.cube;
        let a = (q[0] - q[1]) * (q[7] - q[6]) - (q[4] - q[5]) * (q[3] - q[2]);
        let b = q[6] * (q[0] - q[1]) + q[1] * (q[7] - q[6])
            - q[2] * (q[4] - q[5])
            - q[5] * (q[3] - q[2]);
        let c = q[1] * q[6] - q[5] * q[2];

        let delta = f64::from(b) * f64::from(b) - 4.0 * f64::from(a) * f64::from(c);
        // NaN roots (delta < 0) fail the range checks below.
        let sqrt_delta = delta.sqrt() as f32;
        let t1 = (-b + sqrt_delta) / (2.0 * a);
        let t2 = (-b - sqrt_delta) / (2.0 * a);
        trace!("case 13 tunnel roots: t1 = {t1}, t2 = {t2}");

        if t1 < 1.0 && t1 > 0.0 && t2 < 1.0 && t2 > 0.0 {
            let section = |t: f32| {
                let at = q[1] + (q[0] - q[1]) * t;
                let bt = q[5] + (q[4] - q[5]) * t;
                let ct = q[6] + (q[7] - q[6]) * t;
                let dt = q[2] + (q[3] - q[2]) * t;
                let x = (at - dt) / (at + ct - bt - dt);
                let y = (at - bt) / (at + ct - bt - dt);
                (x, y)
            };
            let (x1, y1) = section(t1);
            let (x2, y2) = section(t2);
            let interior = |v: f32| v > 0.0 && v < 1.0;
            if interior(x1) && interior(x2) && interior(y1) && interior(y2) {
                return false;
            }
        }
        true
    }

    /// Locates the two critical points of the trilinear interpolant; when
    /// both are interior and the field has the same sign at both, that sign
    /// fixes the tunnel orientation.
    fn update_tunnel_orientation(&mut self) {
        let q = self.cube.map(f64::from);
        let a = -q[0] + q[1] + q[3] - q[2] + q[4] - q[5] - q[7] + q[6];
        let b = q[0] - q[1] - q[3] + q[2];
        let c = q[0] - q[1] - q[4] + q[5];
        let d = q[0] - q[3] - q[4] + q[7];
        let e = -q[0] + q[1];
        let f = -q[0] + q[3];
        let g = -q[0] + q[4];
        let h = q[0];

        let dx = b * c - a * e;
        let dy = b * d - a * f;
        let dz = c * d - a * g;
        if dx == 0.0 || dy == 0.0 || dz == 0.0 || dx * dy * dz < 0.0 {
            return;
        }
        let disc = (dx * dy * dz).sqrt();

        let interior = |v: f64| v > 0.0 && v < 1.0;
        let value_at = |x: f64, y: f64, z: f64| {
            a * x * y * z + b * x * y + c * x * z + d * y * z + e * x + f * y + g * z + h
        };

        let x1 = (-d * dx - disc) / (a * dx);
        let y1 = (-c * dy - disc) / (a * dy);
        let z1 = (-b * dz - disc) / (a * dz);
        let x2 = (-d * dx + disc) / (a * dx);
        let y2 = (-c * dy + disc) / (a * dy);
        let z2 = (-b * dz + disc) / (a * dz);
        if !(interior(x1) && interior(y1) && interior(z1))
            || !(interior(x2) && interior(y2) && interior(z2))
        {
            return;
        }

        let v1 = value_at(x1, y1, z1);
        let v2 = value_at(x2, y2, z2);
        if v1 * v2 > 0.0 {
            self.tunnel_orientation = if v1 > 0.0 { 1 } else { -1 };
        }
    }

    /// Emits triangles for the current cube. Edge symbols 0-11 resolve
    /// through the caches, 12 is the interior vertex `v12`.
    fn add_triangles(&mut self, edges: &[i8], v12: MeshVertexId) {
        debug_assert_eq!(edges.len() % 3, 0);
        let (i, j, k) = (self.i, self.j, self.k);
        let mut tri = [NULL_MESH_VERTEX_ID; 3];
        for (t, &edge) in edges.iter().enumerate() {
            let id = match edge {
                0 => self.x_vert(i, j, k),
                1 => self.y_vert(i + 1, j, k),
                2 => self.x_vert(i, j + 1, k),
                3 => self.y_vert(i, j, k),
                4 => self.x_vert(i, j, k + 1),
                5 => self.y_vert(i + 1, j, k + 1),
                6 => self.x_vert(i, j + 1, k + 1),
                7 => self.y_vert(i, j, k + 1),
                8 => self.z_vert(i, j, k),
                9 => self.z_vert(i + 1, j, k),
                10 => self.z_vert(i + 1, j + 1, k),
                11 => self.z_vert(i, j + 1, k),
                _ => v12,
            };
            if id == NULL_MESH_VERTEX_ID {
                warn!(
                    "invalid triangle {}: edge symbol {} unresolved at cube ({}, {}, {})",
                    self.mesh.num_triangles() + 1,
                    edge,
                    i,
                    j,
                    k
                );
                self.anomalies.push(Anomaly::MissingEdgeVertex {
                    cube: [i, j, k],
                    edge,
                });
            }
            tri[t % 3] = id;
            if t % 3 == 2 {
                self.mesh.triangles.push(tri);
            }
        }
    }

    /// Interior vertex: mean of the cached vertices on the cube's twelve
    /// edges, with the summed normal renormalized.
    fn add_c_vertex(&mut self) -> MeshVertexId {
        let (i, j, k) = (self.i, self.j, self.k);
        let candidates = [
            self.x_vert(i, j, k),
            self.y_vert(i + 1, j, k),
            self.x_vert(i, j + 1, k),
            self.y_vert(i, j, k),
            self.x_vert(i, j, k + 1),
            self.y_vert(i + 1, j, k + 1),
            self.x_vert(i, j + 1, k + 1),
            self.y_vert(i, j, k + 1),
            self.z_vert(i, j, k),
            self.z_vert(i + 1, j, k),
            self.z_vert(i + 1, j + 1, k),
            self.z_vert(i, j + 1, k),
        ];

        let mut position = Vec3A::ZERO;
        let mut normal = Vec3A::ZERO;
        let mut count = 0;
        for id in candidates {
            if id != NULL_MESH_VERTEX_ID {
                position += self.mesh.positions[id as usize];
                normal += self.mesh.normals[id as usize];
                count += 1;
            }
        }
        position /= count as f32;
        self.mesh.push_vertex(position, normal.normalize_or_zero())
    }
}

#[inline]
fn nudged(v: f32) -> f32 {
    if v.abs() < f32::EPSILON {
        f32::EPSILON
    } else {
        v
    }
}

/// Corner pairs backing the per-edge quadratics of the interior test. Each
/// `[p, q]` contributes the face value `cube[q] + (cube[p] - cube[q]) * t`.
const INTERIOR_EDGE_CORNERS: [[[usize; 2]; 4]; 12] = [
    [[0, 1], [4, 5], [7, 6], [3, 2]],
    [[3, 2], [0, 1], [4, 5], [7, 6]],
    [[2, 3], [6, 7], [5, 4], [1, 0]],
    [[1, 0], [2, 3], [6, 7], [5, 4]],
    [[2, 1], [3, 0], [7, 4], [6, 5]],
    [[3, 0], [2, 1], [6, 5], [7, 4]],
    [[0, 3], [4, 7], [5, 6], [1, 2]],
    [[1, 2], [0, 3], [4, 7], [5, 6]],
    [[4, 0], [7, 3], [6, 2], [5, 1]],
    [[5, 1], [4, 0], [7, 3], [6, 2]],
    [[6, 2], [5, 1], [4, 0], [7, 3]],
    [[7, 3], [6, 2], [5, 1], [4, 0]],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use crate::mesh::count_edge_uses;

    fn planar_data() -> Vec<f32> {
        // 2x2x2 grid, negative below z = 0.5, positive above.
        vec![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]
    }

    fn run_sphere(n: usize, classic: bool) -> MarchingCubes<'static> {
        let mut mc = MarchingCubes::new(n, n, n);
        mc.set_method(classic);
        mc.init_all().unwrap();
        let center = (n as f32 - 1.0) / 2.0;
        let radius = n as f32 / 3.0;
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    let p = glam::Vec3A::new(
                        x as f32 - center,
                        y as f32 - center,
                        z as f32 - center,
                    );
                    mc.set_value(x, y, z, fields::sphere(radius, p)).unwrap();
                }
            }
        }
        mc.run(0.0).unwrap();
        mc
    }

    #[test]
    fn run_before_init_fails() {
        let mut mc = MarchingCubes::new(4, 4, 4);
        assert_eq!(mc.run(0.0), Err(Error::Uninitialized));
    }

    #[test]
    fn external_data_length_is_checked() {
        let data = vec![0.0; 7];
        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);
        assert_eq!(
            mc.init_all(),
            Err(Error::ResolutionMismatch {
                expected: 8,
                got: 7
            })
        );
    }

    #[test]
    fn uniform_sign_produces_no_geometry() {
        for fill in [-1.0, 1.0] {
            let mut mc = MarchingCubes::new(4, 4, 4);
            mc.init_all().unwrap();
            for z in 0..4 {
                for y in 0..4 {
                    for x in 0..4 {
                        mc.set_value(x, y, z, fill).unwrap();
                    }
                }
            }
            mc.run(0.0).unwrap();
            assert_eq!(mc.num_vertices(), 0);
            assert_eq!(mc.num_triangles(), 0);
        }
    }

    #[test]
    fn planar_cut_emits_two_triangles() {
        let data = planar_data();
        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);
        mc.init_all().unwrap();
        mc.run(0.0).unwrap();

        assert_eq!(mc.num_vertices(), 4);
        assert_eq!(mc.num_triangles(), 2);
        assert!(mc.anomalies().is_empty());
        for p in mc.positions() {
            assert_eq!(p.z, 0.5);
        }
        for n in mc.normals() {
            assert!((*n - glam::Vec3A::Z).length() < 1e-6);
        }
        for tri in mc.triangles() {
            for &v in tri {
                assert!((v as usize) < mc.num_vertices());
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let data = planar_data();
        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);

        mc.init_all().unwrap();
        mc.run(0.0).unwrap();
        let first = mc.mesh().clone();

        mc.init_all().unwrap();
        mc.run(0.0).unwrap();

        assert_eq!(first.positions, mc.mesh().positions);
        assert_eq!(first.triangles, mc.mesh().triangles);
    }

    #[test]
    fn sign_flip_inverts_orientation() {
        let data = planar_data();
        let flipped: Vec<f32> = data.iter().map(|v| -v).collect();

        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);
        mc.init_all().unwrap();
        mc.run(0.0).unwrap();

        let mut mc_flipped = MarchingCubes::new(2, 2, 2);
        mc_flipped.set_external_data(&flipped);
        mc_flipped.init_all().unwrap();
        mc_flipped.run(0.0).unwrap();

        assert_eq!(mc.num_vertices(), mc_flipped.num_vertices());
        assert_eq!(mc.num_triangles(), mc_flipped.num_triangles());
        // Same crossing points, opposite normals.
        for (p, q) in mc.positions().iter().zip(mc_flipped.positions()) {
            assert!((*p - *q).length() < 1e-6);
        }
        for (n, m) in mc.normals().iter().zip(mc_flipped.normals()) {
            assert!((*n + *m).length() < 1e-6);
        }
    }

    #[test]
    fn vertices_are_shared_per_grid_edge() {
        let mc = run_sphere(12, false);
        assert!(mc.num_vertices() > 0);

        // Independently count grid edges with a sign change; the edge caches
        // must have produced exactly one vertex per such edge.
        let n = 12usize;
        let mut crossings = 0;
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    let v0 = nudged(mc.value(x, y, z).unwrap());
                    for (nx, ny, nz) in [(x + 1, y, z), (x, y + 1, z), (x, y, z + 1)] {
                        if nx < n && ny < n && nz < n {
                            let v1 = nudged(mc.value(nx, ny, nz).unwrap());
                            if (v0 < 0.0) != (v1 < 0.0) {
                                crossings += 1;
                            }
                        }
                    }
                }
            }
        }
        assert_eq!(mc.num_vertices(), crossings);
    }

    #[test]
    fn sphere_mesh_is_watertight() {
        let mc = run_sphere(16, false);
        assert!(mc.num_triangles() > 0);
        assert!(mc.anomalies().is_empty());
        for (_, count) in count_edge_uses(mc.triangles()) {
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn classic_tables_also_mesh_the_sphere() {
        let mc = run_sphere(16, true);
        assert!(mc.num_triangles() > 0);
        assert!(mc.anomalies().is_empty());
    }

    #[test]
    fn diagonal_corners_tunnel_beats_classic() {
        // Two strongly positive opposite corners joined through the cube
        // interior: the topologically-controlled tables emit the 6-triangle
        // tunnel, the classic table only 2 separate triangles.
        let mut data = vec![-1.0; 8];
        data[0] = 10.0; // (0, 0, 0)
        data[7] = 10.0; // (1, 1, 1)

        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);
        mc.init_all().unwrap();
        mc.run(0.0).unwrap();
        assert_eq!(mc.num_triangles(), 6);
        assert!(mc.anomalies().is_empty());

        let mut classic = MarchingCubes::new(2, 2, 2);
        classic.set_method(true);
        classic.set_external_data(&data);
        classic.init_all().unwrap();
        classic.run(0.0).unwrap();
        assert_eq!(classic.num_triangles(), 2);
    }

    #[test]
    fn clean_all_resets_the_engine() {
        let data = planar_data();
        let mut mc = MarchingCubes::new(2, 2, 2);
        mc.set_external_data(&data);
        mc.init_all().unwrap();
        mc.run(0.0).unwrap();
        assert!(mc.num_vertices() > 0);

        mc.clean_all();
        assert_eq!(mc.num_vertices(), 0);
        assert_eq!(mc.num_triangles(), 0);
        assert_eq!(mc.size_x(), 0);
        assert_eq!(mc.run(0.0), Err(Error::Uninitialized));
    }
}
