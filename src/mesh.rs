use glam::Vec3A;

pub type MeshVertexId = u32;
pub const NULL_MESH_VERTEX_ID: MeshVertexId = MeshVertexId::MAX;

/// Indexed triangle mesh with per-vertex normals.
///
/// `positions` and `normals` always have the same length; a vertex id is an
/// index into both.
#[derive(Clone, Debug, Default)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3A>,
    pub normals: Vec<Vec3A>,
    pub triangles: Vec<[MeshVertexId; 3]>,
}

impl MeshBuffers {
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.triangles.clear();
    }

    pub fn reserve(&mut self, verts: usize, tris: usize) {
        self.positions.reserve(verts);
        self.normals.reserve(verts);
        self.triangles.reserve(tris);
    }

    pub fn push_vertex(&mut self, position: Vec3A, normal: Vec3A) -> MeshVertexId {
        let id = self.positions.len() as MeshVertexId;
        self.positions.push(position);
        self.normals.push(normal);
        id
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }
}

/// Count how many triangles use each undirected edge.
///
/// A closed 2-manifold mesh uses every edge exactly twice.
pub fn count_edge_uses(triangles: &[[MeshVertexId; 3]]) -> std::collections::HashMap<(MeshVertexId, MeshVertexId), u32> {
    let mut counts = std::collections::HashMap::new();
    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_ids_are_append_only_indices() {
        let mut mesh = MeshBuffers::default();
        let a = mesh.push_vertex(Vec3A::ZERO, Vec3A::Z);
        let b = mesh.push_vertex(Vec3A::X, Vec3A::Z);
        assert_eq!((a, b), (0, 1));
        assert_eq!(mesh.num_vertices(), 2);
        assert_eq!(mesh.positions[b as usize], Vec3A::X);
    }

    #[test]
    fn quad_diagonal_is_shared() {
        let triangles = [[0, 1, 2], [0, 2, 3]];
        let counts = count_edge_uses(&triangles);
        assert_eq!(counts[&(0, 2)], 2);
        assert_eq!(counts[&(0, 1)], 1);
        assert_eq!(counts.len(), 5);
    }
}
