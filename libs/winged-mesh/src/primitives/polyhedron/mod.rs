//! # Polyhedron Builder
//!
//! Wires a [`Surface`] from vertex positions and counter-clockwise face
//! windings given as indices into the position list.
//!
//! ## Algorithm
//!
//! 1. Check every face: at least 3 corners, indices in range, no corner
//!    visited twice.
//! 2. Record each directed edge `(from, to)`; a directed edge may belong to
//!    one face only.
//! 3. Every directed edge needs its opposite. Missing opposites are either
//!    rejected or, when capping, collected into boundary loops that each
//!    become one extra face wound the other way.
//! 4. Create vertices, faces and half-edges in input order, then pair twins
//!    through a `(from, to)` lookup.
//! 5. Check that the half-edges leaving each vertex form one fan.
//!
//! All input checks run before the surface is created, so a rejected input
//! never yields a partially wired surface.
//!
//! ## Example
//!
//! ```rust
//! use winged_mesh::{build_polyhedron, Vec3};
//!
//! let positions = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ];
//! let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
//!
//! let surface = build_polyhedron(&positions, &faces).unwrap();
//! assert_eq!(surface.half_edge_count(), 12);
//! assert!(surface.validate());
//! ```

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::core::half_edge::{HalfEdgeId, VertexId};
use crate::core::vec3::Vec3;
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;

/// Builds a closed surface with default settings.
///
/// # Errors
///
/// See [`PolyhedronBuilder::build`].
pub fn build_polyhedron(positions: &[Vec3], faces: &[Vec<usize>]) -> TopologyResult<Surface> {
    PolyhedronBuilder::new().build(positions, faces)
}

/// Configurable construction of a surface from an indexed face list.
///
/// ```rust
/// use winged_mesh::{PolyhedronBuilder, Vec3};
///
/// let square = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
/// ];
/// let sheet = PolyhedronBuilder::new()
///     .cap_open_boundaries(true)
///     .build(&square, &[vec![0, 1, 2, 3]])
///     .unwrap();
/// assert_eq!(sheet.face_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyhedronBuilder {
    cap_open_boundaries: bool,
    config: KernelConfig,
}

impl PolyhedronBuilder {
    /// A builder that rejects open boundaries and uses the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Close each boundary loop with an extra face instead of rejecting it.
    #[must_use]
    pub fn cap_open_boundaries(mut self, cap: bool) -> Self {
        self.cap_open_boundaries = cap;
        self
    }

    /// Configuration handed to the built surface.
    #[must_use]
    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the surface.
    ///
    /// Faces and vertices are created in input order, followed by any cap
    /// faces.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::TooFewSides`] for a face with fewer than 3 corners
    /// - [`TopologyError::InvalidVertexIndex`] for an index past the positions
    /// - [`TopologyError::DegenerateFace`] for a corner repeated in one face
    /// - [`TopologyError::NonManifoldEdge`] for a directed edge used twice
    /// - [`TopologyError::OpenBoundary`] for an edge without an opposite when
    ///   not capping
    /// - [`TopologyError::NonManifoldVertex`] for a vertex whose edges do not
    ///   form a single fan
    /// - [`TopologyError::IsolatedVertex`] for a position no face uses
    pub fn build(&self, positions: &[Vec3], faces: &[Vec<usize>]) -> TopologyResult<Surface> {
        let loops = match self.plan(positions, faces) {
            Ok(loops) => loops,
            Err(err) => {
                warn!("polyhedron input rejected: {err}");
                return Err(err);
            }
        };

        let mut surface = Surface::with_config(self.config);
        let (vertices, outgoing) = wire(&mut surface, positions, &loops);

        for (index, (&vertex, &count)) in vertices.iter().zip(&outgoing).enumerate() {
            let fan = surface.checked_vertex_fan(vertex).map(|fan| fan.len());
            if fan != Ok(count) {
                let err = TopologyError::NonManifoldVertex(index);
                warn!("polyhedron input rejected: {err}");
                return Err(err);
            }
        }

        debug!(
            vertices = surface.vertex_count(),
            faces = surface.face_count(),
            caps = loops.len() - faces.len(),
            "polyhedron built"
        );
        Ok(surface)
    }

    /// Checks the input and returns every face loop to create, caps last.
    fn plan(&self, positions: &[Vec3], faces: &[Vec<usize>]) -> TopologyResult<Vec<Vec<usize>>> {
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        let mut order = Vec::new();
        let mut used = vec![false; positions.len()];

        for (face, corners) in faces.iter().enumerate() {
            if corners.len() < 3 {
                return Err(TopologyError::TooFewSides {
                    face,
                    sides: corners.len(),
                });
            }
            let mut seen = HashSet::with_capacity(corners.len());
            for &index in corners {
                if index >= positions.len() {
                    return Err(TopologyError::InvalidVertexIndex { face, index });
                }
                if !seen.insert(index) {
                    return Err(TopologyError::DegenerateFace { face, index });
                }
                used[index] = true;
            }
            for (from, to) in cyclic_pairs(corners) {
                if directed.insert((from, to), face).is_some() {
                    return Err(TopologyError::NonManifoldEdge { from, to });
                }
                order.push((from, to));
            }
        }

        if let Some(unused) = used.iter().position(|&u| !u) {
            return Err(TopologyError::IsolatedVertex(unused));
        }

        let open: Vec<(usize, usize)> = order
            .into_iter()
            .filter(|&(from, to)| !directed.contains_key(&(to, from)))
            .collect();

        let mut loops: Vec<Vec<usize>> = faces.to_vec();
        if let Some(&(from, to)) = open.first() {
            if !self.cap_open_boundaries {
                return Err(TopologyError::OpenBoundary { from, to });
            }
            loops.extend(boundary_loops(&open)?);
        }
        Ok(loops)
    }
}

/// Groups the reversed open edges into closed cap loops.
///
/// Each open edge `a -> b` yields a cap edge `b -> a`. Every boundary vertex
/// must start exactly one cap edge and end exactly one.
fn boundary_loops(open: &[(usize, usize)]) -> TopologyResult<Vec<Vec<usize>>> {
    let mut cap_from: HashMap<usize, usize> = HashMap::with_capacity(open.len());
    let mut cap_into = HashSet::with_capacity(open.len());
    for &(a, b) in open {
        if cap_from.insert(b, a).is_some() {
            return Err(TopologyError::NonManifoldVertex(b));
        }
        if !cap_into.insert(a) {
            return Err(TopologyError::NonManifoldVertex(a));
        }
    }

    let mut visited = HashSet::with_capacity(open.len());
    let mut loops = Vec::new();
    for &(_, start) in open {
        if visited.contains(&start) {
            continue;
        }
        let mut boundary = Vec::new();
        let mut at = start;
        loop {
            visited.insert(at);
            boundary.push(at);
            at = *cap_from
                .get(&at)
                .ok_or(TopologyError::NonManifoldVertex(at))?;
            if at == start {
                break;
            }
        }
        loops.push(boundary);
    }
    Ok(loops)
}

/// Consecutive corner pairs of a closed loop, wrapping around.
fn cyclic_pairs(corners: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&from, &to)| (from, to))
}

/// Creates and links every entity for closed, already checked loops.
///
/// Each vertex is anchored on the last half-edge created from it. Returns
/// the vertex handles in input order and the number of half-edges leaving
/// each one.
pub(crate) fn wire<L: AsRef<[usize]>>(
    surface: &mut Surface,
    positions: &[Vec3],
    loops: &[L],
) -> (Vec<VertexId>, Vec<usize>) {
    let vertices: Vec<VertexId> = positions.iter().map(|&p| surface.new_vertex(p)).collect();
    let mut outgoing = vec![0; vertices.len()];
    let mut by_ends: HashMap<(usize, usize), HalfEdgeId> = HashMap::new();

    for corners in loops {
        let corners = corners.as_ref();
        let face = surface.new_face();
        let edges: Vec<HalfEdgeId> = cyclic_pairs(corners)
            .map(|(from, to)| {
                let edge = surface.new_edge();
                surface.set_origin(edge, vertices[from]);
                surface.set_face(edge, face);
                surface.anchor_vertex(vertices[from], edge);
                outgoing[from] += 1;
                by_ends.insert((from, to), edge);
                edge
            })
            .collect();
        for (i, &edge) in edges.iter().enumerate() {
            surface.link_next(edge, edges[(i + 1) % edges.len()]);
        }
        surface.anchor_face(face, edges[0]);
    }

    for (&(from, to), &edge) in &by_ends {
        if let Some(&twin) = by_ends.get(&(to, from)) {
            surface.link_twins(edge, twin);
        }
    }

    (vertices, outgoing)
}
