//! Overlap grouping
//!
//! Partitions points into connected components of the implicit overlap graph:
//! two points are linked when their planar degree distance is within the
//! threshold, and a group is every point reachable through such links.
//!
//! Components are built with a union-find over point indices. Candidate pairs
//! come from a uniform hash grid whose cell edge equals the threshold, so any
//! linked pair sits in the same or a neighbouring cell. Every candidate is
//! still checked with the exact distance.

use crate::coord::distance::planar_distance;
use crate::coord::{Coordinates, GeoPoint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default overlap threshold in degrees (~22 m at the equator)
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.0002;

/// Bounding box of a single group, in raw degree units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBoundingBox {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
    /// Longitude extent in degrees
    pub width: f64,
    /// Latitude extent in degrees
    pub height: f64,
    /// `width * height`, in degrees squared (not km²)
    pub area: f64,
}

/// A maximal set of points connected through overlapping neighbours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup {
    pub count: usize,
    /// Members in input order
    pub members: Vec<GeoPoint>,
    /// Arithmetic mean of member coordinates
    pub center: Coordinates,
    pub bounding_box: GroupBoundingBox,
}

impl OverlapGroup {
    fn from_members(members: Vec<GeoPoint>) -> Self {
        let count = members.len();
        let (sum_lat, sum_lng) = members
            .iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.latitude, lng + p.longitude));
        let center = Coordinates::new(sum_lat / count as f64, sum_lng / count as f64);

        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;
        for p in &members {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        let width = max_lng - min_lng;
        let height = max_lat - min_lat;

        Self {
            count,
            members,
            center,
            bounding_box: GroupBoundingBox {
                southwest: Coordinates::new(min_lat, min_lng),
                northeast: Coordinates::new(max_lat, max_lng),
                width,
                height,
                area: width * height,
            },
        }
    }
}

/// Summary statistics over the group list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub total_groups: usize,
    pub largest_group: usize,
    pub average_group_size: f64,
    pub single_image_groups: usize,
}

impl GroupStats {
    /// Compute statistics for groups already sorted largest first
    pub fn from_groups(groups: &[OverlapGroup]) -> Self {
        if groups.is_empty() {
            return Self::default();
        }

        let total: usize = groups.iter().map(|g| g.count).sum();
        Self {
            total_groups: groups.len(),
            largest_group: groups[0].count,
            average_group_size: total as f64 / groups.len() as f64,
            single_image_groups: groups.iter().filter(|g| g.count == 1).count(),
        }
    }
}

/// Disjoint-set forest over point indices
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return;
        }
        if self.rank[px] < self.rank[py] {
            self.parent[px] = py;
        } else if self.rank[px] > self.rank[py] {
            self.parent[py] = px;
        } else {
            self.parent[py] = px;
            self.rank[px] += 1;
        }
    }
}

/// Cells scanned on each side of a point's own cell
const NEIGHBOUR_RING: i64 = 2;

/// Uniform hash grid over point indices
struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, p: &GeoPoint) -> (i64, i64) {
        (
            (p.latitude / self.cell_size).floor() as i64,
            (p.longitude / self.cell_size).floor() as i64,
        )
    }

    fn insert(&mut self, p: &GeoPoint, index: usize) {
        let cell = self.cell_of(p);
        self.cells.entry(cell).or_default().push(index);
    }

    /// Indices in the 5x5 block of cells around `p`
    ///
    /// Rounding in the coordinate difference can put a pair that is within
    /// the threshold two cells apart, so one ring is not enough.
    fn neighbours(&self, p: &GeoPoint) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.cell_of(p);
        (-NEIGHBOUR_RING..=NEIGHBOUR_RING)
            .flat_map(move |dr| (-NEIGHBOUR_RING..=NEIGHBOUR_RING).map(move |dc| (row.saturating_add(dr), col.saturating_add(dc))))
            .filter_map(|cell| self.cells.get(&cell))
            .flat_map(|indices| indices.iter().copied())
    }
}

/// Whether two points overlap under the given threshold
pub fn points_overlap(a: &GeoPoint, b: &GeoPoint, threshold: f64) -> bool {
    planar_distance(a.coords(), b.coords()) <= threshold
}

/// Partition points into overlap groups
///
/// Groups are returned largest first. Groups of equal size keep the order in
/// which they were first discovered, i.e. the order of their earliest member
/// in `points`.
pub fn find_overlap_groups(points: &[GeoPoint], threshold: f64) -> Vec<OverlapGroup> {
    let mut uf = UnionFind::new(points.len());

    if threshold > 0.0 {
        let mut grid = SpatialGrid::new(threshold);
        for (i, p) in points.iter().enumerate() {
            for j in grid.neighbours(p) {
                if points_overlap(p, &points[j], threshold) {
                    uf.union(i, j);
                }
            }
            grid.insert(p, i);
        }
    } else {
        // Zero, negative or NaN thresholds: grid cells are undefined
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points_overlap(&points[i], &points[j], threshold) {
                    uf.union(i, j);
                }
            }
        }
    }

    // Scanning in input order makes component slots follow discovery order
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<GeoPoint>> = Vec::new();
    for (i, p) in points.iter().enumerate() {
        let root = uf.find(i);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(p.clone());
    }

    let mut groups: Vec<OverlapGroup> = components
        .into_iter()
        .map(OverlapGroup::from_members)
        .collect();

    // Stable sort keeps discovery order among equal counts
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
