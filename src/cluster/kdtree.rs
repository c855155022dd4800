//! Static 2-d tree over projected points
//!
//! The tree is implicit: `order` is a permutation of point indices arranged so
//! that for every sub-range the middle element is the splitting node, the left
//! half holds values `<=` it on the split axis and the right half `>=`.

/// 2-d tree for radius queries in a planar (kilometer) space
pub struct KDTree {
    coords: Vec<[f64; 2]>,
    order: Vec<usize>,
}

impl KDTree {
    /// Builds the tree in O(n log n) by median selection on alternating axes
    pub fn new(coords: Vec<[f64; 2]>) -> Self {
        let mut order: Vec<usize> = (0..coords.len()).collect();
        build(&coords, &mut order, 0);
        Self { coords, order }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Finds all points within `radius` of `pt`, including `pt` itself if it is in the tree
    ///
    /// Results are appended to `out` so a buffer can be reused across calls.
    pub fn in_range(&self, pt: [f64; 2], radius: f64, out: &mut Vec<usize>) {
        if radius < 0.0 {
            return;
        }
        self.in_range_recursive(0, self.order.len(), 0, pt, radius, out);
    }

    fn in_range_recursive(&self, lo: usize, hi: usize, depth: usize, pt: [f64; 2], r: f64, out: &mut Vec<usize>) {
        if lo >= hi {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        let id = self.order[mid];
        let node = self.coords[id];
        let axis = depth % 2;

        let dx = node[0] - pt[0];
        let dy = node[1] - pt[1];
        if dx * dx + dy * dy <= r * r {
            out.push(id);
        }

        if pt[axis] - r <= node[axis] {
            self.in_range_recursive(lo, mid, depth + 1, pt, r, out);
        }
        if pt[axis] + r >= node[axis] {
            self.in_range_recursive(mid + 1, hi, depth + 1, pt, r, out);
        }
    }
}

fn build(coords: &[[f64; 2]], order: &mut [usize], depth: usize) {
    if order.len() <= 1 {
        return;
    }

    let axis = depth % 2;
    let mid = order.len() / 2;
    order.select_nth_unstable_by(mid, |&a, &b| coords[a][axis].total_cmp(&coords[b][axis]));

    let (left, rest) = order.split_at_mut(mid);
    build(coords, left, depth + 1);
    build(coords, &mut rest[1..], depth + 1);
}
