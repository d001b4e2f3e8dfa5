use nalgebra::DMatrix;

use super::{BaseGraph, Cost, Direction, Label};

impl<T: Label, D: Direction> BaseGraph<T, D> {
    /// Cost matrix indexed by vertex insertion order.
    ///
    /// Entry `(i, j)` holds the cost of the step from vertex `i` to vertex `j`, or
    /// `f64::INFINITY` when they are not adjacent. Undirected graphs yield a
    /// symmetric matrix.
    pub fn cost_matrix(&self) -> DMatrix<Cost> {
        let n = self.vertex_count();
        let index = |v: &T| self.get_vertices().iter().position(|u| u == v);
        let mut matrix = DMatrix::from_element(n, n, Cost::INFINITY);

        for ((from, to), cost) in self.cost_lookup() {
            if let (Some(i), Some(j)) = (index(from), index(to)) {
                matrix[(i, j)] = cost;
            }
        }

        matrix
    }

    /// 0/1 adjacency matrix indexed by vertex insertion order.
    pub fn adjacency_matrix(&self) -> DMatrix<u8> {
        self.cost_matrix().map(|cost| u8::from(cost.is_finite()))
    }
}
