use algoscope_core::Point;

/// A graph of grid cells, described by the cells reachable in one move.
pub trait Pather {
    /// Push every cell reachable from `p` in one move onto `buf`. `buf` is
    /// empty on entry.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose moves have a price.
pub trait WeightedPather: Pather {
    /// Price of the move from `from` to its neighbor `to`; at least 1.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A [`WeightedPather`] that can guess the remaining price, for A*.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the price of any route from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
