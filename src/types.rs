/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the in-bounds Moore neighborhood of `center` (up to 8 cells,
/// clipped at the board edges), excluding `center` itself.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (cx, cy) = center;
    let (max_x, max_y) = bounds;
    let xs = cx.saturating_sub(1)..=cx.saturating_add(1).min(max_x.saturating_sub(1));

    xs.flat_map(move |x| {
        let ys = cy.saturating_sub(1)..=cy.saturating_add(1).min(max_y.saturating_sub(1));
        ys.map(move |y| (x, y))
    })
    .filter(move |&pos| pos != center)
}
