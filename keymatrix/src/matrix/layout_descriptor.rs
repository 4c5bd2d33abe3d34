/// Which authoring positions carry a switch on one physical form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor<const ROWS: usize, const COLS: usize> {
    name: &'static str,
    populated: [[bool; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> LayoutDescriptor<ROWS, COLS> {
    pub const fn full(name: &'static str) -> Self {
        LayoutDescriptor {
            name,
            populated: [[true; COLS]; ROWS],
        }
    }

    pub const fn new(name: &'static str, unpopulated: &[(usize, usize)]) -> Self {
        Self::full(name).with_unpopulated(name, unpopulated)
    }

    pub const fn with_unpopulated(self, name: &'static str, positions: &[(usize, usize)]) -> Self {
        self.with_positions(name, positions, false)
    }

    pub const fn with_populated(self, name: &'static str, positions: &[(usize, usize)]) -> Self {
        self.with_positions(name, positions, true)
    }

    const fn with_positions(
        self,
        name: &'static str,
        positions: &[(usize, usize)],
        populated: bool,
    ) -> Self {
        let mut grid = self.populated;
        let mut i = 0;
        while i < positions.len() {
            let (row, col) = positions[i];
            assert!(row < ROWS && col < COLS, "layout position outside the grid");
            grid[row][col] = populated;
            i += 1;
        }
        LayoutDescriptor {
            name,
            populated: grid,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Out-of-grid positions are reported as unpopulated.
    pub const fn is_populated(&self, row: usize, col: usize) -> bool {
        row < ROWS && col < COLS && self.populated[row][col]
    }

    pub fn populated_count(&self) -> usize {
        self.populated.iter().flatten().filter(|p| **p).count()
    }

    pub fn unpopulated(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.populated.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, populated)| !**populated)
                .map(move |(col, _)| (row, col))
        })
    }
}
