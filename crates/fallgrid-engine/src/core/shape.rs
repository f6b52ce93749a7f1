use super::cell::Cell;

/// Immutable geometry of one piece kind.
///
/// `cells` holds `rotation_count * width * height` entries, indexed as
/// `rotation * width * height + row * width + col`. Row 0 is the *bottom*
/// of the local grid, matching the board orientation (gravity decreases
/// row indices).
#[derive(Debug)]
pub struct PieceShape {
    cells: &'static [Cell],
    rotation_count: i32,
    width: i32,
    height: i32,
    spawn_row_offset: i32,
}

impl PieceShape {
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn new(
        cells: &'static [Cell],
        rotation_count: i32,
        width: i32,
        height: i32,
        spawn_row_offset: i32,
    ) -> Self {
        assert!(rotation_count > 0 && width > 0 && height > 0);
        assert!(cells.len() == (rotation_count * width * height) as usize);
        Self {
            cells,
            rotation_count,
            width,
            height,
            spawn_row_offset,
        }
    }

    /// Number of distinct rotation states.
    #[must_use]
    pub const fn rotation_count(&self) -> i32 {
        self.rotation_count
    }

    /// Width of the local bounding grid, in columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the local bounding grid, in rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Offset added to the visible board height to place the spawn row.
    #[must_use]
    pub const fn spawn_row_offset(&self) -> i32 {
        self.spawn_row_offset
    }

    /// Bounds-checked lookup into the flattened rotation grids.
    ///
    /// # Panics
    ///
    /// Panics if `rotation`, `row`, or `col` is outside the shape's grid.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn cell_at(&self, rotation: i32, row: i32, col: i32) -> Cell {
        assert!(0 <= rotation && rotation < self.rotation_count);
        assert!(0 <= row && row < self.height);
        assert!(0 <= col && col < self.width);
        let index = (rotation * self.height + row) * self.width + col;
        self.cells[index as usize]
    }
}
