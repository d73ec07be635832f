use std::collections::HashSet;
use std::ops::Range;

use glam::IVec2;
use isogrid_core::{CoordinateSystem, EntityId, GridCell, HeightLevel};
use serde::{Deserialize, Serialize};

/// Cells an entity covers, relative to its anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// `size.x` by `size.y` rectangle with its corner on the anchor.
    Rect { size: IVec2 },
    /// Explicit cell offsets.
    Custom(Vec<IVec2>),
}

impl Shape {
    pub fn rect(width: i32, depth: i32) -> Self {
        Shape::Rect {
            size: IVec2::new(width, depth),
        }
    }

    /// Build from the editor's flag-plus-list form. A custom shape with no
    /// cells falls back to the rectangle instead of covering nothing.
    pub fn from_parts(size: IVec2, custom: &[IVec2], use_custom: bool) -> Self {
        if use_custom {
            if !custom.is_empty() {
                return Shape::Custom(custom.to_vec());
            }
            log::warn!(
                "Custom shape enabled with no cells, using {}x{} rectangle",
                size.x,
                size.y
            );
        }
        Shape::Rect { size }
    }

    /// Offsets in a fixed order: x outer, y inner for rectangles, list order
    /// for custom shapes.
    pub fn offsets(&self) -> Vec<IVec2> {
        match self {
            Shape::Rect { size } => {
                let mut out = Vec::new();
                for x in 0..size.x {
                    for y in 0..size.y {
                        out.push(IVec2::new(x, y));
                    }
                }
                out
            }
            Shape::Custom(cells) => cells.clone(),
        }
    }

    /// Rectangles get at least one cell per side; empty custom lists become
    /// a single cell.
    pub fn sanitized(self) -> Self {
        match self {
            Shape::Rect { size } => Shape::Rect {
                size: size.max(IVec2::ONE),
            },
            Shape::Custom(cells) if cells.is_empty() => Shape::rect(1, 1),
            custom => custom,
        }
    }
}

/// A shape placed relative to an entity's anchor cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub shape: Shape,
    #[serde(default)]
    pub offset: IVec2,
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self::rect(IVec2::ONE)
    }
}

impl ShapeSpec {
    pub fn rect(size: IVec2) -> Self {
        Self {
            shape: Shape::Rect { size },
            offset: IVec2::ZERO,
        }
    }

    pub fn custom(cells: Vec<IVec2>) -> Self {
        Self {
            shape: Shape::Custom(cells),
            offset: IVec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn sanitized(self) -> Self {
        Self {
            shape: self.shape.sanitized(),
            offset: self.offset,
        }
    }
}

/// Whether a footprint is where the entity stands or what it offers to
/// entities standing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootprintKind {
    Primary,
    Surface,
}

/// A set of cells at one height level, owned by one entity.
///
/// Cells are unique and keep the order they were resolved in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    pub owner: EntityId,
    pub kind: FootprintKind,
    pub level: HeightLevel,
    pub cells: Vec<GridCell>,
}

impl Footprint {
    pub fn new(
        owner: EntityId,
        kind: FootprintKind,
        level: HeightLevel,
        cells: impl IntoIterator<Item = GridCell>,
    ) -> Self {
        Self {
            owner,
            kind,
            level,
            cells: unique_cells(cells),
        }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Non-empty cell intersection. Levels are not compared here.
    pub fn intersects(&self, other: &Footprint) -> bool {
        let (small, large) = if self.cells.len() <= other.cells.len() {
            (&self.cells, &other.cells)
        } else {
            (&other.cells, &self.cells)
        };
        if small.is_empty() {
            return false;
        }
        let lookup: HashSet<GridCell> = large.iter().copied().collect();
        small.iter().any(|cell| lookup.contains(cell))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Cells covered by `spec` anchored at `base`, clipped to the grid.
///
/// Rectangles are intersected with the grid before iterating, so the cost
/// is bounded by the grid size rather than the shape size.
pub fn resolve_cells(coords: &CoordinateSystem, base: GridCell, spec: &ShapeSpec) -> Vec<GridCell> {
    let origin = base.saturating_add(spec.offset);
    match &spec.shape {
        Shape::Rect { size } => {
            let dims = coords.dimensions();
            let xs = clip_span(origin.x, size.x, dims.x);
            let ys = clip_span(origin.y, size.y, dims.y);
            let mut cells = Vec::new();
            for x in xs {
                for y in ys.clone() {
                    cells.push(IVec2::new(x, y));
                }
            }
            cells
        }
        Shape::Custom(offsets) => unique_cells(
            offsets
                .iter()
                .map(|o| origin.saturating_add(*o))
                .filter(|cell| coords.is_valid_cell(*cell)),
        ),
    }
}

/// Part of `[start, start + len)` inside `[0, limit)`.
fn clip_span(start: i32, len: i32, limit: i32) -> Range<i32> {
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(len.max(0))).min(i64::from(limit));
    if lo >= hi {
        return 0..0;
    }
    // Both ends lie in [0, limit], so they fit back into i32.
    lo as i32..hi as i32
}

/// Cells covered by `spec` anchored at `base`, before bounds filtering.
pub fn resolve_unclipped(base: GridCell, spec: &ShapeSpec) -> Vec<GridCell> {
    let origin = base.saturating_add(spec.offset);
    unique_cells(
        spec.shape
            .offsets()
            .into_iter()
            .map(|o| origin.saturating_add(o)),
    )
}

/// Drop repeated cells, keeping first occurrences in order.
pub(crate) fn unique_cells(cells: impl IntoIterator<Item = GridCell>) -> Vec<GridCell> {
    let mut seen = HashSet::new();
    cells.into_iter().filter(|cell| seen.insert(*cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use isogrid_core::GridConfig;

    fn coords() -> CoordinateSystem {
        CoordinateSystem::new(GridConfig {
            dimensions: IVec2::new(10, 10),
            ..Default::default()
        })
        .expect("valid config")
    }

    #[test]
    fn test_rect_cardinality() {
        let cells = resolve_cells(&coords(), IVec2::new(2, 3), &ShapeSpec::rect(IVec2::new(3, 2)));
        assert_eq!(cells.len(), 6);
        let unique: HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_rect_order_x_outer() {
        let cells = resolve_cells(&coords(), IVec2::new(0, 0), &ShapeSpec::rect(IVec2::new(2, 2)));
        assert_eq!(
            cells,
            vec![
                IVec2::new(0, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 0),
                IVec2::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_offset_applied() {
        let spec = ShapeSpec::rect(IVec2::ONE).with_offset(IVec2::new(1, -1));
        let cells = resolve_cells(&coords(), IVec2::new(4, 4), &spec);
        assert_eq!(cells, vec![IVec2::new(5, 3)]);
    }

    #[test]
    fn test_clipped_at_grid_edge() {
        let spec = ShapeSpec::rect(IVec2::new(3, 3));
        let cells = resolve_cells(&coords(), IVec2::new(8, 8), &spec);
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.x < 10 && c.y < 10));
        assert_eq!(resolve_unclipped(IVec2::new(8, 8), &spec).len(), 9);
    }

    #[test]
    fn test_fully_outside_is_empty() {
        let cells = resolve_cells(&coords(), IVec2::new(-5, -5), &ShapeSpec::rect(IVec2::new(2, 2)));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_custom_shape_keeps_list_order() {
        let spec = ShapeSpec::custom(vec![IVec2::new(0, 0), IVec2::new(2, 0), IVec2::new(1, 1)]);
        let cells = resolve_cells(&coords(), IVec2::new(3, 3), &spec);
        assert_eq!(
            cells,
            vec![IVec2::new(3, 3), IVec2::new(5, 3), IVec2::new(4, 4)]
        );
    }

    #[test]
    fn test_custom_shape_duplicates_collapse() {
        let spec = ShapeSpec::custom(vec![IVec2::new(1, 1), IVec2::new(1, 1), IVec2::new(0, 0)]);
        let cells = resolve_cells(&coords(), IVec2::ZERO, &spec);
        assert_eq!(cells, vec![IVec2::new(1, 1), IVec2::new(0, 0)]);
    }

    #[test]
    fn test_empty_custom_falls_back_to_rect() {
        let shape = Shape::from_parts(IVec2::new(2, 1), &[], true);
        assert_eq!(shape, Shape::rect(2, 1));
        let shape = Shape::from_parts(IVec2::new(2, 1), &[IVec2::new(5, 5)], true);
        assert_eq!(shape, Shape::Custom(vec![IVec2::new(5, 5)]));
        let shape = Shape::from_parts(IVec2::new(2, 1), &[IVec2::new(5, 5)], false);
        assert_eq!(shape, Shape::rect(2, 1));
    }

    #[test]
    fn test_sanitized_clamps_rect() {
        assert_eq!(Shape::rect(0, -3).sanitized(), Shape::rect(1, 1));
        assert_eq!(Shape::Custom(Vec::new()).sanitized(), Shape::rect(1, 1));
    }

    #[test]
    fn test_huge_rect_clipped_before_iterating() {
        let spec = ShapeSpec::rect(IVec2::new(50_000, 50_000)).with_offset(IVec2::new(100, 100));
        assert!(resolve_cells(&coords(), IVec2::ZERO, &spec).is_empty());

        let spec = ShapeSpec::rect(IVec2::new(i32::MAX, i32::MAX));
        let cells = resolve_cells(&coords(), IVec2::new(-5, 8), &spec);
        assert_eq!(cells.len(), 20);
        assert_eq!(cells.first(), Some(&IVec2::new(0, 8)));
        assert_eq!(cells.last(), Some(&IVec2::new(9, 9)));
    }

    #[test]
    fn test_extreme_anchor_resolves_empty() {
        let spec = ShapeSpec::rect(IVec2::new(3, 3)).with_offset(IVec2::new(10, 10));
        assert!(resolve_cells(&coords(), IVec2::splat(i32::MAX), &spec).is_empty());
        let spec = ShapeSpec::custom(vec![IVec2::new(-1, 0)]);
        assert!(resolve_cells(&coords(), IVec2::splat(i32::MIN), &spec).is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let spec = ShapeSpec::rect(IVec2::new(4, 3)).with_offset(IVec2::new(1, 1));
        let a = resolve_cells(&coords(), IVec2::new(2, 2), &spec);
        let b = resolve_cells(&coords(), IVec2::new(2, 2), &spec);
        assert_eq!(a, b);
    }

    #[test]
    fn test_footprint_intersection() {
        let a = Footprint::new(
            EntityId(1),
            FootprintKind::Primary,
            0,
            [IVec2::new(2, 2), IVec2::new(3, 2)],
        );
        let b = Footprint::new(EntityId(2), FootprintKind::Primary, 0, [IVec2::new(3, 2)]);
        let c = Footprint::new(EntityId(3), FootprintKind::Primary, 0, [IVec2::new(4, 2)]);
        let empty = Footprint::new(EntityId(4), FootprintKind::Primary, 0, []);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_footprint_dedupes_cells() {
        let fp = Footprint::new(
            EntityId(1),
            FootprintKind::Surface,
            1,
            [IVec2::new(1, 1), IVec2::new(1, 1)],
        );
        assert_eq!(fp.len(), 1);
        assert!(fp.contains(IVec2::new(1, 1)));
    }
}
