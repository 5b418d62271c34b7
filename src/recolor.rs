// src/recolor.rs
//! Перекраска одного острова без повторной разметки всей сетки.

use crate::color::Color;
use crate::error::IslandError;
use crate::grid::{Grid, Position};
use crate::labeling::{land_index, paint_all, walk_region};
use std::collections::HashSet;

/// Красит весь остров, содержащий `pos`, в `color`.
///
/// Возвращает количество перекрашенных клеток. Состояния клеток не меняются:
/// перекраска чисто косметическая. Для моря — `NotLandPosition` без изменений сетки.
pub fn recolor_region(grid: &mut Grid, pos: Position, color: Color) -> Result<usize, IslandError> {
    let start = land_index(grid, pos)?;

    let mut visited = HashSet::new();
    let mut members = Vec::new();
    walk_region(grid, start, &mut visited, |idx| members.push(idx));
    paint_all(grid, &members, color);

    tracing::trace!(row = pos.row, col = pos.col, %color, cells = members.len(), "region recolored");
    Ok(members.len())
}

/// Перекраска по пользовательской строке `#RGB` / `#RRGGBB`.
///
/// Строка разбирается до обхода: при `InvalidColorFormat` сетка не меняется.
pub fn recolor_region_hex(grid: &mut Grid, pos: Position, color: &str) -> Result<usize, IslandError> {
    let color: Color = color.parse()?;
    recolor_region(grid, pos, color)
}
