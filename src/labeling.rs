// src/labeling.rs
//! Поиск островов: максимальных 8-связных групп клеток суши.

use crate::color::Color;
use crate::error::IslandError;
use crate::grid::{CellState, Grid, Position};
use crate::palette::ColorAllocator;
use rand::Rng;
use std::collections::HashSet;

/// Множество посещённых клеток одного обхода.
pub(crate) trait Visited {
    /// Отмечает клетку; `false`, если она уже была отмечена.
    fn mark(&mut self, idx: usize) -> bool;
}

impl Visited for [bool] {
    fn mark(&mut self, idx: usize) -> bool {
        !std::mem::replace(&mut self[idx], true)
    }
}

// Обход одного региона: память пропорциональна его размеру.
impl Visited for HashSet<usize> {
    fn mark(&mut self, idx: usize) -> bool {
        self.insert(idx)
    }
}

/// Обходит регион от `start` явной очередью (без рекурсии).
///
/// В регион попадают клетки с тем же состоянием, что и `start`. `visited` общий
/// для всего прохода разметки; `visit` вызывается ровно один раз на клетку.
pub(crate) fn walk_region<V, F>(grid: &Grid, start: usize, visited: &mut V, mut visit: F)
where
    V: Visited + ?Sized,
    F: FnMut(usize),
{
    let target = grid.state_at(start);
    let mut queue = std::collections::VecDeque::new();
    visited.mark(start);
    queue.push_back(start);

    while let Some(idx) = queue.pop_front() {
        visit(idx);
        for nidx in grid.neighbor_indices(idx) {
            if grid.state_at(nidx) == target && visited.mark(nidx) {
                queue.push_back(nidx);
            }
        }
    }
}

/// Размечает все острова и красит каждый в уникальный цвет.
///
/// Возвращает число островов. Каждый проход берёт свежую палитру,
/// поэтому цвета между проходами могут отличаться, а количество — нет.
pub fn label_islands<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<usize, IslandError> {
    label_islands_with(grid, &mut ColorAllocator::new(), rng)
}

/// То же, что [`label_islands`], но с палитрой вызывающего кода.
///
/// Палитра сбрасывается в начале прохода. Цвета выдаются до покраски:
/// при `ColorSpaceExhausted` сетка не изменяется.
pub fn label_islands_with<R: Rng + ?Sized>(
    grid: &mut Grid,
    allocator: &mut ColorAllocator,
    rng: &mut R,
) -> Result<usize, IslandError> {
    allocator.reset();
    let total = grid.size() * grid.size();
    let mut visited = vec![false; total];
    let mut regions: Vec<Vec<usize>> = Vec::new();

    for idx in 0..total {
        if visited[idx] || grid.state_at(idx) != CellState::Land {
            continue;
        }

        let mut members = Vec::new();
        walk_region(grid, idx, visited.as_mut_slice(), |cell| members.push(cell));
        regions.push(members);
    }

    let colors = regions
        .iter()
        .map(|_| allocator.next_color(rng))
        .collect::<Result<Vec<_>, _>>()?;
    for (members, color) in regions.iter().zip(colors) {
        paint_all(grid, members, color);
    }

    tracing::debug!(
        size = grid.size(),
        land = grid.land_count(),
        regions = regions.len(),
        "islands labeled"
    );
    Ok(regions.len())
}

/// Клетки острова, которому принадлежит `pos` (порядок обхода в ширину).
///
/// Сетка не изменяется. Для моря — `NotLandPosition`.
pub fn region_cells(grid: &Grid, pos: Position) -> Result<Vec<Position>, IslandError> {
    let start = land_index(grid, pos)?;
    let mut visited = HashSet::new();
    let mut cells = Vec::new();
    walk_region(grid, start, &mut visited, |idx| cells.push(grid.position_of(idx)));
    Ok(cells)
}

pub(crate) fn land_index(grid: &Grid, pos: Position) -> Result<usize, IslandError> {
    let idx = grid.index(pos)?;
    if grid.state_at(idx) == CellState::Land {
        Ok(idx)
    } else {
        Err(IslandError::NotLandPosition {
            row: pos.row as usize,
            col: pos.col as usize,
        })
    }
}

pub(crate) fn paint_all(grid: &mut Grid, cells: &[usize], color: Color) {
    for &idx in cells {
        grid.paint(idx, color);
    }
}
