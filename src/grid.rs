// src/grid.rs
//! Квадратная сетка клеток суша/море с цветом отображения для каждой клетки.

use crate::color::{Color, LAND_COLOR, SEA_COLOR};
use crate::error::IslandError;
use serde::{Deserialize, Serialize};

/// Состояние клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CellState {
    #[default]
    Sea,
    Land,
}

impl CellState {
    /// Канонический цвет клетки сразу после генерации.
    #[must_use]
    pub fn initial_color(self) -> Color {
        match self {
            CellState::Sea => SEA_COLOR,
            CellState::Land => LAND_COLOR,
        }
    }
}

/// Позиция `(row, col)`. Знаковые координаты, чтобы `(-1, 0)` можно было
/// передать в ядро и получить `OutOfBounds`, а не переполнение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// Смещения 8-связности (ортогональные + диагональные соседи)
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Наибольшая сторона сетки (`MAX_SIZE²` клеток)
pub const MAX_SIZE: usize = 16_384;

/// Число клеток сетки со стороной `size`; `InvalidConfiguration` вне `1..=MAX_SIZE`.
pub fn cell_count(size: usize) -> Result<usize, IslandError> {
    if size == 0 {
        return Err(IslandError::InvalidConfiguration(
            "size must be greater than zero".to_string(),
        ));
    }
    size.checked_mul(size)
        .filter(|_| size <= MAX_SIZE)
        .ok_or_else(|| {
            IslandError::InvalidConfiguration(format!(
                "size must be at most {MAX_SIZE}, got {size}"
            ))
        })
}

/// Сетка `size × size`: состояние и цвет, индекс `row * size + col`
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    state: Vec<CellState>,
    color: Vec<Color>,
}

impl Grid {
    /// Сетка из одного моря. Размер проверяется через [`cell_count`].
    pub fn new(size: usize) -> Result<Self, IslandError> {
        let cells = cell_count(size)?;
        Ok(Self {
            size,
            state: vec![CellState::Sea; cells],
            color: vec![SEA_COLOR; cells],
        })
    }

    /// Строит сетку из текстовых строк: `#` — суша, `.` — море.
    ///
    /// ```
    /// use islands::grid::{CellState, Grid, Position};
    /// let grid = Grid::from_rows(&["#.", ".#"]).unwrap();
    /// assert_eq!(grid.get_state(Position::new(1, 1)).unwrap(), CellState::Land);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, IslandError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return Err(IslandError::InvalidConfiguration(format!(
                    "row {row} has {} cells, expected {size}",
                    line.chars().count()
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let state = match c {
                    '#' => CellState::Land,
                    '.' => CellState::Sea,
                    other => {
                        return Err(IslandError::InvalidConfiguration(format!(
                            "unexpected cell {other:?} at ({row}, {col})"
                        )));
                    }
                };
                let idx = row * size + col;
                grid.state[idx] = state;
                grid.color[idx] = state.initial_color();
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn states(&self) -> &[CellState] {
        &self.state
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    /// Количество клеток суши
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.state.iter().filter(|&&s| s == CellState::Land).count()
    }

    /// Линейный индекс позиции; `OutOfBounds`, если позиция вне сетки.
    pub fn index(&self, pos: Position) -> Result<usize, IslandError> {
        self.checked_index(pos).ok_or(IslandError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            size: self.size,
        })
    }

    /// Позиция, сдвинутая на `(dr, dc)`; `None` при переполнении координат.
    fn shifted(pos: Position, (dr, dc): (isize, isize)) -> Option<Position> {
        Some(Position::new(pos.row.checked_add(dr)?, pos.col.checked_add(dc)?))
    }

    fn checked_index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    /// Позиция по линейному индексу (индекс должен быть валидным).
    #[must_use]
    pub fn position_of(&self, idx: usize) -> Position {
        Position::new((idx / self.size) as isize, (idx % self.size) as isize)
    }

    pub fn get_state(&self, pos: Position) -> Result<CellState, IslandError> {
        Ok(self.state[self.index(pos)?])
    }

    pub fn set_state(&mut self, pos: Position, value: CellState) -> Result<(), IslandError> {
        let idx = self.index(pos)?;
        self.state[idx] = value;
        Ok(())
    }

    pub fn get_color(&self, pos: Position) -> Result<Color, IslandError> {
        Ok(self.color[self.index(pos)?])
    }

    pub fn set_color(&mut self, pos: Position, color: Color) -> Result<(), IslandError> {
        let idx = self.index(pos)?;
        self.color[idx] = color;
        Ok(())
    }

    /// Соседи позиции по 8-связности, только внутри сетки.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| Self::shifted(pos, offset))
            .filter(move |&p| self.checked_index(p).is_some())
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let pos = self.position_of(idx);
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_index(Self::shifted(pos, offset)?))
    }

    pub(crate) fn state_at(&self, idx: usize) -> CellState {
        self.state[idx]
    }

    pub(crate) fn put(&mut self, idx: usize, state: CellState) {
        self.state[idx] = state;
        self.color[idx] = state.initial_color();
    }

    pub(crate) fn paint(&mut self, idx: usize, color: Color) {
        self.color[idx] = color;
    }
}
