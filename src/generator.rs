// src/generator.rs
//! Заполнение сетки сушей и морем: равномерный порог или гауссовы пятна.

use crate::config::{GenerationStrategy, IslandParams};
use crate::error::IslandError;
use crate::grid::{CellState, Grid, Position, cell_count};
use rand::{Rng, SeedableRng};

/// Генерирует новую сетку `size × size` выбранной стратегией.
///
/// Параметры проверяются до создания сетки: при ошибке ничего не изменяется.
/// Суша получает `LAND_COLOR`, море — `SEA_COLOR`.
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    strategy: &GenerationStrategy,
    rng: &mut R,
) -> Result<Grid, IslandError> {
    cell_count(size)?;
    strategy.validate()?;

    let mut grid = Grid::new(size)?;
    match *strategy {
        GenerationStrategy::Uniform { land_ratio } => fill_uniform(&mut grid, land_ratio, rng),
        GenerationStrategy::Blobs {
            island_count,
            island_width,
        } => fill_blobs(&mut grid, island_count, island_width, rng),
    }

    tracing::debug!(
        size,
        land = grid.land_count(),
        ?strategy,
        "grid generated"
    );
    Ok(grid)
}

/// Генерирует сетку по параметрам с `ChaCha8Rng`, засеянным `params.seed`.
pub fn generate_seeded(params: &IslandParams) -> Result<Grid, IslandError> {
    params.validate()?;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(params.seed);
    generate(params.size, &params.strategy, &mut rng)
}

fn fill_uniform<R: Rng + ?Sized>(grid: &mut Grid, land_ratio: u32, rng: &mut R) {
    for idx in 0..grid.size() * grid.size() {
        // 0..100: при 0 суши нет вовсе, при 100 — сплошная суша
        let draw: u32 = rng.gen_range(0..100);
        let state = if draw < land_ratio {
            CellState::Land
        } else {
            CellState::Sea
        };
        grid.put(idx, state);
    }
}

/// Случайные центры пятен; первое, что стратегия `Blobs` берёт из `rng`.
pub fn pick_centers<R: Rng + ?Sized>(size: usize, count: usize, rng: &mut R) -> Vec<Position> {
    (0..count)
        .map(|_| {
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..size);
            Position::new(row as isize, col as isize)
        })
        .collect()
}

fn fill_blobs<R: Rng + ?Sized>(grid: &mut Grid, island_count: usize, island_width: f32, rng: &mut R) {
    let size = grid.size();
    let centers: Vec<(f32, f32)> = pick_centers(size, island_count, rng)
        .into_iter()
        .map(|p| (p.row as f32, p.col as f32))
        .collect();
    let width_sq = island_width * island_width;

    for idx in 0..size * size {
        let row = (idx / size) as f32;
        let col = (idx % size) as f32;

        // Каждый центр даёт отдельный шанс: клетка рядом с несколькими центрами
        // становится сушей чаще.
        let mut is_land = false;
        for &(cr, cc) in &centers {
            let dist_sq = (row - cr).powi(2) + (col - cc).powi(2);
            let probability = (-dist_sq / width_sq).exp();
            if rng.gen_range(0.0f32..1.0) <= probability {
                is_land = true;
            }
        }

        grid.put(
            idx,
            if is_land {
                CellState::Land
            } else {
                CellState::Sea
            },
        );
    }
}
