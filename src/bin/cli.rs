use clap::Parser;
use islands::{
    ColorAllocator, GenerationStrategy, IslandError, IslandParams, PaletteSettings, Position,
    generate_seeded, label_islands_with, recolor_region_hex,
};
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Поиск и раскраска островов на сетке суша/море
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML (перекрывает флаги генерации)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сид генератора
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Сторона сетки в клетках
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Доля суши в процентах для равномерной генерации
    #[arg(long, default_value_t = 20)]
    land_ratio: u32,

    /// Количество центров островов (включает генерацию пятнами)
    #[arg(long)]
    blobs: Option<usize>,

    /// Характерный радиус острова для генерации пятнами
    #[arg(long, default_value_t = 6.0)]
    width: f32,

    /// Перекраска острова: `row,col,#hex` (можно повторять)
    #[arg(long = "recolor", value_name = "ROW,COL,#HEX")]
    recolor: Vec<String>,

    /// Путь для сохранения islands.png
    #[arg(short, long, default_value = "islands.png")]
    output: PathBuf,

    /// Размер клетки в пикселях
    #[arg(long, default_value_t = 16)]
    cell_px: u32,

    /// Путь для JSON-отчёта
    #[arg(long)]
    summary: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    size: usize,
    land_cells: usize,
    islands: usize,
    labeling_ms: f64,
}

fn parse_recolor(arg: &str) -> Option<(Position, &str)> {
    let mut parts = arg.splitn(3, ',');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.next()?.trim().parse().ok()?;
    let color = parts.next()?.trim();
    Some((Position::new(row, col), color))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let params = match &cli.config {
        Some(path) => {
            println!("🔍 Загрузка конфигурации...");
            IslandParams::from_toml_file(path.to_str().ok_or("config path is not valid UTF-8")?)?
        }
        None => IslandParams {
            seed: cli.seed,
            size: cli.size,
            strategy: match cli.blobs {
                Some(island_count) => GenerationStrategy::Blobs {
                    island_count,
                    island_width: cli.width,
                },
                None => GenerationStrategy::Uniform {
                    land_ratio: cli.land_ratio,
                },
            },
            palette: PaletteSettings::default(),
        },
    };

    println!(
        "Генерация сетки (размер: {}×{})...",
        params.size, params.size
    );
    let mut grid = generate_seeded(&params)?;

    // Отдельный поток для цветов, чтобы форма сетки не зависела от палитры
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(params.seed.wrapping_add(1));
    let mut allocator = ColorAllocator::from_settings(&params.palette);

    let start = Instant::now();
    let islands = label_islands_with(&mut grid, &mut allocator, &mut rng)?;
    let labeling_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!(
        "🏝️  Найдено островов: {islands} (суша: {} клеток, {labeling_ms:.2} мс)",
        grid.land_count()
    );

    for arg in &cli.recolor {
        let Some((pos, color)) = parse_recolor(arg) else {
            println!("⚠️  Пропуск {arg:?}: ожидается ROW,COL,#HEX");
            continue;
        };
        match recolor_region_hex(&mut grid, pos, color) {
            Ok(cells) => println!("🎨 ({}, {}) → {color}: перекрашено {cells} клеток", pos.row, pos.col),
            Err(
                err @ (IslandError::NotLandPosition { .. }
                | IslandError::InvalidColorFormat(_)
                | IslandError::OutOfBounds { .. }),
            ) => println!("⚠️  Пропуск {arg:?}: {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    println!("Сохранение в {:?}", cli.output);
    grid.save_as_png(
        cli.output.to_str().ok_or("output path is not valid UTF-8")?,
        cli.cell_px,
    )?;

    if let Some(path) = &cli.summary {
        let summary = Summary {
            seed: params.seed,
            size: params.size,
            land_cells: grid.land_count(),
            islands,
            labeling_ms,
        };
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        println!("Отчёт сохранён в {path:?}");
    }

    println!("\nГотово!");
    Ok(())
}
