use islands::{GenerationStrategy, IslandError, IslandParams, PaletteSettings};
use std::io::Write;

#[test]
fn defaults_match_the_classic_board() {
    let p = IslandParams::default();
    assert_eq!(p.size, 50);
    assert_eq!(p.strategy, GenerationStrategy::Uniform { land_ratio: 20 });
    assert_eq!(p.palette, PaletteSettings { channel_levels: 256 });
    assert!(p.validate().is_ok());
}

#[test]
fn minimal_toml_fills_defaults() {
    let p: IslandParams = toml::from_str("seed = 7").unwrap();
    assert_eq!(p.seed, 7);
    assert_eq!(p.size, 50);
    assert_eq!(p.strategy, GenerationStrategy::default());
}

#[test]
fn loads_blob_strategy_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("islands.toml");
    let mut f = std::fs::File::create(&path)?;
    writeln!(
        f,
        "seed = 42\nsize = 80\n\n[strategy.Blobs]\nisland_count = 6\nisland_width = 7.5\n\n[palette]\nchannel_levels = 16"
    )?;

    let p = IslandParams::from_toml_file(path.to_str().unwrap())?;
    assert_eq!(p.seed, 42);
    assert_eq!(p.size, 80);
    assert_eq!(
        p.strategy,
        GenerationStrategy::Blobs {
            island_count: 6,
            island_width: 7.5
        }
    );
    assert_eq!(p.palette.channel_levels, 16);
    Ok(())
}

#[test]
fn file_with_invalid_values_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "seed = 1\n[strategy.Uniform]\nland_ratio = 150\n")?;
    assert!(IslandParams::from_toml_file(path.to_str().unwrap()).is_err());

    // отрицательное количество островов не разбирается вовсе
    std::fs::write(
        &path,
        "seed = 1\n[strategy.Blobs]\nisland_count = -3\nisland_width = 2.0\n",
    )?;
    assert!(IslandParams::from_toml_file(path.to_str().unwrap()).is_err());
    Ok(())
}

#[test]
fn validate_reports_invalid_configuration() {
    let bad = [
        IslandParams {
            size: 0,
            ..IslandParams::default()
        },
        IslandParams {
            size: usize::MAX,
            ..IslandParams::default()
        },
        IslandParams {
            size: islands::grid::MAX_SIZE + 1,
            ..IslandParams::default()
        },
        IslandParams {
            strategy: GenerationStrategy::Uniform { land_ratio: 101 },
            ..IslandParams::default()
        },
        IslandParams {
            strategy: GenerationStrategy::Blobs {
                island_count: 2,
                island_width: -1.0,
            },
            ..IslandParams::default()
        },
        IslandParams {
            strategy: GenerationStrategy::Blobs {
                island_count: 2,
                island_width: f32::NAN,
            },
            ..IslandParams::default()
        },
        IslandParams {
            palette: PaletteSettings { channel_levels: 1 },
            ..IslandParams::default()
        },
    ];
    for p in bad {
        assert!(
            matches!(p.validate(), Err(IslandError::InvalidConfiguration(_))),
            "{p:?}"
        );
    }
}

#[test]
fn huge_size_in_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("huge.toml");
    std::fs::write(&path, "seed = 1\nsize = 4294967296\n")?;
    assert!(IslandParams::from_toml_file(path.to_str().unwrap()).is_err());
    Ok(())
}
