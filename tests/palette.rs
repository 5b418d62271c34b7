use islands::{ColorAllocator, IslandError, LAND_COLOR, PaletteSettings, SEA_COLOR};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn issued_colors_are_distinct() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut allocator = ColorAllocator::new();
    let colors: HashSet<_> = (0..5_000)
        .map(|_| allocator.next_color(&mut rng).unwrap())
        .collect();
    assert_eq!(colors.len(), 5_000);
    assert_eq!(allocator.issued(), 5_000);
}

#[test]
fn small_space_is_filled_completely_then_exhausted() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut allocator = ColorAllocator::from_settings(&PaletteSettings { channel_levels: 3 });
    let colors: HashSet<_> = (0..27)
        .map(|_| allocator.next_color(&mut rng).unwrap())
        .collect();
    assert_eq!(colors.len(), 27);
    assert!(!colors.contains(&SEA_COLOR) && !colors.contains(&LAND_COLOR));
    for c in &colors {
        for channel in c.to_array() {
            assert!([0, 127, 255].contains(&channel), "{c}");
        }
    }
    assert_eq!(
        allocator.next_color(&mut rng),
        Err(IslandError::ColorSpaceExhausted { issued: 27 })
    );

    allocator.reset();
    assert!(allocator.next_color(&mut rng).is_ok());
}

#[test]
fn canonical_colors_are_never_issued() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut allocator = ColorAllocator::new();
    for _ in 0..10_000 {
        let c = allocator.next_color(&mut rng).unwrap();
        assert_ne!(c, SEA_COLOR);
        assert_ne!(c, LAND_COLOR);
    }
}
