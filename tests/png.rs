use islands::{Grid, Position, SEA_COLOR, recolor_region_hex};

#[test]
fn rgb_buffer_expands_each_cell() {
    let mut grid = Grid::from_rows(&["#.", ".."]).unwrap();
    recolor_region_hex(&mut grid, Position::new(0, 0), "#102030").unwrap();

    let buf = grid.to_rgb_image(3);
    assert_eq!(buf.len(), 6 * 6 * 3);
    // пиксель (2, 2) — ещё клетка (0, 0)
    let px = |x: usize, y: usize| &buf[(y * 6 + x) * 3..(y * 6 + x) * 3 + 3];
    assert_eq!(px(2, 2), &[0x10, 0x20, 0x30]);
    assert_eq!(px(3, 0), &SEA_COLOR.to_array());
    assert_eq!(px(5, 5), &SEA_COLOR.to_array());
}

#[test]
fn saves_png_file() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_rows(&["#..", ".#.", "..#"])?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("islands.png");
    grid.save_as_png(path.to_str().unwrap(), 4)?;

    let img = image::open(&path)?.to_rgb8();
    assert_eq!(img.dimensions(), (12, 12));
    assert_eq!(img.get_pixel(11, 0).0, SEA_COLOR.to_array());
    Ok(())
}
