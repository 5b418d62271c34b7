// src/png.rs
//! Экспорт раскрашенной сетки в PNG.

use crate::grid::Grid;
use image::{ImageBuffer, Rgb};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// RGB-буфер изображения: каждая клетка — квадрат `cell_px × cell_px` пикселей.
    #[must_use]
    pub fn to_rgb_image(&self, cell_px: u32) -> Vec<u8> {
        let cell_px = cell_px.max(1) as usize;
        let side = self.size() * cell_px;
        let colors = self.colors();
        let size = self.size();

        let row_pixels = |y: usize| -> Vec<u8> {
            let row = y / cell_px;
            (0..side)
                .flat_map(|x| colors[row * size + x / cell_px].to_array())
                .collect()
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<u8>> = (0..side).into_par_iter().map(row_pixels).collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<u8>> = (0..side).map(row_pixels).collect();

        rows.concat()
    }

    pub fn save_as_png(&self, path: &str, cell_px: u32) -> Result<(), Box<dyn std::error::Error>> {
        let side = (self.size() as u32) * cell_px.max(1);
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(side, side, self.to_rgb_image(cell_px))
                .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }
}
