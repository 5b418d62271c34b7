// src/palette.rs
//! Выдача уникальных цветов островов в пределах одного прохода разметки.

use crate::color::{Color, LAND_COLOR, SEA_COLOR};
use crate::config::PaletteSettings;
use crate::error::IslandError;
use rand::Rng;
use std::collections::HashSet;

/// Сколько раз перевыбираем случайный цвет до перебора всего пространства.
const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Генератор попарно различных цветов.
///
/// Пространство — `levels³` квантованных RGB-цветов (при 256 уровнях — все 24 бита).
/// Канонические цвета моря и суши никогда не выдаются.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    levels: u16,
    issued: HashSet<Color>,
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAllocator {
    /// Полное 24-битное пространство.
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: 256,
            issued: HashSet::new(),
        }
    }

    /// Квантованное пространство с `levels` уровнями на канал (ограничено 2..=256).
    #[must_use]
    pub fn with_channel_levels(levels: u16) -> Self {
        Self {
            levels: levels.clamp(2, 256),
            issued: HashSet::new(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &PaletteSettings) -> Self {
        Self::with_channel_levels(settings.channel_levels)
    }

    /// Сколько цветов выдано в текущем проходе
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Начинает новый проход: ранее выданные цвета снова доступны.
    pub fn reset(&mut self) {
        self.issued.clear();
    }

    /// Выдаёт цвет, отличный от всех выданных в этом проходе.
    pub fn next_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Color, IslandError> {
        let levels = self.levels;
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let color = self.quantized(
                rng.gen_range(0..levels),
                rng.gen_range(0..levels),
                rng.gen_range(0..levels),
            );
            if self.is_free(color) {
                self.issued.insert(color);
                return Ok(color);
            }
        }

        // Случайные попытки не удались: пространство почти заполнено, ищем перебором.
        let free = (0..levels)
            .flat_map(|r| (0..levels).flat_map(move |g| (0..levels).map(move |b| (r, g, b))))
            .map(|(r, g, b)| self.quantized(r, g, b))
            .find(|&c| self.is_free(c));

        match free {
            Some(color) => {
                self.issued.insert(color);
                Ok(color)
            }
            None => Err(IslandError::ColorSpaceExhausted {
                issued: self.issued.len(),
            }),
        }
    }

    fn is_free(&self, color: Color) -> bool {
        color != SEA_COLOR && color != LAND_COLOR && !self.issued.contains(&color)
    }

    fn quantized(&self, r: u16, g: u16, b: u16) -> Color {
        let scale = |v: u16| (u32::from(v) * 255 / u32::from(self.levels - 1)) as u8;
        Color::rgb(scale(r), scale(g), scale(b))
    }
}
