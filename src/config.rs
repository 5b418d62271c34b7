// src/config.rs
//! Конфигурация генерации острова
//!
//! Этот модуль определяет все параметры, управляющие генерацией сетки:
//! - Стратегия генерации (равномерный порог или гауссовы пятна)
//! - Размер сетки и сид генератора
//! - Пространство цветов для разметки островов
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use crate::error::IslandError;
use crate::grid::cell_count;
use serde::{Deserialize, Serialize};
use std::fs;

/// Стратегия заполнения сетки сушей
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GenerationStrategy {
    /// Каждая клетка независимо: суша, если случайное число из `0..100` меньше `land_ratio`.
    /// Без пространственной корреляции — мелкие острова «соль с перцем».
    Uniform {
        /// Доля суши в процентах (0..=100)
        land_ratio: u32,
    },
    /// Несколько случайных центров с гауссовым спадом вероятности
    /// `exp(-d² / island_width²)`. Даёт округлые массивы суши с рваными краями.
    Blobs {
        /// Количество центров
        island_count: usize,
        /// Характерный радиус острова в клетках
        island_width: f32,
    },
}

impl Default for GenerationStrategy {
    fn default() -> Self {
        GenerationStrategy::Uniform {
            land_ratio: default_land_ratio(),
        }
    }
}

fn default_land_ratio() -> u32 {
    20
}

impl GenerationStrategy {
    /// Проверяет параметры стратегии до любых изменений сетки.
    ///
    /// ```
    /// use islands::config::GenerationStrategy;
    /// assert!(GenerationStrategy::Uniform { land_ratio: 100 }.validate().is_ok());
    /// assert!(GenerationStrategy::Uniform { land_ratio: 101 }.validate().is_err());
    /// assert!(GenerationStrategy::Blobs { island_count: 3, island_width: 0.0 }.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), IslandError> {
        match *self {
            GenerationStrategy::Uniform { land_ratio } if land_ratio > 100 => {
                Err(IslandError::InvalidConfiguration(format!(
                    "land_ratio must be within 0..=100, got {land_ratio}"
                )))
            }
            GenerationStrategy::Blobs { island_width, .. }
                if !island_width.is_finite() || island_width <= 0.0 =>
            {
                Err(IslandError::InvalidConfiguration(format!(
                    "island_width must be a positive finite number, got {island_width}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Настройки палитры для разметки
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteSettings {
    /// Число уровней на канал RGB:
    /// - `256` — полное 24-битное пространство,
    /// - меньше — квантованная палитра (`levels³` цветов).
    #[serde(default = "default_channel_levels")]
    pub channel_levels: u16,
}

fn default_channel_levels() -> u16 {
    256
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            channel_levels: 256,
        }
    }
}

/// Основные параметры генерации
///
/// Полная конфигурация для одной сетки. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IslandParams {
    /// Сид генератора случайных чисел (детерминированная генерация)
    pub seed: u64,

    /// Сторона квадратной сетки в клетках (по умолчанию 50)
    #[serde(default = "default_size")]
    pub size: usize,

    /// Стратегия генерации (по умолчанию `Uniform` с 20% суши)
    #[serde(default)]
    pub strategy: GenerationStrategy,

    /// Палитра цветов островов
    #[serde(default)]
    pub palette: PaletteSettings,
}

fn default_size() -> usize {
    50
}

impl IslandParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Аргументы
    /// * `path` - путь к файлу конфигурации в формате TOML
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден, содержит недопустимый формат
    /// или параметры не проходят [`IslandParams::validate`].
    ///
    /// # Пример
    /// ```toml
    /// # islands.toml
    /// seed = 42
    /// size = 80
    ///
    /// [strategy.Blobs]
    /// island_count = 6
    /// island_width = 7.5
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Проверяет все параметры.
    pub fn validate(&self) -> Result<(), IslandError> {
        cell_count(self.size)?;
        if !(2..=256).contains(&self.palette.channel_levels) {
            return Err(IslandError::InvalidConfiguration(format!(
                "channel_levels must be within 2..=256, got {}",
                self.palette.channel_levels
            )));
        }
        self.strategy.validate()
    }
}

impl Default for IslandParams {
    fn default() -> Self {
        Self {
            seed: 0,
            size: 50,
            strategy: GenerationStrategy::default(),
            palette: PaletteSettings::default(),
        }
    }
}
