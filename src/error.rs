// src/error.rs
//! Ошибки ядра: генерация, разметка островов и перекраска регионов.

/// Все ошибки, которые может вернуть ядро.
///
/// `OutOfBounds` означает ошибку программиста (до аксессора дошла невалидная позиция),
/// остальные варианты — ожидаемые ошибки на границе с вызывающим кодом.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum IslandError {
    /// Позиция вне сетки
    #[error("position ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds { row: isize, col: isize, size: usize },
    /// Недопустимые параметры генерации
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Пространство цветов исчерпано за текущий проход разметки
    #[error("color space exhausted after issuing {issued} colors")]
    ColorSpaceExhausted { issued: usize },
    /// Перекраска запрошена для клетки моря
    #[error("cell ({row}, {col}) is not land")]
    NotLandPosition { row: usize, col: usize },
    /// Строка цвета не в формате `#RGB` / `#RRGGBB`
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}
