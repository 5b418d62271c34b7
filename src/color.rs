// src/color.rs
//! Цвет клетки для отображения (RGB без альфа-канала) и разбор пользовательских hex-строк.

use crate::error::IslandError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Непрозрачный RGB-цвет клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Цвет моря при генерации
pub const SEA_COLOR: Color = Color::rgb(0xcb, 0xe1, 0xff);
/// Цвет ещё не размеченной суши
pub const LAND_COLOR: Color = Color::rgb(0xbb, 0xbb, 0xbb);

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Упаковывает цвет в 24-битное число `0xRRGGBB`.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Распаковывает младшие 24 бита числа; старший байт игнорируется.
    #[must_use]
    pub fn from_u32(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Разбирает `#RGB` или `#RRGGBB` без учёта регистра.
///
/// ```
/// use islands::color::Color;
/// assert_eq!("#1A2b3C".parse::<Color>().unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
/// assert_eq!("#fa0".parse::<Color>().unwrap(), Color::rgb(0xff, 0xaa, 0x00));
/// assert!("112233".parse::<Color>().is_err());
/// ```
impl FromStr for Color {
    type Err = IslandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IslandError::InvalidColorFormat(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                // #abc == #aabbcc
                let mut channels = [0u8; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *channel = v * 16 + v;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_u32(value))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
