//! Node styling palettes keyed on module status.
//!
//! The renderer treats every value here as an opaque presentation hint; colors
//! cross the boundary as `#rrggbb` strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::types::{DependencyKind, ModuleStatus};

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Uppercase `#RRGGBB`.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_css_rgb())
	}
}

/// Rejected color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a #rrggbb color, got '{0}'")]
pub struct ParseColorError(String);

impl FromStr for Color {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || ParseColorError(s.to_string());
		let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
		if hex.len() != 6 || !hex.is_ascii() {
			return Err(err());
		}
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
		Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_css_rgb())
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// Line style shared by node borders and edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
	/// Solid line.
	#[default]
	Solid,
	/// Dashed line.
	Dashed,
}

impl From<DependencyKind> for LineStyle {
	fn from(kind: DependencyKind) -> Self {
		match kind {
			DependencyKind::Hard => Self::Solid,
			DependencyKind::Soft => Self::Dashed,
		}
	}
}

/// Fill and border for one module status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
	/// Fill color.
	pub color: Color,
	/// Solid for active modules, dashed for legacy ones.
	pub border_style: LineStyle,
	/// Border color.
	pub border_color: Color,
}

/// Complete node palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Style for maintained modules.
	pub active: NodeStyle,
	/// Style for legacy modules.
	pub legacy: NodeStyle,
}

impl Theme {
	/// Lavender active modules, teal legacy modules with a dashed purple border.
	pub fn default_theme() -> Self {
		Self {
			active: NodeStyle {
				color: Color::rgb(0xC4, 0xCF, 0xFD),
				border_style: LineStyle::Solid,
				border_color: Color::rgb(0x20, 0x0B, 0x54),
			},
			legacy: NodeStyle {
				color: Color::rgb(0xB8, 0xD6, 0xD8),
				border_style: LineStyle::Dashed,
				border_color: Color::rgb(0x70, 0x5B, 0xA4),
			},
		}
	}

	/// Style for a module status.
	pub fn node_style(&self, status: ModuleStatus) -> NodeStyle {
		match status {
			ModuleStatus::Active => self.active,
			ModuleStatus::Legacy => self.legacy,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
