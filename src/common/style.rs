use std::fmt::{Display, Formatter};
use std::str::FromStr;

use image::Rgba;
use serde::Deserialize;
use tracing::warn;

use super::color::{parse_hex_color, BLACK, WHITE};
use super::error::{StyleError, StyleResult};

// Declares a closed shape enum with its lowercase names. Strict parsing goes through `FromStr`,
// lenient parsing (config files, presets) falls back to the default variant.
macro_rules! shape_enum {
    ($name:ident { $default:ident => $default_str:literal $(, $variant:ident => $($s:literal)|+)* $(,)? }) => {
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default, Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            #[default]
            $default,
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$default $(, $name::$variant)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    Self::$default => $default_str,
                    $(Self::$variant => [$($s),+][0],)*
                }
            }

            pub fn from_name(name: &str) -> Self {
                name.parse().unwrap_or_else(|_| {
                    warn!(shape = name, fallback = $default_str, "Unsupported {}", stringify!($name));
                    Self::default()
                })
            }
        }

        impl FromStr for $name {
            type Err = StyleError;

            fn from_str(s: &str) -> StyleResult<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $default_str => Ok(Self::$default),
                    $($($s)|+ => Ok(Self::$variant),)*
                    _ => Err(StyleError::UnsupportedShape(s.to_string())),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from_name(&s)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Shapes
//------------------------------------------------------------------------------

shape_enum!(ModuleShape {
    Square => "square",
    Rounded => "rounded",
    Dots => "dots",
    Diamond => "diamond",
    Star => "star",
});

shape_enum!(EyeShape {
    Square => "square",
    Rounded => "rounded",
    Circle => "circle",
    Leaf => "leaf",
    Diamond => "diamond",
});

// `circle` and `dot` draw the same shape
shape_enum!(EyeInnerShape {
    Square => "square",
    Rounded => "rounded",
    Circle => "circle" | "dot",
});

// Style config
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    pub module_shape: ModuleShape,
    pub eye_shape: EyeShape,
    pub eye_inner_shape: EyeInnerShape,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub eye_color: Option<Rgba<u8>>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            module_shape: ModuleShape::default(),
            eye_shape: EyeShape::default(),
            eye_inner_shape: EyeInnerShape::default(),
            foreground: BLACK,
            background: WHITE,
            eye_color: None,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_shape(mut self, shape: ModuleShape) -> Self {
        self.module_shape = shape;
        self
    }

    pub fn eye_shape(mut self, shape: EyeShape) -> Self {
        self.eye_shape = shape;
        self
    }

    pub fn eye_inner_shape(mut self, shape: EyeInnerShape) -> Self {
        self.eye_inner_shape = shape;
        self
    }

    pub fn foreground(mut self, color: Rgba<u8>) -> Self {
        self.foreground = color;
        self
    }

    pub fn background(mut self, color: Rgba<u8>) -> Self {
        self.background = color;
        self
    }

    pub fn eye_color(mut self, color: Option<Rgba<u8>>) -> Self {
        self.eye_color = color;
        self
    }

    // Colour for both eye strokes and fills
    pub fn resolved_eye_color(&self) -> Rgba<u8> {
        self.eye_color.unwrap_or(self.foreground)
    }

    pub fn from_json(json: &str) -> StyleResult<Self> {
        let raw: RawStyleConfig = serde_json::from_str(json)
            .map_err(|e| StyleError::InvalidConfig(e.to_string()))?;
        raw.try_into()
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Module: {}, Eye: {}, Eye inner: {} }}",
            self.module_shape, self.eye_shape, self.eye_inner_shape
        )
    }
}

// Boundary form of the config, colours as hex strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyleConfig {
    #[serde(default)]
    pub module_shape: ModuleShape,
    #[serde(default)]
    pub eye_shape: EyeShape,
    #[serde(default)]
    pub eye_inner_shape: EyeInnerShape,
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub eye_color: Option<String>,
}

impl TryFrom<RawStyleConfig> for StyleConfig {
    type Error = StyleError;

    fn try_from(raw: RawStyleConfig) -> StyleResult<Self> {
        Ok(Self {
            module_shape: raw.module_shape,
            eye_shape: raw.eye_shape,
            eye_inner_shape: raw.eye_inner_shape,
            foreground: parse_hex_color(&raw.foreground)?,
            background: parse_hex_color(&raw.background)?,
            eye_color: raw.eye_color.as_deref().map(parse_hex_color).transpose()?,
        })
    }
}
