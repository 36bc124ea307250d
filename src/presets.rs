// Static catalog of pattern, colour template and background presets.

use image::Rgba;

use crate::common::error::{StyleError, StyleResult};
use crate::common::style::{EyeInnerShape, EyeShape, ModuleShape, StyleConfig};

const fn hex(v: u32) -> Rgba<u8> {
    Rgba([(v >> 16) as u8, (v >> 8) as u8, v as u8, 255])
}

// Patterns
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub module_shape: ModuleShape,
    pub eye_shape: EyeShape,
    pub eye_inner_shape: EyeInnerShape,
}

macro_rules! pattern {
    ($id:literal, $name:literal, $desc:literal, $module:ident, $eye:ident, $inner:ident) => {
        PatternPreset {
            id: $id,
            name: $name,
            description: $desc,
            module_shape: ModuleShape::$module,
            eye_shape: EyeShape::$eye,
            eye_inner_shape: EyeInnerShape::$inner,
        }
    };
}

pub const PATTERNS: &[PatternPreset] = &[
    pattern!("classic", "Classic", "Traditional square modules", Square, Square, Square),
    pattern!("rounded", "Rounded", "Soft rounded corners", Rounded, Rounded, Rounded),
    pattern!("dots", "Dots", "Circular dot pattern", Dots, Circle, Circle),
    pattern!("diamond", "Diamond", "Diamond shaped modules", Diamond, Diamond, Square),
    pattern!("elegant", "Elegant", "Rounded with leaf eyes", Rounded, Leaf, Circle),
    pattern!("modern", "Modern", "Dots with circular eyes", Dots, Rounded, Circle),
    pattern!("star", "Star", "Star-shaped modules", Star, Circle, Circle),
    pattern!("minimal", "Minimal", "Clean dots with square eyes", Dots, Square, Square),
];

pub fn pattern(id: &str) -> StyleResult<&'static PatternPreset> {
    PATTERNS.iter().find(|p| p.id == id).ok_or_else(|| StyleError::UnknownPreset(id.to_string()))
}

// Templates
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    #[default]
    None,
    Simple,
    Gradient,
    Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub eye_color: Option<Rgba<u8>>,
    pub gradient: Option<(Rgba<u8>, Rgba<u8>)>,
    pub pattern: &'static str,
    pub frame: FrameStyle,
}

impl TemplatePreset {
    // Some templates name patterns outside the catalog; those render as classic
    pub fn default_pattern(&self) -> &'static PatternPreset {
        pattern(self.pattern).unwrap_or(&PATTERNS[0])
    }
}

pub const TEMPLATES: &[TemplatePreset] = &[
    TemplatePreset {
        id: "classic-dark",
        name: "Classic Dark",
        description: "Timeless black & white design",
        foreground: hex(0x000000),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: None,
        pattern: "classic",
        frame: FrameStyle::Simple,
    },
    TemplatePreset {
        id: "neon-purple",
        name: "Neon Purple",
        description: "Vibrant purple gradient glow",
        foreground: hex(0x8B5CF6),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: Some((hex(0x8B5CF6), hex(0xD946EF))),
        pattern: "rounded",
        frame: FrameStyle::Gradient,
    },
    TemplatePreset {
        id: "ocean-blue",
        name: "Ocean Blue",
        description: "Cool ocean-inspired tones",
        foreground: hex(0x0EA5E9),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: Some((hex(0x0EA5E9), hex(0x06B6D4))),
        pattern: "dots",
        frame: FrameStyle::Shadow,
    },
    TemplatePreset {
        id: "sunset-glow",
        name: "Sunset Glow",
        description: "Warm sunset gradient vibes",
        foreground: hex(0xF97316),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: Some((hex(0xF97316), hex(0xEF4444))),
        pattern: "rounded",
        frame: FrameStyle::Gradient,
    },
    TemplatePreset {
        id: "forest-green",
        name: "Forest Green",
        description: "Natural green earth tones",
        foreground: hex(0x22C55E),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: Some((hex(0x22C55E), hex(0x10B981))),
        pattern: "classy",
        frame: FrameStyle::Simple,
    },
    TemplatePreset {
        id: "midnight-gold",
        name: "Midnight Gold",
        description: "Elegant dark with gold accents",
        foreground: hex(0x1F2937),
        background: hex(0xFFFBEB),
        eye_color: Some(hex(0xF59E0B)),
        gradient: None,
        pattern: "classy",
        frame: FrameStyle::Shadow,
    },
    TemplatePreset {
        id: "pink-dreams",
        name: "Pink Dreams",
        description: "Soft pink romantic style",
        foreground: hex(0xEC4899),
        background: hex(0xFFFFFF),
        eye_color: None,
        gradient: Some((hex(0xEC4899), hex(0xF472B6))),
        pattern: "dots",
        frame: FrameStyle::Gradient,
    },
    TemplatePreset {
        id: "cyber-tech",
        name: "Cyber Tech",
        description: "Futuristic tech aesthetic",
        foreground: hex(0x6366F1),
        background: hex(0x0F172A),
        eye_color: None,
        gradient: Some((hex(0x6366F1), hex(0x8B5CF6))),
        pattern: "rounded",
        frame: FrameStyle::Gradient,
    },
];

pub fn template(id: &str) -> StyleResult<&'static TemplatePreset> {
    TEMPLATES.iter().find(|t| t.id == id).ok_or_else(|| StyleError::UnknownPreset(id.to_string()))
}

impl StyleConfig {
    pub fn from_presets(template: &TemplatePreset, pattern: &PatternPreset) -> Self {
        Self {
            module_shape: pattern.module_shape,
            eye_shape: pattern.eye_shape,
            eye_inner_shape: pattern.eye_inner_shape,
            foreground: template.foreground,
            background: template.background,
            eye_color: template.eye_color,
        }
    }

    pub fn from_preset_ids(template_id: &str, pattern_id: &str) -> StyleResult<Self> {
        Ok(Self::from_presets(template(template_id)?, pattern(pattern_id)?))
    }
}

// Backgrounds
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundFill {
    Transparent,
    Solid(Rgba<u8>),
    // CSS style angle: 0 points up, 90 right, positions in 0..=1
    LinearGradient { angle: f32, stops: &'static [(f32, Rgba<u8>)] },
    Dots { base: Rgba<u8>, dot: Rgba<u8>, spacing: f32, radius: f32 },
    Grid { base: Rgba<u8>, line: Rgba<u8>, spacing: f32, width: f32 },
    // 45 degree stripes
    Stripes { base: Rgba<u8>, stripe: Rgba<u8>, period: f32, width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub fill: BackgroundFill,
}

macro_rules! gradient {
    ($($pos:literal => $color:literal),+ $(,)?) => {
        BackgroundFill::LinearGradient { angle: 135.0, stops: &[$(($pos, hex($color))),+] }
    };
}

pub const BACKGROUNDS: &[BackgroundPreset] = &[
    BackgroundPreset { id: "none", name: "None", fill: BackgroundFill::Transparent },
    BackgroundPreset {
        id: "gradient-purple",
        name: "Purple Dream",
        fill: gradient!(0.0 => 0x667EEA, 0.5 => 0x764BA2, 1.0 => 0xF093FB),
    },
    BackgroundPreset {
        id: "gradient-sunset",
        name: "Sunset Vibes",
        fill: gradient!(0.0 => 0xFA709A, 1.0 => 0xFEE140),
    },
    BackgroundPreset {
        id: "gradient-ocean",
        name: "Ocean Breeze",
        fill: gradient!(0.0 => 0x4FACFE, 1.0 => 0x00F2FE),
    },
    BackgroundPreset {
        id: "gradient-forest",
        name: "Forest Glow",
        fill: gradient!(0.0 => 0x11998E, 1.0 => 0x38EF7D),
    },
    BackgroundPreset {
        id: "gradient-midnight",
        name: "Midnight",
        fill: gradient!(0.0 => 0x0F0C29, 0.5 => 0x302B63, 1.0 => 0x24243E),
    },
    BackgroundPreset {
        id: "gradient-candy",
        name: "Cotton Candy",
        fill: gradient!(0.0 => 0xFF9A9E, 0.5 => 0xFECFEF, 1.0 => 0xFECFEF),
    },
    BackgroundPreset {
        id: "gradient-fire",
        name: "Fire Storm",
        fill: gradient!(0.0 => 0xF12711, 1.0 => 0xF5AF19),
    },
    BackgroundPreset {
        id: "gradient-aurora",
        name: "Aurora",
        fill: gradient!(0.0 => 0x00C6FB, 0.5 => 0x005BEA, 1.0 => 0xA855F7),
    },
    BackgroundPreset {
        id: "pattern-dots",
        name: "Polka Dots",
        fill: BackgroundFill::Dots {
            base: hex(0xF8FAFC),
            dot: hex(0xCBD5E1),
            spacing: 20.0,
            radius: 1.5,
        },
    },
    BackgroundPreset {
        id: "pattern-grid",
        name: "Grid Lines",
        fill: BackgroundFill::Grid {
            base: hex(0xFAFAFA),
            line: hex(0xE5E5E5),
            spacing: 20.0,
            width: 1.0,
        },
    },
    BackgroundPreset {
        id: "pattern-diagonal",
        name: "Diagonal Stripes",
        fill: BackgroundFill::Stripes {
            base: hex(0xFEF3C7),
            stripe: hex(0xFBBF24),
            period: 6.0,
            width: 1.0,
        },
    },
    // SVG textured backgrounds, reduced to their base colour
    BackgroundPreset {
        id: "pattern-waves",
        name: "Waves",
        fill: BackgroundFill::Solid(hex(0xE0F2FE)),
    },
    BackgroundPreset {
        id: "pattern-circuit",
        name: "Circuit",
        fill: BackgroundFill::Solid(hex(0x1E1B4B)),
    },
    BackgroundPreset {
        id: "pattern-confetti",
        name: "Confetti",
        fill: BackgroundFill::Solid(hex(0xFDF4FF)),
    },
    BackgroundPreset {
        id: "pattern-geometric",
        name: "Geometric",
        fill: BackgroundFill::Solid(hex(0xF0FDFA)),
    },
];

pub fn background(id: &str) -> StyleResult<&'static BackgroundPreset> {
    BACKGROUNDS.iter().find(|b| b.id == id).ok_or_else(|| StyleError::UnknownPreset(id.to_string()))
}
