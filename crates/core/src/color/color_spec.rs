//! Caller color input, parsed once into a tagged form and then resolved to
//! a channel triple. Parsing never fails: anything unrecognized resolves to
//! [`FALLBACK_COLOR`].

use super::palette;

/// Three 8-bit channels in RGB order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorTriple {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTriple {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Light pink.
pub const FALLBACK_COLOR: ColorTriple = ColorTriple::new(255, 105, 180);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    Named {
        name: String,
        color: ColorTriple,
    },
    Rgba(ColorTriple),
    Rgb(ColorTriple),
    Hex(ColorTriple),
    Invalid(String),
}

impl ColorSpec {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if let Some(hex) = palette::lookup(trimmed) {
            return match parse_hex(hex) {
                Some(color) => ColorSpec::Named {
                    name: trimmed.to_lowercase(),
                    color,
                },
                None => ColorSpec::Invalid(input.to_string()),
            };
        }

        if let Some(args) = strip_function(trimmed, "rgba") {
            return components_or_invalid(args, input, ColorSpec::Rgba);
        }
        if let Some(args) = strip_function(trimmed, "rgb") {
            return components_or_invalid(args, input, ColorSpec::Rgb);
        }

        match parse_hex(trimmed) {
            Some(color) => ColorSpec::Hex(color),
            None => ColorSpec::Invalid(input.to_string()),
        }
    }

    pub fn resolve(&self) -> ColorTriple {
        match self {
            ColorSpec::Named { color, .. }
            | ColorSpec::Rgba(color)
            | ColorSpec::Rgb(color)
            | ColorSpec::Hex(color) => *color,
            ColorSpec::Invalid(_) => FALLBACK_COLOR,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ColorSpec::Invalid(_))
    }
}

/// Parses and resolves in one step, logging inputs that fall back.
pub fn normalize(input: &str) -> ColorTriple {
    let spec = ColorSpec::parse(input);
    if let ColorSpec::Invalid(raw) = &spec {
        log::debug!("Unrecognized color {raw:?}, using fallback {FALLBACK_COLOR:?}");
    }
    spec.resolve()
}

fn components_or_invalid(
    args: &str,
    input: &str,
    variant: fn(ColorTriple) -> ColorSpec,
) -> ColorSpec {
    match parse_components(args) {
        Some(color) => variant(color),
        None => ColorSpec::Invalid(input.to_string()),
    }
}

/// Returns the argument list of `name(...)`, matching the name case-insensitively.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let open = name.len();
    if s.len() < open + 2 || !s.is_char_boundary(open) {
        return None;
    }
    let (head, rest) = s.split_at(open);
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix('(')?.strip_suffix(')')
}

/// First three comma-separated components, clamped to [0, 255] and truncated.
/// Any non-numeric component rejects the whole list; extra components
/// (such as alpha) are ignored once parsed.
fn parse_components(args: &str) -> Option<ColorTriple> {
    let values = args
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    if values.len() < 3 {
        return None;
    }
    let channel = |v: f64| v.clamp(0.0, 255.0) as u8;
    Some(ColorTriple::new(
        channel(values[0]),
        channel(values[1]),
        channel(values[2]),
    ))
}

/// `#RRGGBB`, `RRGGBB`, or the 3-digit shorthand of either.
fn parse_hex(s: &str) -> Option<ColorTriple> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(ColorTriple::new(byte(0)?, byte(2)?, byte(4)?))
}
