//! Positional template formatting with culture-aware numbers
//!
//! Templates use composite placeholders `{index[,alignment][:format]}` and
//! escape literal braces as `{{` and `}}`. Numeric conventions (decimal and
//! group separators, minus sign) come from CLDR data via `num-format`.

use crate::culture::{Culture, FALLBACK_CULTURE};
use crate::error::{I18nError, I18nResult};
use num_format::{Locale, ToFormattedString};
use std::fmt;

/// A positional argument for [`format_template`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberStyle {
    General,
    Number,
    Fixed,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSpec {
    style: NumberStyle,
    precision: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Brace(char),
    Placeholder {
        index: usize,
        alignment: Option<i64>,
        spec: NumberSpec,
    },
}

/// Number of positional arguments a template needs (highest index plus one)
pub fn placeholder_count(template: &str) -> I18nResult<usize> {
    Ok(parse_template(template)?
        .iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { index, .. } => Some(index + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0))
}

/// Substitute `args` into `template` using `culture`'s numeric conventions
pub fn format_template(template: &str, culture: &Culture, args: &[FormatArg]) -> I18nResult<String> {
    let segments = parse_template(template)?;

    let required = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { index, .. } => Some(index + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    if required > args.len() {
        return Err(I18nError::FormatMismatch {
            template: template.to_string(),
            required,
            supplied: args.len(),
        });
    }

    let locale = number_locale(culture);
    let mut output = String::with_capacity(template.len() + 8);
    for segment in segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Brace(brace) => output.push(brace),
            Segment::Placeholder {
                index,
                alignment,
                spec,
            } => {
                let rendered = render_arg(&args[index], spec, &locale, template)?;
                push_aligned(&mut output, &rendered, alignment);
            }
        }
    }
    Ok(output)
}

/// CLDR number locale for a culture: specific, then neutral, then English
fn number_locale(culture: &Culture) -> Locale {
    Locale::from_name(culture.name())
        .or_else(|_| Locale::from_name(culture.language()))
        .or_else(|_| Locale::from_name(FALLBACK_CULTURE))
        .unwrap_or(Locale::en)
}

fn malformed(template: &str, reason: impl Into<String>) -> I18nError {
    I18nError::MalformedTemplate {
        template: template.to_string(),
        reason: reason.into(),
    }
}

fn parse_template(template: &str) -> I18nResult<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' | '}' => {
                if literal_start < pos {
                    segments.push(Segment::Literal(&template[literal_start..pos]));
                }

                if chars.peek().map(|(_, next)| *next) == Some(ch) {
                    chars.next();
                    segments.push(Segment::Brace(ch));
                    literal_start = pos + 2;
                    continue;
                }

                if ch == '}' {
                    return Err(malformed(template, format!("unmatched '}}' at byte {pos}")));
                }

                let body_start = pos + 1;
                let close = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some((_, '{')) => {
                            return Err(malformed(template, "nested '{' inside placeholder"))
                        }
                        Some(_) => {}
                        None => {
                            return Err(malformed(template, format!("unclosed '{{' at byte {pos}")))
                        }
                    }
                };

                segments.push(parse_placeholder(&template[body_start..close], template)?);
                literal_start = close + 1;
            }
            _ => {}
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    Ok(segments)
}

fn parse_placeholder<'a>(body: &str, template: &str) -> I18nResult<Segment<'a>> {
    let (head, format) = match body.split_once(':') {
        Some((head, format)) => (head, Some(format)),
        None => (body, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed(template, format!("placeholder index '{}' is not a number", index.trim())))?;

    let alignment = alignment
        .map(|a| {
            a.trim()
                .parse::<i64>()
                .ok()
                .filter(|width| width.unsigned_abs() <= MAX_ALIGNMENT)
                .ok_or_else(|| malformed(template, format!("invalid alignment '{}'", a.trim())))
        })
        .transpose()?;

    let spec = match format {
        Some(format) => parse_number_spec(format, template)?,
        None => NumberSpec {
            style: NumberStyle::General,
            precision: None,
        },
    };

    Ok(Segment::Placeholder {
        index,
        alignment,
        spec,
    })
}

/// Widest padding a placeholder may request
const MAX_ALIGNMENT: u64 = 1000;

fn parse_number_spec(format: &str, template: &str) -> I18nResult<NumberSpec> {
    let mut chars = format.chars();
    let style = match chars.next().map(|c| c.to_ascii_uppercase()) {
        None | Some('G') => NumberStyle::General,
        Some('N') => NumberStyle::Number,
        Some('F') => NumberStyle::Fixed,
        Some('D') => NumberStyle::Decimal,
        Some(other) => {
            return Err(malformed(template, format!("unknown numeric format '{other}'")));
        }
    };

    let digits = chars.as_str();
    let precision = if digits.is_empty() {
        None
    } else {
        Some(
            digits
                .parse::<usize>()
                .ok()
                .filter(|p| *p <= 99)
                .ok_or_else(|| malformed(template, format!("invalid precision '{digits}'")))?,
        )
    };

    Ok(NumberSpec { style, precision })
}

fn render_arg(arg: &FormatArg, spec: NumberSpec, locale: &Locale, template: &str) -> I18nResult<String> {
    let rendered = match arg {
        FormatArg::Text(text) => text.clone(),
        FormatArg::Int(value) => render_integer(*value < 0, value.unsigned_abs(), spec, locale),
        FormatArg::UInt(value) => render_integer(false, *value, spec, locale),
        FormatArg::Float(value) => {
            if spec.style == NumberStyle::Decimal {
                return Err(malformed(template, "'D' format requires an integer argument"));
            }
            render_float(*value, spec, locale)
        }
    };
    Ok(rendered)
}

fn render_integer(negative: bool, magnitude: u64, spec: NumberSpec, locale: &Locale) -> String {
    let body = match spec.style {
        NumberStyle::General => magnitude.to_string(),
        NumberStyle::Decimal => {
            let width = spec.precision.unwrap_or(0);
            format!("{magnitude:0width$}")
        }
        NumberStyle::Number => with_fraction(magnitude.to_formatted_string(locale), spec.precision.unwrap_or(2), locale),
        NumberStyle::Fixed => with_fraction(magnitude.to_string(), spec.precision.unwrap_or(2), locale),
    };

    if negative {
        format!("{}{body}", locale.minus_sign())
    } else {
        body
    }
}

fn with_fraction(integer: String, decimals: usize, locale: &Locale) -> String {
    if decimals == 0 {
        integer
    } else {
        format!("{integer}{}{}", locale.decimal(), "0".repeat(decimals))
    }
}

fn render_float(value: f64, spec: NumberSpec, locale: &Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let body = match spec.style {
        NumberStyle::General | NumberStyle::Decimal => magnitude.to_string().replace('.', locale.decimal()),
        NumberStyle::Fixed => {
            let decimals = spec.precision.unwrap_or(2);
            format!("{magnitude:.decimals$}").replace('.', locale.decimal())
        }
        NumberStyle::Number => {
            let decimals = spec.precision.unwrap_or(2);
            let rounded = format!("{magnitude:.decimals$}");
            let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
            let grouped = integer
                .parse::<u64>()
                .map(|n| n.to_formatted_string(locale))
                .unwrap_or_else(|_| integer.to_string());
            if fraction.is_empty() {
                grouped
            } else {
                format!("{grouped}{}{fraction}", locale.decimal())
            }
        }
    };

    let is_zero = body.chars().all(|c| !c.is_ascii_digit() || c == '0');
    if value.is_sign_negative() && !is_zero {
        format!("{}{body}", locale.minus_sign())
    } else {
        body
    }
}

fn push_aligned(output: &mut String, rendered: &str, alignment: Option<i64>) {
    match alignment {
        Some(width) if width < 0 => {
            let width = width.unsigned_abs() as usize;
            output.push_str(&format!("{rendered:<width$}"));
        }
        Some(width) => {
            let width = width as usize;
            output.push_str(&format!("{rendered:>width$}"));
        }
        None => output.push_str(rendered),
    }
}
