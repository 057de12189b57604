//! Number formatting for the converted values the screens display.

/// Formats a monetary value with comma thousands grouping and exactly
/// `decimals` fractional digits, e.g. `1234567.891` at 2 is "1,234,567.89".
pub fn format_money(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a percentage change to two decimals with the sign kept, so a
/// loss reads "-2.31%" and a gain "1.85%".
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Presentation tone of a signed change. Zero counts as a gain, matching
/// how the table has always colored a flat day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum PercentTone {
    Gain,
    Loss,
}

impl PercentTone {
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Loss
        } else {
            Self::Gain
        }
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            Self::Gain => "var(--gain-color)",
            Self::Loss => "var(--loss-color)",
        }
    }
}
