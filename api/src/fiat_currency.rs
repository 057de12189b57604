//! The fiat currencies this application can price coins in.

/// A fiat currency quoted by both the market API and the exchange-rate API.
///
/// The variant name doubles as the ISO 4217 code, which is what both remote
/// services key their responses on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD, // Australian Dollar
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    EUR, // Euro
    GBP, // Great British Pound
    HKD, // Hong Kong Dollar
    INR, // Indian Rupee
    JPY, // Japanese Yen
    KRW, // South Korean Won
    SGD, // Singapore Dollar
    USD, // United States Dollar
    ZAR, // South African Rand
}

impl FiatCurrency {
    /// Returns the number of decimal digits conventionally shown for the
    /// currency. JPY and KRW have no minor unit.
    pub fn decimals(&self) -> usize {
        match self {
            Self::JPY | Self::KRW => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '£').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "$",
            Self::BRL => "R$",
            Self::CAD => "$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::HKD => "$",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::KRW => "₩",
            Self::SGD => "$",
            Self::USD => "$",
            Self::ZAR => "R",
        }
    }

    /// Returns the ISO 4217 code (e.g., "GBP"), as the exchange-rate API
    /// spells its rate keys.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the lowercase code (e.g., "gbp"), as the market API spells
    /// its `vs_currency` parameter and quote keys.
    pub fn vs_code(&self) -> String {
        self.code().to_ascii_lowercase()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::HKD => "Hong Kong Dollar",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::KRW => "South Korean Won",
            Self::SGD => "Singapore Dollar",
            Self::USD => "United States Dollar",
            Self::ZAR => "South African Rand",
        }
    }
}
