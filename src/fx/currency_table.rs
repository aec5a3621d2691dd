//! Static currency reference data.
//!
//! Rates are approximate units-per-USD lookup constants, not live quotes.
//! The converter pivots every conversion through USD against this table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::FALLBACK_CURRENCY;

/// Currency code -> units per USD.
pub const EXCHANGE_RATES: &[(&str, Decimal)] = &[
    ("USD", dec!(1)),
    // South Asia
    ("PKR", dec!(278.5)),
    ("INR", dec!(83.0)),
    ("BDT", dec!(110.0)),
    ("LKR", dec!(325.0)),
    ("NPR", dec!(133.0)),
    ("AFN", dec!(70.0)),
    // Southeast Asia
    ("SGD", dec!(1.35)),
    ("MYR", dec!(4.75)),
    ("THB", dec!(36.0)),
    ("IDR", dec!(15700)),
    ("PHP", dec!(56.0)),
    ("VND", dec!(24500)),
    ("MMK", dec!(2100)),
    ("KHR", dec!(4100)),
    ("LAK", dec!(21000)),
    ("BND", dec!(1.35)),
    // East Asia
    ("CNY", dec!(7.2)),
    ("JPY", dec!(150.0)),
    ("KRW", dec!(1330)),
    ("TWD", dec!(32.0)),
    ("MNT", dec!(3400)),
    ("HKD", dec!(7.8)),
    ("MOP", dec!(8.0)),
    // Middle East
    ("AED", dec!(3.67)),
    ("SAR", dec!(3.75)),
    ("QAR", dec!(3.64)),
    ("KWD", dec!(0.31)),
    ("BHD", dec!(0.38)),
    ("OMR", dec!(0.38)),
    ("JOD", dec!(0.71)),
    ("LBP", dec!(15000)),
    ("IQD", dec!(1310)),
    ("IRR", dec!(42000)),
    ("ILS", dec!(3.7)),
    ("TRY", dec!(32.0)),
    // Central Asia
    ("KZT", dec!(450)),
    ("UZS", dec!(12300)),
    ("KGS", dec!(89.0)),
    // Europe
    ("EUR", dec!(0.92)),
    ("GBP", dec!(0.79)),
    ("CHF", dec!(0.88)),
    ("SEK", dec!(10.5)),
    ("NOK", dec!(10.8)),
    ("DKK", dec!(6.85)),
    ("PLN", dec!(4.0)),
    ("CZK", dec!(23.0)),
    ("RON", dec!(4.6)),
    ("HUF", dec!(360)),
    ("BGN", dec!(1.8)),
    // North America
    ("CAD", dec!(1.35)),
    ("MXN", dec!(17.0)),
    // Oceania
    ("AUD", dec!(1.52)),
    ("NZD", dec!(1.65)),
    ("FJD", dec!(2.25)),
    // South America
    ("BRL", dec!(4.95)),
    ("ARS", dec!(850)),
    ("CLP", dec!(950)),
    ("COP", dec!(3900)),
    ("PEN", dec!(3.7)),
    ("VES", dec!(36.0)),
    // Africa
    ("ZAR", dec!(18.5)),
    ("EGP", dec!(31.0)),
    ("NGN", dec!(1600)),
    ("KES", dec!(130)),
    ("GHS", dec!(12.0)),
    ("MAD", dec!(10.0)),
    ("TND", dec!(3.1)),
    ("DZD", dec!(135)),
    ("ETB", dec!(56.0)),
    ("TZS", dec!(2500)),
];

/// Sorted list of all known currency codes.
pub fn list_currencies() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EXCHANGE_RATES.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes
}

/// Display name for a currency code, defaulting to the code itself.
pub fn currency_name(code: &str) -> &str {
    match code {
        // North America
        "USD" => "US Dollar",
        "CAD" => "Canadian Dollar",
        "MXN" => "Mexican Peso",
        // South Asia
        "PKR" => "Pakistani Rupee",
        "INR" => "Indian Rupee",
        "BDT" => "Bangladeshi Taka",
        "LKR" => "Sri Lankan Rupee",
        "NPR" => "Nepalese Rupee",
        "AFN" => "Afghan Afghani",
        // Southeast Asia
        "SGD" => "Singapore Dollar",
        "MYR" => "Malaysian Ringgit",
        "THB" => "Thai Baht",
        "IDR" => "Indonesian Rupiah",
        "PHP" => "Philippine Peso",
        "VND" => "Vietnamese Dong",
        "MMK" => "Myanmar Kyat",
        "KHR" => "Cambodian Riel",
        "LAK" => "Lao Kip",
        "BND" => "Brunei Dollar",
        // East Asia
        "CNY" => "Chinese Yuan",
        "JPY" => "Japanese Yen",
        "KRW" => "South Korean Won",
        "TWD" => "Taiwan Dollar",
        "MNT" => "Mongolian Tugrik",
        "HKD" => "Hong Kong Dollar",
        "MOP" => "Macanese Pataca",
        // Middle East
        "AED" => "UAE Dirham",
        "SAR" => "Saudi Riyal",
        "QAR" => "Qatari Riyal",
        "KWD" => "Kuwaiti Dinar",
        "BHD" => "Bahraini Dinar",
        "OMR" => "Omani Rial",
        "JOD" => "Jordanian Dinar",
        "LBP" => "Lebanese Pound",
        "IQD" => "Iraqi Dinar",
        "IRR" => "Iranian Rial",
        "ILS" => "Israeli Shekel",
        "TRY" => "Turkish Lira",
        // Central Asia
        "KZT" => "Kazakhstani Tenge",
        "UZS" => "Uzbekistani Som",
        "KGS" => "Kyrgyzstani Som",
        // Europe
        "EUR" => "Euro",
        "GBP" => "British Pound",
        "CHF" => "Swiss Franc",
        "SEK" => "Swedish Krona",
        "NOK" => "Norwegian Krone",
        "DKK" => "Danish Krone",
        "PLN" => "Polish Zloty",
        "CZK" => "Czech Koruna",
        "RON" => "Romanian Leu",
        "HUF" => "Hungarian Forint",
        "BGN" => "Bulgarian Lev",
        // Oceania
        "AUD" => "Australian Dollar",
        "NZD" => "New Zealand Dollar",
        "FJD" => "Fijian Dollar",
        // South America
        "BRL" => "Brazilian Real",
        "ARS" => "Argentine Peso",
        "CLP" => "Chilean Peso",
        "COP" => "Colombian Peso",
        "PEN" => "Peruvian Sol",
        "VES" => "Venezuelan Bolivar",
        // Africa
        "ZAR" => "South African Rand",
        "EGP" => "Egyptian Pound",
        "NGN" => "Nigerian Naira",
        "KES" => "Kenyan Shilling",
        "GHS" => "Ghanaian Cedi",
        "MAD" => "Moroccan Dirham",
        "TND" => "Tunisian Dinar",
        "DZD" => "Algerian Dinar",
        "ETB" => "Ethiopian Birr",
        "TZS" => "Tanzanian Shilling",
        other => other,
    }
}

/// Currency a bank/card in the given country is assumed to operate in.
/// Used when a record carries a country but no explicit currency.
pub fn currency_for_country(country: &str) -> Option<&'static str> {
    let code = match country {
        // North America
        "United States" => "USD",
        "Canada" => "CAD",
        "Mexico" => "MXN",
        // Europe
        "United Kingdom" => "GBP",
        "Germany" | "France" | "Italy" | "Spain" | "Netherlands" | "Belgium" | "Austria"
        | "Finland" | "Portugal" | "Greece" | "Ireland" | "Croatia" | "Slovakia" | "Slovenia" => {
            "EUR"
        }
        "Switzerland" => "CHF",
        "Sweden" => "SEK",
        "Norway" => "NOK",
        "Denmark" => "DKK",
        "Poland" => "PLN",
        "Czech Republic" => "CZK",
        "Romania" => "RON",
        "Hungary" => "HUF",
        "Bulgaria" => "BGN",
        // South Asia
        "Pakistan" => "PKR",
        "India" => "INR",
        "Bangladesh" => "BDT",
        "Sri Lanka" => "LKR",
        "Nepal" => "NPR",
        "Afghanistan" => "AFN",
        // East Asia
        "China" => "CNY",
        "Japan" => "JPY",
        "South Korea" => "KRW",
        "Taiwan" => "TWD",
        "Mongolia" => "MNT",
        "Hong Kong" => "HKD",
        "Macau" => "MOP",
        // Southeast Asia
        "Singapore" => "SGD",
        "Malaysia" => "MYR",
        "Thailand" => "THB",
        "Indonesia" => "IDR",
        "Philippines" => "PHP",
        "Vietnam" => "VND",
        "Myanmar" => "MMK",
        "Cambodia" => "KHR",
        "Laos" => "LAK",
        "Brunei" => "BND",
        // Middle East
        "United Arab Emirates" => "AED",
        "Saudi Arabia" => "SAR",
        "Qatar" => "QAR",
        "Kuwait" => "KWD",
        "Bahrain" => "BHD",
        "Oman" => "OMR",
        "Jordan" => "JOD",
        "Lebanon" => "LBP",
        "Iraq" => "IQD",
        "Iran" => "IRR",
        "Israel" => "ILS",
        "Turkey" => "TRY",
        // Central Asia
        "Kazakhstan" => "KZT",
        "Uzbekistan" => "UZS",
        "Kyrgyzstan" => "KGS",
        // Oceania
        "Australia" => "AUD",
        "New Zealand" => "NZD",
        "Fiji" => "FJD",
        // South America
        "Brazil" => "BRL",
        "Argentina" => "ARS",
        "Chile" => "CLP",
        "Colombia" => "COP",
        "Peru" => "PEN",
        "Venezuela" => "VES",
        // Africa
        "South Africa" => "ZAR",
        "Egypt" => "EGP",
        "Nigeria" => "NGN",
        "Kenya" => "KES",
        "Ghana" => "GHS",
        "Morocco" => "MAD",
        "Tunisia" => "TND",
        "Algeria" => "DZD",
        "Ethiopia" => "ETB",
        "Tanzania" => "TZS",
        _ => return None,
    };
    Some(code)
}

/// Resolves a record's native currency.
///
/// Resolution order: explicit record currency, then the linked parent
/// entity's country, then the given fallback (the user's home currency
/// where one is in scope, `USD` otherwise).
pub fn resolve_currency(
    explicit: Option<&str>,
    parent_country: Option<&str>,
    fallback: &str,
) -> String {
    if let Some(code) = explicit {
        if !code.is_empty() {
            return code.to_string();
        }
    }
    if let Some(country) = parent_country {
        if let Some(code) = currency_for_country(country) {
            return code.to_string();
        }
    }
    if fallback.is_empty() {
        FALLBACK_CURRENCY.to_string()
    } else {
        fallback.to_string()
    }
}
