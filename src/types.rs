//! Common types used throughout the crate
//!
//! Enumerations shared by several resources live here; resource-specific
//! enumerations sit next to the resource that uses them.

// ============================================================================
// Type Aliases
// ============================================================================

/// Amount in the minor unit of its currency (cents for USD)
pub type Amount = i64;

/// Timestamp in UTC, ISO 8601 on the wire
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date, `YYYY-MM-DD` on the wire
pub type Date = chrono::NaiveDate;

// ============================================================================
// Currency
// ============================================================================

open_enum! {
    /// ISO 4217 currency code
    pub enum Currency {
        /// Canadian Dollar (CAD)
        Cad = "CAD",
        /// Swiss Franc (CHF)
        Chf = "CHF",
        /// Euro (EUR)
        Eur = "EUR",
        /// British Pound (GBP)
        Gbp = "GBP",
        /// Japanese Yen (JPY)
        Jpy = "JPY",
        /// US Dollar (USD)
        Usd = "USD",
    }
}

// ============================================================================
// Route Type
// ============================================================================

open_enum! {
    /// Kind of route a transaction was made on
    pub enum RouteType {
        /// An Account Number
        AccountNumber = "account_number",
        /// A Card
        Card = "card",
        /// A Lockbox
        Lockbox = "lockbox",
    }
}
