//! Domain types for the force-close flow.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: TimeSec, Address, QuoteId, MarketId, PositionType
//! - Quote and Market snapshots supplied by the trading backend
//! - The user-selected DateRange and contract ForceCooldowns
//! - WalletState as reported by the wallet provider

pub mod cooldowns;
pub mod date_range;
pub mod decimal;
pub mod market;
pub mod primitives;
pub mod quote;
pub mod wallet;

pub use cooldowns::ForceCooldowns;
pub use date_range::{DateRange, DateRangeError};
pub use decimal::Decimal;
pub use market::{Market, MarketBook, MarketBookError};
pub use primitives::{Address, AddressParseError, MarketId, PositionType, QuoteId, TimeSec};
pub use quote::{Quote, QuoteStatus, UnknownQuoteStatus};
pub use wallet::WalletState;
