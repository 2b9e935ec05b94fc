pub mod api;
pub mod chains;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use chains::{ChainInfo, SupportedChainId};
pub use config::Config;
pub use datasource::{
    CloseSubmitter, DataSourceError, DelegationReader, QuoteDataSource, SubmitError,
};
pub use domain::{
    Address, DateRange, Decimal, ForceCooldowns, Market, MarketBook, MarketId, PositionType, Quote,
    QuoteId, QuoteStatus, TimeSec, WalletState,
};
pub use engine::{BlockReason, ButtonState, FillBreakdown, ModalView, Verdict};
pub use error::AppError;
pub use orchestration::{ForceCloseSession, SubmitOutcome};
