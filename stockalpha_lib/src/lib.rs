//! Core metrics library for the stockalpha service: date-range
//! classification, daily-return projection, benchmark alpha merge, and the
//! request pipelines that tie them to the Apperate price client.

pub mod alpha;
pub mod daterange;
pub mod envelope;
pub mod error;
pub mod returns;
pub mod service;

pub use apperate_api;
pub use apperate_api::types::PriceRecord;

pub use alpha::{merge_alpha, AlphaEntry};
pub use daterange::{classify, BoundedRange, DateRange};
pub use envelope::Envelope;
pub use error::MetricsError;
pub use returns::{add_returns, round2, DailyReturn};
pub use service::ProviderFactory;
