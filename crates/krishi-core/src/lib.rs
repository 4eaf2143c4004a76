//! `krishi-core` — domain logic for the Krishi decision-support service.
//!
//! This crate holds the pure, I/O-free parts of the system:
//!
//! | Concern | Module |
//! |---------|--------|
//! | Geographic identifier normalization | [`geo`] |
//! | Top-K probabilistic ranking | [`rank`] |
//! | Classifier feature assembly | [`features`] |
//! | Crop-season enumeration | [`season`] |
//!
//! Everything here is deterministic and side-effect free; all fallibility
//! that involves the network or a datastore lives in the gateway's adapter
//! layer. The only errors this crate produces are caller-input errors
//! ([`CoreError::IncompleteFeatures`], [`CoreError::InvalidSeason`]).

pub mod error;
pub mod features;
pub mod geo;
pub mod rank;
pub mod season;

pub use error::{CoreError, CoreResult};
pub use features::FeatureVector;
pub use geo::{GeoIdentifier, normalize};
pub use rank::{CropScore, LabelSet, RankedRecommendation, rank_top_k};
pub use season::Season;
