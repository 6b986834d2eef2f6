//! Recommender crate for the linked-data recommendation engine.
//!
//! This crate holds the neighbour-based predictor and the orchestrator that
//! wires the property store, the similarity engine, the predictor, and the
//! explanation engine into one recommendation call.

pub mod config;
pub mod orchestrator;
pub mod predictor;
pub mod profile;

pub use config::{ConfigError, EngineConfig};
pub use orchestrator::{MovieRecommendation, RecommendationEngine};
pub use predictor::{Prediction, Predictor, PredictorError, top_n};
pub use profile::Profile;
