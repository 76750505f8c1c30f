//! genocode-stats - Statistical helpers for genotype/phenotype visualization
//!
//! Direct-to-consumer genetic reports summarize a phenotype (e.g. BMI) per
//! genotype as a mean with a standard error, a confidence interval, or a
//! standard deviation. This crate turns those summaries into plottable data:
//!
//! - **convert**: standard error / confidence interval → standard deviation,
//!   plus coercion of loosely typed inputs
//! - **spec**: per-dataset description and its resolution to a normal
//! - **synth**: random normal samples for one or many datasets
//! - **histogram**: shared bin edges, histogram counts, density curves
//! - **overlap**: overlap report between datasets
//! - **summary**: violin-plot summaries
//!
//! Every function is a pure transform of its inputs; randomness comes from
//! a caller-supplied [`rand::Rng`].

pub mod convert;
pub mod error;
pub mod histogram;
pub mod normal;
pub mod overlap;
pub mod spec;
pub mod summary;
pub mod synth;

pub use convert::*;
pub use error::{Result, StatsError};
pub use histogram::*;
pub use normal::*;
pub use overlap::*;
pub use spec::*;
pub use summary::*;
pub use synth::*;
