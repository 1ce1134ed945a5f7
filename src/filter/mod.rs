//! In-memory record filtering shared by every list view.
//!
//! A view declares its filters once as a [`FilterSet`]. The user's current
//! choices live in a [`FilterCriteria`] snapshot, and each render runs
//! [`apply_filters`] and [`summarize`] over the freshly loaded records.
//! Everything here is synchronous and pure.

pub mod criteria;
pub mod error;
pub mod evaluator;
pub mod matchers;
pub mod summary;
pub mod value;
pub mod vocabulary;

pub use criteria::{ChoiceOptions, Criterion, FilterCriteria, FilterDef, FilterKind, FilterSet};
pub use error::FilterError;
pub use evaluator::{apply_filters, record_matches, FilterContext};
pub use matchers::DateStatus;
pub use summary::{summarize, ActiveFilter, FilterSummary};
pub use value::{FieldValue, Record};
pub use vocabulary::choice_options;
