// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports the chart data model and aggregate engine.

pub mod axis;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod highlight;
pub mod labels;
pub mod options;
pub mod series;
pub mod style;

pub use axis::{AxisDependency, AxisRange};
pub use dataset::{Aggregates, Dataset};
pub use entry::{Entry, EntryId};
pub use error::DataError;
pub use highlight::Highlight;
pub use labels::{average_label_length, generate_label_range};
pub use options::{DatasetOptions, LegalityCheck};
pub use series::{Series, SeriesId};
pub use style::{Color, DecimalFormatter, SeriesStyle, ValueFont, ValueFormatter};
