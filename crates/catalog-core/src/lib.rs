pub mod config;
pub mod id;
pub mod lint;
pub mod model;
pub mod sizes;

pub use config::{CatalogConfig, ConfigError, LabelConfig, MarkupConfig};
pub use id::{CardId, SectionId};
pub use lint::{LintDiagnostic, LintSeverity, LintTarget, lint_catalog};
pub use model::*;
pub use sizes::{SizeList, parse_sizes};
