mod loader;
mod model;
mod rule;

pub use loader::{FileSystem, FileTemplateLoader, RealFileSystem, TemplateFormat, TemplateLoader};
pub use model::{
    ColumnDefinition, DEFAULT_BOOLEAN_TOKENS, DEFAULT_DATE_FORMAT, DataType, TEMPLATE_VERSION,
    TemplateDefinition, TemplateSettings,
};
pub use rule::{ColumnRule, PatternRule, Template};
