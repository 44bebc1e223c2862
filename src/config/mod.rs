//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::CategorySettings;
pub use site::I18nConfig;
pub use site::LengthRule;
pub use site::RelatedConfig;
pub use site::SearchConfig;
pub use site::SeoConfig;
pub use site::ValidationRules;
