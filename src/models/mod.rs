pub mod error;
pub mod gdp;
pub mod layout;
pub mod scale;
pub mod tooltip;
