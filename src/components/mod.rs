pub mod chart;
pub mod status;

pub use chart::Chart;
pub use status::Status;
