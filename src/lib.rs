pub mod frequency;
pub mod meter;
pub mod statistics;
pub mod stopping;

pub use meter::AverageMeter;
pub use statistics::StreamingStats;
pub use stopping::{EarlyStopping, Mode};
