//! Device information collection.

mod aggregator;

pub use aggregator::InfoAggregator;
