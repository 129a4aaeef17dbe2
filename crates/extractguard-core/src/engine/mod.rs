mod accumulator;
mod suite;

pub use accumulator::ResultAccumulator;
pub use suite::ValidationSuite;
