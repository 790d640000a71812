// Classification: category resolution, the two-stage fuzzy engine, and
// the exact-match company lookup mode.

pub mod category;
pub mod engine;
pub mod exact;
