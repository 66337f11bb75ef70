mod codec;
mod store;

pub use codec::{compress, expand, StepSolution};
pub use store::SolutionStore;
