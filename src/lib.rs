pub mod candidate;
pub mod error;
pub mod lock;
pub mod operators;
pub mod population;
pub mod rng;
pub mod search;
pub mod source;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{Result, ResultExt, SearchError};
pub use lock::{Lock, Stop};
pub use operators::{crossover, InitOperator, MutationOperator};
pub use population::{GenerationStats, Population};
pub use rng::RandomNumberGenerator;
pub use search::{Optimizer, SearchOptions, SearchResult};
