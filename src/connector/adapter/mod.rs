mod mock_scoring;
mod ort_scoring;

pub use mock_scoring::*;
pub use ort_scoring::*;
