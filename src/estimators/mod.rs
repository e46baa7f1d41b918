pub mod approaches;
pub mod entropy;
pub mod hurst;
pub mod mutual_information;
pub mod traits;
pub mod utils;

pub use traits::{GlobalValue, MutualInformationEstimator};
