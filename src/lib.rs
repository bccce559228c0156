pub mod numerics;

pub use numerics::types::error::MatrixError;
pub use numerics::types::matrix::Matrix;
pub use numerics::types::traits::Numeric;
