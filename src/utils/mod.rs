pub mod clock;
pub mod error;
pub mod mask;
pub mod normalize;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ValidatorError;
pub use mask::mask;
pub use normalize::normalize;
