pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::Interpolator;

pub mod neville;
pub mod newton_forward;
pub mod hermite;
pub mod spline;

pub use neville::{neville, neville_table};
pub use newton_forward::{newton_forward_coefficients, newton_forward_eval, newton_forward_table};
pub use hermite::{hermite_table, HermiteTable};
pub use spline::natural::{spline_system, SplineSystem};
