pub(crate) mod helpers;
pub mod natural;
