mod ownable;
mod pausable;
mod storage;
pub(crate) mod upgradable;

pub use ownable::*;
pub use pausable::*;
pub use upgradable::*;
