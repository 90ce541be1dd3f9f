pub mod assignment;
pub mod capacity;
pub mod house;
pub mod member;
pub mod preferences;
pub mod task;
pub mod week;

pub use assignment::*;
pub use capacity::*;
pub use house::*;
pub use member::*;
pub use preferences::*;
pub use task::*;
pub use week::*;
