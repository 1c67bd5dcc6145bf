pub mod collision;
pub mod limiter;
pub mod loudness;
pub mod particles;
pub mod pose;
pub mod session;
pub mod spawn;
pub mod target;

pub use collision::*;
pub use limiter::*;
pub use loudness::*;
pub use particles::*;
pub use pose::*;
pub use session::*;
pub use spawn::*;
pub use target::*;
