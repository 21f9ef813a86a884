pub mod game;
pub mod scene;
pub mod session;
pub mod timer;
pub mod touch;

pub use game::GameState;
pub use scene::Scene;
pub use session::DragSession;
pub use timer::{PendingGameOver, TimerEvent};
pub use touch::{InputQueue, PrimaryTouch, TouchPhase, TouchSample, POINTER_ID};
