pub mod countdown;
pub mod enums;
pub mod task;

pub use countdown::{Countdown, Settings};
pub use enums::{Mode, UiMode};
pub use task::{Task, TaskList};
