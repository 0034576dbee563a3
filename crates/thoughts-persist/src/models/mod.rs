mod thought;

pub use thought::{Thought, ValidationError, MESSAGE_MAX_LEN, MESSAGE_MIN_LEN};
