pub use constants::{CLOCK_SPEED, TIMER_HZ};
pub use error::{Chip8Error, LoadError};
pub use interpreter::{Interpreter, StepResult};
pub use keypad::{Keypad, Keys};
pub use state::FrameBuffer;

pub mod constants;
mod error;
mod instruction;
mod interpreter;
mod keypad;
mod opcode;
mod operations;
pub mod state;
