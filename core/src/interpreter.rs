use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::error::{Chip8Error, LoadError};
use crate::instruction::{from_op, Context, ProgramCounter};
use crate::keypad::Keypad;
use crate::state::{FrameBuffer, State};

/// Outcome of a single cycle; any error is fatal to the run
pub type StepResult = Result<(), Chip8Error>;

/// # Chip-8 Interpreter
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` and the random number generator used by `CXNN`. The generator is
/// seeded once, so two interpreters built with the same seed and fed the same input behave
/// identically.
///
/// Supplies interfaces for:
/// - loading programs
/// - advancing the CPU one instruction at a time
/// - reading and decrementing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Pacing, rendering and input all belong to the host, which passes its keypad into `step`.
pub struct Interpreter {
    state: State,
    rng: StdRng,
}

impl Interpreter {
    pub fn new(seed: u64) -> Self {
        Interpreter {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Copy a program verbatim into memory starting at `origin`
    ///
    /// # Arguments
    /// * `bytes` the raw program; there is no header
    /// * `origin` the address of the first byte
    pub fn load(&mut self, bytes: &[u8], origin: u16) -> Result<(), Chip8Error> {
        let start = origin as usize;
        if start + bytes.len() > MEMORY_SIZE {
            return Err(Chip8Error::ProgramTooLarge {
                size: bytes.len(),
                origin,
                capacity: MEMORY_SIZE,
            });
        }
        self.state.memory[start..start + bytes.len()].copy_from_slice(bytes);
        debug!("loaded {} byte program at {:#06X}", bytes.len(), origin);
        Ok(())
    }

    /// Load a program at the conventional start address
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), Chip8Error> {
        self.load(bytes, PROGRAM_START)
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn std::io::Read) -> Result<(), LoadError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_program(&rom)?;
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - resets the pc to the program start if it has run off the end of memory
    /// - gets, decodes and executes the opcode at the pc
    /// - moves the pc as directed by the instruction
    ///
    /// On error the pc is left pointing at the failing instruction.
    pub fn step(&mut self, keypad: &dyn Keypad) -> StepResult {
        if self.state.pc as usize + 1 >= MEMORY_SIZE {
            warn!(
                "pc {:#06X} ran past the end of memory, resetting to {:#06X}",
                self.state.pc, PROGRAM_START
            );
            self.state.pc = PROGRAM_START;
        }

        let op = self.get_op();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let mut ctx = Context {
            rng: &mut self.rng,
            keypad,
        };
        let next = from_op(&op)(&op, &mut self.state, &mut ctx)?;

        let pc = self.state.pc;
        self.state.pc = match next {
            ProgramCounter::Next => pc.wrapping_add(0x2),
            ProgramCounter::Skip => pc.wrapping_add(0x4),
            ProgramCounter::Jump(addr) => addr,
            ProgramCounter::Wait => pc,
        };
        Ok(())
    }

    /// Decrements both timers towards zero; the host calls this at 60Hz
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.state.delay_timer = value;
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.state.sound_timer = value;
    }

    /// The current contents of the display
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if std::mem::replace(&mut self.state.draw_flag, false) {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let left = u16::from(self.state.memory[self.state.pc as usize]);
        let right = u16::from(self.state.memory[self.state.pc as usize + 1]);
        left << 8 | right
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(0)
    }
}
