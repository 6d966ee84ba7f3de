use thiserror::Error;

/// Faults that stop the interpreter.
///
/// None of these are retried; the host decides whether to halt or restart.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("stack underflow: returned from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("stack overflow: call depth exceeded {depth}")]
    StackOverflow { depth: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBoundsMemoryAccess { address: usize },

    #[error("program of {size} bytes loaded at {origin:#06X} does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        size: usize,
        origin: u16,
        capacity: usize,
    },
}

/// Failure to read a ROM from some source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Program(#[from] Chip8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_formats_address_as_hex() {
        let err = Chip8Error::OutOfBoundsMemoryAccess { address: 0x1000 };
        assert_eq!(
            err.to_string(),
            "memory access out of bounds at address 0x1000"
        );
    }

    #[test]
    fn test_load_error_wraps_program_errors() {
        let err: LoadError = Chip8Error::StackUnderflow.into();
        assert!(matches!(err, LoadError::Program(Chip8Error::StackUnderflow)));
    }
}
