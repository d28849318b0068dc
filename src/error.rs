use thiserror::Error;

/// Things a running program can do that the machine refuses to survive.
///
/// The original CHIP-8 spec leaves these undefined; wrapping silently tends
/// to produce ROM bugs that surface screens later, so every one of them
/// halts the interpreter instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("rom is {size} bytes but program memory holds at most {max}")]
    RomTooLarge { size: usize, max: usize },

    #[error("memory access out of bounds at {addr:#05X}")]
    AddressOutOfBounds { addr: u16 },

    #[error("call stack overflow, depth limit is {limit}")]
    StackOverflow { limit: usize },

    #[error("return with an empty call stack")]
    StackUnderflow,
}
