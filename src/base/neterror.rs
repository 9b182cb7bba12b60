use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum NetError {
    // Argument Errors
    #[error("Required cookie argument was absent")]
    NullInput,
    #[error("Cookie index out of range")]
    IndexOutOfRange,

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            // Chromium's ERR_INVALID_ARGUMENT
            NetError::NullInput => -4,
            // Custom errors live in the -10000 range, clear of net_error_list.h
            NetError::IndexOutOfRange => -10001,
            NetError::Unknown(code) => *code,
        }
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -4 => NetError::NullInput,
            -10001 => NetError::IndexOutOfRange,
            _ => NetError::Unknown(code),
        }
    }
}
