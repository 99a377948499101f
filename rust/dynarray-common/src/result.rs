use crate::error::{Error, Operation};

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `index` addresses a live element (`index < len`).
#[inline]
pub fn verify_index(op: Operation, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_range(op, index, len)
    }
}

/// Checks that `index` is a valid insertion position (`index <= len`).
#[inline]
pub fn verify_position(op: Operation, index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        index_out_of_range(op, index, len)
    }
}

#[cold]
pub fn index_out_of_range(op: Operation, index: usize, len: usize) -> Result<()> {
    Err(Error::index_out_of_range(op, index, len))
}
