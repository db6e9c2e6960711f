mod number;
mod result;

// Re-export
pub use number::*;
pub use result::*;
