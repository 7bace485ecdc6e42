mod cipher;
mod core;
mod error;
mod key;
mod raw;
mod util;

pub use error::{Error, Result};
pub use key::Key;
pub use cipher::Cipher;
pub use core::{decipher, encipher};
