mod teap;

pub use teap::{Cipher, Error, Key, Result, decipher, encipher};
