#![cfg(feature = "test-vectors")]

// TEA has no officially standardised test vectors; these were pinned from a
// run of the published reference code, with the 8-byte block read and written
// as two big-endian 32-bit words.

use hex_literal::hex;

use teap::{Cipher, Key};

#[test]
fn zero_key_zero_block() -> teap::Result<()> {
    let key = Key::try_from_slice(&hex!("00000000000000000000000000000000"))?;
    let cipher = Cipher::new(&key);

    let ciphertext = cipher.encipher_raw(&hex!("0000000000000000"))?;
    assert_eq!(ciphertext, hex!("dee9d4d8f7131ed9"));

    let plaintext = cipher.decipher_raw(&ciphertext)?;
    assert_eq!(plaintext, hex!("0000000000000000"));
    Ok(())
}

#[test]
fn sequential_key_two_blocks() -> teap::Result<()> {
    let key = Key::try_from_slice(&hex!("000102030405060708090a0b0c0d0e0f"))?;
    let cipher = Cipher::new(&key);

    let plaintext = hex!("000102030405060708090a0b0c0d0e0f");
    let expected = hex!("ffc52d10a010010bb9fa0daa3112688d");

    let ciphertext = cipher.encipher_raw(&plaintext)?;
    assert_eq!(ciphertext, expected);

    let decrypted = cipher.decipher_raw(&ciphertext)?;
    assert_eq!(decrypted, plaintext);
    Ok(())
}

#[test]
fn four_block_buffer() -> teap::Result<()> {
    let key = Key::try_from_slice(&hex!("deadbeefcafebabe0011223344556677"))?;
    let cipher = Cipher::new(&key);

    let plaintext = hex!(
        "000102030405060708090a0b0c0d0e0f"
        "101112131415161718191a1b1c1d1e1f"
    );
    let expected = hex!(
        "a4a0154e200fd525b0a7ddb0e7740d68"
        "4b0010cafacb76be998ca4010d137b0d"
    );

    let ciphertext = cipher.encipher_raw(&plaintext)?;
    assert_eq!(ciphertext, expected);

    let decrypted = cipher.decipher_raw(&ciphertext)?;
    assert_eq!(decrypted, plaintext);
    Ok(())
}

#[test]
fn single_block_byte_api() -> teap::Result<()> {
    let key = Key::try_from_slice(&hex!("000102030405060708090a0b0c0d0e0f"))?;
    let cipher = Cipher::new(&key);

    let block = hex!("0123456789abcdef");
    let ciphertext = cipher.encipher_bytes(&block);
    assert_eq!(ciphertext, hex!("14669763a456e1d8"));
    assert_eq!(cipher.decipher_bytes(&ciphertext), block);
    Ok(())
}
