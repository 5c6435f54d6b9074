use arch::mem::{Memory, MEM_SIZE};

use crate::error::Error;

/// Place an image in memory. Short images are zero-filled.
pub fn load_image(bytes: &[u8]) -> Result<Memory, Error> {
    if bytes.len() > MEM_SIZE {
        return Err(Error::ImageSize(bytes.len()));
    }
    let mut mem = [0; MEM_SIZE];
    mem[..bytes.len()].copy_from_slice(bytes);
    Ok(mem)
}

/// Read the whitespace separated hex text written by `scasm --hex`.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, Error> {
    text.split_whitespace()
        .map(|word| {
            let digits = word
                .strip_prefix("0x")
                .or_else(|| word.strip_prefix("0X"))
                .unwrap_or(word);
            u8::from_str_radix(digits, 16).map_err(|_| Error::HexByte(word.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_short_image() {
        let mem = load_image(&[0x12, 0x00, 0x07]).unwrap();
        assert_eq!(&mem[..3], &[0x12, 0x00, 0x07]);
        assert!(mem[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn reject_long_image() {
        assert!(matches!(load_image(&[0; 17]), Err(Error::ImageSize(17))));
    }

    #[test]
    fn hex_text() {
        assert_eq!(parse_hex("12 00 0x07\nff").unwrap(), vec![0x12, 0x00, 0x07, 0xFF]);
        assert!(matches!(parse_hex("12 zz"), Err(Error::HexByte(_))));
    }
}
