use crate::error::UtilsError;

/// Encode text as UTF-8 bytes
pub fn text_encode(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decode UTF-8 bytes, replacing malformed sequences with U+FFFD
///
/// # Examples
/// ```
/// use edgekit::utils::text::{text_decode, text_encode};
/// assert_eq!(text_decode(&text_encode("héllo")), "héllo");
/// assert_eq!(text_decode(&[0x61, 0xff, 0x62]), "a\u{FFFD}b");
/// ```
pub fn text_decode(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

/// Decode UTF-8 bytes, failing on the first malformed sequence
pub fn text_decode_strict(value: &[u8]) -> crate::Result<String> {
    std::str::from_utf8(value)
        .map(str::to_owned)
        .map_err(|err| {
            UtilsError::Decode {
                valid_up_to: err.valid_up_to(),
            }
            .into()
        })
}

/// Lowercase hex rendering of a byte sequence
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse hex digits back into bytes; whitespace between digits is ignored
pub fn from_hex(value: &str) -> crate::Result<Vec<u8>> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits).map_err(|err| {
        UtilsError::Hex {
            message: err.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_text_encode() {
        assert_eq!(text_encode(""), Vec::<u8>::new());
        assert_eq!(text_encode("abc"), vec![0x61, 0x62, 0x63]);
        assert_eq!(text_encode("€"), vec![0xe2, 0x82, 0xac]);
    }

    #[test]
    fn test_text_decode_round_trip_keeps_bom() {
        let text = "\u{FEFF}bom and 𝄞";
        assert_eq!(text_decode(&text_encode(text)), text);
    }

    #[test]
    fn test_text_decode_replaces_malformed_sequences() {
        assert_eq!(text_decode(&[0xe2, 0x82]), "\u{FFFD}");
        assert_eq!(text_decode(&[0x61, 0xc0, 0x62]), "a\u{FFFD}b");
    }

    #[test]
    fn test_text_decode_strict() {
        assert_eq!(
            text_decode_strict("ok".as_bytes()).expect("valid UTF-8"),
            "ok"
        );

        match text_decode_strict(&[0x61, 0x62, 0xff]) {
            Err(AppError::Utils(UtilsError::Decode { valid_up_to })) => {
                assert_eq!(valid_up_to, 2)
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_helpers() {
        assert_eq!(to_hex(&text_encode("hi")), "6869");
        assert_eq!(from_hex("68 69").expect("valid hex"), b"hi".to_vec());
        assert_eq!(from_hex("").expect("empty hex"), Vec::<u8>::new());
        assert!(matches!(
            from_hex("6"),
            Err(AppError::Utils(UtilsError::Hex { .. }))
        ));
        assert!(from_hex("zz").is_err());
    }
}
