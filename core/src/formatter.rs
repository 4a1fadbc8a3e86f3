use ftl_common::error::EncodeError;
use ftl_common::weights::WIDTH;

/// Digits per group in the formatted output.
const GROUP: usize = 3;

/// Width of a direction code.
pub const CODE_WIDTH: usize = 2;

/// Lays out a ROM word as `xxx xxx xxx xxx xxx dd xxx xxx xxx xxx xxx`.
///
/// Both halves must be exactly 15 binary digits and the code exactly 2.
pub fn format_grouped(blue: &str, code: &str, red: &str) -> Result<String, EncodeError> {
    check_binary("blue binary", blue, WIDTH)?;
    check_binary("direction code", code, CODE_WIDTH)?;
    check_binary("red binary", red, WIDTH)?;

    Ok(format!("{} {} {}", group(blue), code, group(red)))
}

fn group(bits: &str) -> String {
    bits.as_bytes()
        .chunks(GROUP)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<String>>()
        .join(" ")
}

fn check_binary(field: &'static str, bits: &str, expected: usize) -> Result<(), EncodeError> {
    let is_binary = bits.bytes().all(|b| b == b'0' || b == b'1');
    if bits.len() != expected || !is_binary {
        return Err(EncodeError::Malformed {
            field,
            expected,
            found: bits.to_string(),
        });
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zeros_and_ones() {
        assert_eq!(
            format_grouped("000000000000000", "00", "111111111111111").unwrap(),
            "000 000 000 000 000 00 111 111 111 111 111"
        );
    }

    #[test]
    fn test_format_keeps_digit_order() {
        let formatted = format_grouped("100010111000000", "11", "000001110101101").unwrap();
        assert_eq!(formatted, "100 010 111 000 000 11 000 001 110 101 101");
        assert_eq!(formatted.len(), 34);
        assert_eq!(formatted.replace(' ', ""), "10001011100000011000001110101101");
    }

    #[test]
    fn test_format_rejects_wrong_length() {
        assert_eq!(
            format_grouped("0000", "00", "111111111111111"),
            Err(EncodeError::Malformed {
                field: "blue binary",
                expected: 15,
                found: "0000".to_string(),
            })
        );
        assert!(format_grouped("000000000000000", "000", "111111111111111").is_err());
        assert!(format_grouped("000000000000000", "00", "1111111111111111").is_err());
    }

    #[test]
    fn test_format_rejects_non_binary() {
        let result = format_grouped("000000000000000", "0x", "111111111111111");
        assert!(matches!(
            result,
            Err(EncodeError::Malformed { field: "direction code", .. })
        ));
        assert!(format_grouped("00000000000000é", "00", "111111111111111").is_err());
    }
}
