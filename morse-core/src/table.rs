//! Morse-Tabelle: A-Z und 0-9
//!
//! Feste Zuordnung Code-String → Zeichen. Nur Großbuchstaben.

/// Alle Einträge der Tabelle (Code, Zeichen)
pub const MORSE_TABLE: [(&str, char); 36] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
    ("-----", '0'),
];

/// Löst einen Code-String zu einem Zeichen auf (exakter Match)
///
/// # Beispiele
///
/// ```
/// # use morse_core::decode;
/// assert_eq!(decode("..."), Some('S'));
/// assert_eq!(decode("......"), None);
/// ```
pub fn decode(code: &str) -> Option<char> {
    let c = match code {
        ".-" => 'A',
        "-..." => 'B',
        "-.-." => 'C',
        "-.." => 'D',
        "." => 'E',
        "..-." => 'F',
        "--." => 'G',
        "...." => 'H',
        ".." => 'I',
        ".---" => 'J',
        "-.-" => 'K',
        ".-.." => 'L',
        "--" => 'M',
        "-." => 'N',
        "---" => 'O',
        ".--." => 'P',
        "--.-" => 'Q',
        ".-." => 'R',
        "..." => 'S',
        "-" => 'T',
        "..-" => 'U',
        "...-" => 'V',
        ".--" => 'W',
        "-..-" => 'X',
        "-.--" => 'Y',
        "--.." => 'Z',
        ".----" => '1',
        "..---" => '2',
        "...--" => '3',
        "....-" => '4',
        "....." => '5',
        "-...." => '6',
        "--..." => '7',
        "---.." => '8',
        "----." => '9',
        "-----" => '0',
        _ => return None,
    };
    Some(c)
}

/// Umkehrung von [`decode`]: Zeichen → Code-String
///
/// Kleinbuchstaben werden wie Großbuchstaben behandelt.
pub fn encode(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(_, letter)| *letter == upper)
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_matches_table() {
        for (code, letter) in MORSE_TABLE {
            assert_eq!(decode(code), Some(letter), "code {}", code);
        }
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("......"), None);
        assert_eq!(decode(".-.-.-"), None);
        assert_eq!(decode("abc"), None);
    }

    #[test]
    fn test_five_dots_is_five() {
        assert_eq!(decode("....."), Some('5'));
    }

    #[test]
    fn test_encode_case_insensitive() {
        assert_eq!(encode('q'), Some("--.-"));
        assert_eq!(encode('Q'), Some("--.-"));
        assert_eq!(encode('0'), Some("-----"));
        assert_eq!(encode('?'), None);
    }

    #[test]
    fn test_table_codes_are_unique() {
        for (i, (a, _)) in MORSE_TABLE.iter().enumerate() {
            for (b, _) in &MORSE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
