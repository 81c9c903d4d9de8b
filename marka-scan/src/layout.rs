//! Keyboard layout normalization
//!
//! A barcode scanner emits Latin-layout keystrokes. When the host OS
//! layout is Cyrillic, the buffer arrives transposed; this remaps it
//! character by character through the fixed ЙЦУКЕН→QWERTY correspondence.
//! Characters absent from the table pass through unchanged. The mapping is
//! one-directional: an all-Latin buffer is left as-is.

/// Fixed Cyrillic→Latin substitution table: the 33 letters of the Russian
/// alphabet in both cases, including the slots that land on Latin
/// punctuation.
const LAYOUT_TABLE: [(char, char); 66] = [
    ('й', 'q'),
    ('ц', 'w'),
    ('у', 'e'),
    ('к', 'r'),
    ('е', 't'),
    ('н', 'y'),
    ('г', 'u'),
    ('ш', 'i'),
    ('щ', 'o'),
    ('з', 'p'),
    ('х', '['),
    ('ъ', ']'),
    ('ф', 'a'),
    ('ы', 's'),
    ('в', 'd'),
    ('а', 'f'),
    ('п', 'g'),
    ('р', 'h'),
    ('о', 'j'),
    ('л', 'k'),
    ('д', 'l'),
    ('ж', ';'),
    ('э', '\''),
    ('я', 'z'),
    ('ч', 'x'),
    ('с', 'c'),
    ('м', 'v'),
    ('и', 'b'),
    ('т', 'n'),
    ('ь', 'm'),
    ('б', ','),
    ('ю', '.'),
    ('ё', '`'),
    ('Й', 'Q'),
    ('Ц', 'W'),
    ('У', 'E'),
    ('К', 'R'),
    ('Е', 'T'),
    ('Н', 'Y'),
    ('Г', 'U'),
    ('Ш', 'I'),
    ('Щ', 'O'),
    ('З', 'P'),
    ('Х', '{'),
    ('Ъ', '}'),
    ('Ф', 'A'),
    ('Ы', 'S'),
    ('В', 'D'),
    ('А', 'F'),
    ('П', 'G'),
    ('Р', 'H'),
    ('О', 'J'),
    ('Л', 'K'),
    ('Д', 'L'),
    ('Ж', ':'),
    ('Э', '"'),
    ('Я', 'Z'),
    ('Ч', 'X'),
    ('С', 'C'),
    ('М', 'V'),
    ('И', 'B'),
    ('Т', 'N'),
    ('Ь', 'M'),
    ('Б', '<'),
    ('Ю', '>'),
    ('Ё', '~'),
];

/// Remap a raw keystroke buffer typed under a Cyrillic layout to the
/// Latin-layout characters the scanner intended.
pub fn remap(raw: &str) -> String {
    raw.chars().map(remap_char).collect()
}

fn remap_char(c: char) -> char {
    LAYOUT_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}
