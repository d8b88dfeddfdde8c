use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Code points that end a sentence across scripts (Unicode `Sentence_Terminal`).
pub const SENTENCE_TERMINATORS: &[char] = &[
    '!', '.', '?',
    '\u{0589}', '\u{061E}', '\u{061F}', '\u{06D4}',
    '\u{0700}', '\u{0701}', '\u{0702}', '\u{07F9}',
    '\u{0837}', '\u{0839}', '\u{083D}', '\u{083E}',
    '\u{0964}', '\u{0965}',
    '\u{104A}', '\u{104B}',
    '\u{1362}', '\u{1367}', '\u{1368}',
    '\u{166E}', '\u{1735}', '\u{1736}',
    '\u{1803}', '\u{1809}', '\u{1944}', '\u{1945}',
    '\u{1AA8}', '\u{1AA9}', '\u{1AAA}', '\u{1AAB}',
    '\u{1B5A}', '\u{1B5B}', '\u{1B5E}', '\u{1B5F}',
    '\u{1C3B}', '\u{1C3C}', '\u{1C7E}', '\u{1C7F}',
    '\u{203C}', '\u{203D}', '\u{2047}', '\u{2048}', '\u{2049}',
    '\u{2E2E}', '\u{2E3C}',
    '\u{3002}',
    '\u{A4FF}', '\u{A60E}', '\u{A60F}', '\u{A6F3}', '\u{A6F7}',
    '\u{A876}', '\u{A877}', '\u{A8CE}', '\u{A8CF}', '\u{A92F}',
    '\u{A9C8}', '\u{A9C9}', '\u{AA5D}', '\u{AA5E}', '\u{AA5F}',
    '\u{AAF0}', '\u{AAF1}', '\u{ABEB}',
    '\u{FE52}', '\u{FE56}', '\u{FE57}',
    '\u{FF01}', '\u{FF0E}', '\u{FF1F}', '\u{FF61}',
    '\u{10A56}', '\u{10A57}',
    '\u{10F55}', '\u{10F56}', '\u{10F57}', '\u{10F58}', '\u{10F59}',
    '\u{11047}', '\u{11048}',
    '\u{110BE}', '\u{110BF}', '\u{110C0}', '\u{110C1}',
    '\u{11141}', '\u{11142}', '\u{11143}',
    '\u{111C5}', '\u{111C6}', '\u{111CD}', '\u{111DE}', '\u{111DF}',
    '\u{11238}', '\u{11239}', '\u{1123B}', '\u{1123C}',
    '\u{112A9}', '\u{1144B}', '\u{1144C}',
    '\u{115C2}', '\u{115C3}', '\u{115C9}', '\u{115CA}', '\u{115CB}', '\u{115CC}',
    '\u{115CD}', '\u{115CE}', '\u{115CF}', '\u{115D0}', '\u{115D1}', '\u{115D2}',
    '\u{115D3}', '\u{115D4}', '\u{115D5}', '\u{115D6}', '\u{115D7}',
    '\u{11641}', '\u{11642}',
    '\u{1173C}', '\u{1173D}', '\u{1173E}',
    '\u{11A42}', '\u{11A43}', '\u{11A9B}', '\u{11A9C}',
    '\u{11C41}', '\u{11C42}', '\u{11EF7}', '\u{11EF8}',
    '\u{16A6E}', '\u{16A6F}', '\u{16AF5}',
    '\u{16B37}', '\u{16B38}', '\u{16B44}', '\u{16E98}',
    '\u{1BC9F}', '\u{1DA88}',
];

pub fn is_sentence_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Unicode punctuation (general category P). ASCII symbols such as `$+<=>^`|~`
/// are category S and do not count.
pub fn is_punctuation(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Punctuation || is_sentence_terminator(ch)
}
