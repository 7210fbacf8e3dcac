//! Book catalogue
//!
//! Canonical book names in reading order and the fixed abbreviations used in
//! textual positions.

/// Testament a canonical book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

/// Number of Old Testament books at the head of [`BIBLE_BOOKS`]
const OLD_TESTAMENT_LEN: usize = 39;

/// Standard Protestant canon in reading order
pub const BIBLE_BOOKS: [&str; 66] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles", "Ezra",
    "Nehemiah", "Esther", "Job", "Psalms", "Proverbs",
    "Ecclesiastes", "Song of Songs", "Isaiah", "Jeremiah", "Lamentations",
    "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk",
    "Zephaniah", "Haggai", "Zechariah", "Malachi",
    "Matthew", "Mark", "Luke", "John", "Acts",
    "Romans", "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
    "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians", "1 Timothy",
    "2 Timothy", "Titus", "Philemon", "Hebrews", "James",
    "1 Peter", "2 Peter", "1 John", "2 John", "3 John",
    "Jude", "Revelation",
];

/// Book name to position abbreviation
const ABBREVIATIONS: [(&str, &str); 66] = [
    ("Genesis", "Gen"), ("Exodus", "Ex"), ("Leviticus", "Lev"), ("Numbers", "Num"),
    ("Deuteronomy", "Deut"), ("Joshua", "Josh"), ("Judges", "Judg"), ("Ruth", "Ruth"),
    ("1 Samuel", "1 Sam"), ("2 Samuel", "2 Sam"), ("1 Kings", "1 Kgs"), ("2 Kings", "2 Kgs"),
    ("1 Chronicles", "1 Chr"), ("2 Chronicles", "2 Chr"), ("Ezra", "Ezra"),
    ("Nehemiah", "Neh"), ("Esther", "Esth"), ("Job", "Job"), ("Psalms", "Ps"),
    ("Proverbs", "Prov"), ("Ecclesiastes", "Eccl"), ("Song of Songs", "Song"),
    ("Isaiah", "Isa"), ("Jeremiah", "Jer"), ("Lamentations", "Lam"), ("Ezekiel", "Ezek"),
    ("Daniel", "Dan"), ("Hosea", "Hos"), ("Joel", "Joel"), ("Amos", "Amos"),
    ("Obadiah", "Obad"), ("Jonah", "Jonah"), ("Micah", "Mic"), ("Nahum", "Nah"),
    ("Habakkuk", "Hab"), ("Zephaniah", "Zeph"), ("Haggai", "Hag"), ("Zechariah", "Zech"),
    ("Malachi", "Mal"), ("Matthew", "Matt"), ("Mark", "Mark"), ("Luke", "Luke"),
    ("John", "John"), ("Acts", "Acts"), ("Romans", "Rom"), ("1 Corinthians", "1 Cor"),
    ("2 Corinthians", "2 Cor"), ("Galatians", "Gal"), ("Ephesians", "Eph"),
    ("Philippians", "Phil"), ("Colossians", "Col"), ("1 Thessalonians", "1 Thess"),
    ("2 Thessalonians", "2 Thess"), ("1 Timothy", "1 Tim"), ("2 Timothy", "2 Tim"),
    ("Titus", "Titus"), ("Philemon", "Phlm"), ("Hebrews", "Heb"), ("James", "James"),
    ("1 Peter", "1 Pet"), ("2 Peter", "2 Pet"), ("1 John", "1 John"), ("2 John", "2 John"),
    ("3 John", "3 John"), ("Jude", "Jude"), ("Revelation", "Rev"),
];

/// Resolve a book name to its position abbreviation.
///
/// Names missing from the table fall back to their first four characters,
/// without trailing whitespace.
pub fn abbreviation(book: &str) -> String {
    ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == book)
        .map(|(_, abbr)| (*abbr).to_string())
        .unwrap_or_else(|| {
            let prefix: String = book.chars().take(4).collect();
            prefix.trim_end().to_string()
        })
}

/// Reverse lookup of a table abbreviation
pub fn book_for_abbreviation(abbr: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(_, a)| *a == abbr)
        .map(|(name, _)| *name)
}

/// Testament of a canonical book, `None` for books outside the canon
pub fn testament(book: &str) -> Option<Testament> {
    BIBLE_BOOKS
        .iter()
        .position(|name| *name == book)
        .map(|index| {
            if index < OLD_TESTAMENT_LEN {
                Testament::Old
            } else {
                Testament::New
            }
        })
}
