use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::word_table::{WORD_TABLE_COLUMNS, WordTable};

/// Default number of words in a short authentication string.
pub const DEFAULT_SAS_WORDS: usize = 4;

/// Short Authentication String: an ordered word sequence two people read to
/// each other to confirm that no one substituted the fingerprint in transit.
///
/// Displays as the words joined by single spaces.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RTCShortAuthenticationString {
    pub words: Vec<String>,
}

impl fmt::Display for RTCShortAuthenticationString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl RTCShortAuthenticationString {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Derives the short authentication string for `fingerprint`.
///
/// Takes the first `max_words` bytes of the fingerprint, fewer if it is
/// shorter, and maps the byte at position `i` to `table.word(byte, i % 2)`.
/// The result is deterministic: the same fingerprint, table and `max_words`
/// always yield the same words. A short fingerprint yields a short string; an
/// empty one yields an empty string.
///
/// ```
/// use rtc_sas::fingerprint::Fingerprint;
/// use rtc_sas::sas::generate_sas;
/// use rtc_sas::word_table::WordTable;
///
/// let fingerprint = Fingerprint::new("sha-256", "00:01:02:03:04").unwrap();
/// let sas = generate_sas(&fingerprint, &WordTable::pgp(), 4);
/// assert_eq!(sas.to_string(), "aardvark adviser accrue aggregate");
/// ```
pub fn generate_sas(
    fingerprint: &Fingerprint,
    table: &WordTable,
    max_words: usize,
) -> RTCShortAuthenticationString {
    let words = fingerprint
        .bytes()
        .into_iter()
        .take(max_words)
        .enumerate()
        .map(|(position, value)| {
            table
                .word(value, position % WORD_TABLE_COLUMNS)
                .to_owned()
        })
        .collect();

    RTCShortAuthenticationString { words }
}

/// Compares the SAS one person reads with the SAS the other derived from
/// their own certificate. Only two present, non-empty and equal strings
/// match; an absent SAS never verifies anything.
pub fn sas_matches(
    heard: Option<&RTCShortAuthenticationString>,
    spoken: Option<&RTCShortAuthenticationString>,
) -> bool {
    match (heard, spoken) {
        (Some(heard), Some(spoken)) => !heard.is_empty() && heard == spoken,
        _ => false,
    }
}
