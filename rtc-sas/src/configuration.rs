use std::sync::Arc;

use crate::sas::DEFAULT_SAS_WORDS;
use crate::word_table::WordTable;

/// A Configuration defines how an endpoint derives its short authentication
/// string and reacts to inbound offers.
/// Configurations are treated as readonly and may be shared by any number of
/// endpoints; the word table is reference counted, not copied.
#[derive(Debug, Clone)]
pub struct RTCConfiguration {
    /// max_sas_words bounds the number of fingerprint bytes turned into words.
    pub(crate) max_sas_words: usize,

    /// word_table maps fingerprint bytes to words.
    pub(crate) word_table: Arc<WordTable>,

    /// auto_answer makes handle_signal answer an inbound offer by itself.
    pub(crate) auto_answer: bool,
}

impl Default for RTCConfiguration {
    fn default() -> Self {
        RTCConfigurationBuilder::new().build()
    }
}

impl RTCConfiguration {
    pub fn max_sas_words(&self) -> usize {
        self.max_sas_words
    }

    pub fn word_table(&self) -> &Arc<WordTable> {
        &self.word_table
    }

    pub fn auto_answer(&self) -> bool {
        self.auto_answer
    }
}

pub struct RTCConfigurationBuilder {
    max_sas_words: usize,
    word_table: Option<Arc<WordTable>>,
    auto_answer: bool,
}

impl Default for RTCConfigurationBuilder {
    fn default() -> Self {
        Self {
            max_sas_words: DEFAULT_SAS_WORDS,
            word_table: None,
            auto_answer: true,
        }
    }
}

impl RTCConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_sas_words(mut self, max_sas_words: usize) -> Self {
        self.max_sas_words = max_sas_words;
        self
    }

    pub fn with_word_table(mut self, word_table: Arc<WordTable>) -> Self {
        self.word_table = Some(word_table);
        self
    }

    pub fn with_auto_answer(mut self, auto_answer: bool) -> Self {
        self.auto_answer = auto_answer;
        self
    }

    pub fn build(self) -> RTCConfiguration {
        RTCConfiguration {
            max_sas_words: self.max_sas_words,
            word_table: self
                .word_table
                .unwrap_or_else(|| Arc::new(WordTable::pgp())),
            auto_answer: self.auto_answer,
        }
    }
}
