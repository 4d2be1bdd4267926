//! The daily word list
//!
//! A fixed literal list; entries are read-only and never change at runtime.

/// One vocabulary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
}

/// Today's words, in display order
pub const VOCABULARY: [VocabularyEntry; 5] = [
    VocabularyEntry {
        word: "Eloquent",
        meaning: "Fluent or persuasive in speaking or writing",
        example: "She gave an eloquent speech at the conference.",
    },
    VocabularyEntry {
        word: "Pragmatic",
        meaning: "Dealing with things sensibly and realistically",
        example: "His pragmatic approach solved the problem quickly.",
    },
    VocabularyEntry {
        word: "Resilient",
        meaning: "Able to withstand or recover quickly from difficult conditions",
        example: "Children are often more resilient than adults.",
    },
    VocabularyEntry {
        word: "Ubiquitous",
        meaning: "Present, appearing, or found everywhere",
        example: "Mobile phones have become ubiquitous in modern society.",
    },
    VocabularyEntry {
        word: "Meticulous",
        meaning: "Showing great attention to detail; very careful and precise",
        example: "She was meticulous in her research.",
    },
];

/// Practice phrase spoken for a word card's Practice action
pub fn practice_phrase(word: &str) -> String {
    format!("The word is {word}. Let's practice pronouncing it. {word}. {word}. Good job!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_fixed() {
        assert_eq!(VOCABULARY.len(), 5);
        assert_eq!(VOCABULARY[0].word, "Eloquent");
        assert_eq!(VOCABULARY[4].word, "Meticulous");
        // Every entry is fully populated
        for entry in VOCABULARY {
            assert!(!entry.word.is_empty());
            assert!(!entry.meaning.is_empty());
            assert!(!entry.example.is_empty());
        }
    }

    #[test]
    fn test_practice_phrase() {
        let phrase = practice_phrase("Eloquent");
        assert!(phrase.starts_with("The word is Eloquent."));
        assert_eq!(phrase.matches("Eloquent").count(), 3);
    }
}
