//! Tutor reply generator
//!
//! An ordered rule table evaluated first-match-wins over the lower-cased
//! input. Each rule pairs a keyword group with a canned reply; inputs that
//! match no rule draw a fallback reply uniformly at random. This is the
//! whole "AI": no model, no state, no context.

use rand::Rng;

/// One (keyword group, reply) rule
struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

impl Rule {
    fn matches(&self, input_lower: &str) -> bool {
        self.keywords.iter().any(|kw| input_lower.contains(kw))
    }
}

/// Keyword rules, in priority order. The first matching rule wins, so an
/// input containing both "hello" and "thank" gets the greeting reply.
const RULES: [Rule; 6] = [
    Rule {
        keywords: &["hello", "hi"],
        reply: "Hello! How are you today? I'm here to help you practice English.",
    },
    Rule {
        keywords: &["how are you"],
        reply: "I'm doing great, thank you for asking! Ready to practice English with you.",
    },
    Rule {
        keywords: &["hobby", "hobbies"],
        reply: "That's a great hobby! How long have you been doing it? What do you enjoy most about it?",
    },
    Rule {
        keywords: &["food", "eat"],
        reply: "Food is a great topic! Can you describe the taste and how it's prepared?",
    },
    Rule {
        keywords: &["travel", "vacation"],
        reply: "Traveling is wonderful! Where did you go and what was your favorite part of the trip?",
    },
    Rule {
        keywords: &["thank"],
        reply: "You're welcome! Keep practicing and you'll continue to improve.",
    },
];

/// Replies for inputs that match no keyword group
pub const FALLBACK_REPLIES: [&str; 5] = [
    "That's interesting! Can you tell me more about that?",
    "Great point! How did that make you feel?",
    "I understand. What happened next?",
    "That's a good example. Can you think of another situation where this applies?",
    "Thanks for sharing! Let's practice using some related vocabulary: 'experience', 'situation', 'perspective'.",
];

/// Generate a tutor reply for `input` using the supplied RNG for the
/// fallback choice.
pub fn reply_with_rng(input: &str, rng: &mut impl Rng) -> &'static str {
    let input_lower = input.to_lowercase();

    for rule in &RULES {
        if rule.matches(&input_lower) {
            return rule.reply;
        }
    }

    FALLBACK_REPLIES[rng.gen_range(0..FALLBACK_REPLIES.len())]
}

/// Generate a tutor reply using the thread RNG
pub fn reply(input: &str) -> &'static str {
    reply_with_rng(input, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    const GREETING: &str = "Hello! How are you today? I'm here to help you practice English.";

    #[test]
    fn test_greeting_keywords_case_insensitive() {
        assert_eq!(reply_with_rng("hello", &mut rng()), GREETING);
        assert_eq!(reply_with_rng("HELLO there", &mut rng()), GREETING);
        assert_eq!(reply_with_rng("Hi!", &mut rng()), GREETING);
        assert_eq!(reply_with_rng("say hI to everyone", &mut rng()), GREETING);
    }

    #[test]
    fn test_priority_greeting_beats_gratitude() {
        // Contains both "hello" and "thank": first-match-wins means greeting
        assert_eq!(reply_with_rng("hello and thank you", &mut rng()), GREETING);
    }

    #[test]
    fn test_priority_greeting_beats_well_being() {
        // "Hi there, how are you?" matches both groups; greeting is first
        assert_eq!(reply_with_rng("Hi there, how are you?", &mut rng()), GREETING);
    }

    #[test]
    fn test_well_being_reply() {
        assert_eq!(
            reply_with_rng("how are you doing?", &mut rng()),
            "I'm doing great, thank you for asking! Ready to practice English with you."
        );
    }

    #[test]
    fn test_topic_rules() {
        assert!(reply_with_rng("my hobby is painting", &mut rng()).contains("great hobby"));
        assert!(reply_with_rng("I like to eat dosa", &mut rng()).contains("Food is a great topic"));
        assert!(reply_with_rng("my last vacation", &mut rng()).contains("Traveling is wonderful"));
        assert!(reply_with_rng("thank you so much", &mut rng()).contains("You're welcome"));
    }

    #[test]
    fn test_unmatched_input_uses_fallback_pool() {
        let mut rng = rng();
        for _ in 0..100 {
            let reply = reply_with_rng("the weather is nice", &mut rng);
            assert!(FALLBACK_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn test_fallback_roughly_uniform() {
        let mut rng = rng();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let trials = 5000;

        for _ in 0..trials {
            *counts.entry(reply_with_rng("xyzzy", &mut rng)).or_default() += 1;
        }

        // All five replies appear, each within a loose band around 1/5
        assert_eq!(counts.len(), FALLBACK_REPLIES.len());
        for (_, count) in counts {
            assert!(count > trials / 10, "fallback reply underrepresented");
            assert!(count < trials * 3 / 10, "fallback reply overrepresented");
        }
    }
}
