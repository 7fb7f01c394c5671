use rand::seq::IndexedRandom;
use rand::Rng;

/// One entry of the stroke knowledge base
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    /// Phrases that select the topic outright
    pub phrases: &'static [&'static str],
    /// Single words that select the topic when no phrase matched anywhere
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

pub const KNOWLEDGE_BASE: [Topic; 15] = [
    Topic {
        phrases: &["what is stroke", "what is a stroke", "what's a stroke"],
        keywords: &["definition", "define", "meaning"],
        answer: "A stroke occurs when blood supply to part of the brain is interrupted or reduced, \
                 preventing brain tissue from getting oxygen and nutrients. Brain cells begin to die \
                 within minutes. A stroke is a medical emergency that requires immediate treatment.",
    },
    Topic {
        phrases: &["types of stroke", "kinds of stroke"],
        keywords: &["types", "type", "kinds", "ischemic", "hemorrhagic"],
        answer: "There are three main types of stroke: 1) Ischemic stroke - caused by a blocked artery, \
                 2) Hemorrhagic stroke - caused by a leaking or burst blood vessel, and \
                 3) Transient ischemic attack (TIA) - a temporary period of symptoms similar to a stroke.",
    },
    Topic {
        phrases: &["stroke symptoms", "signs of stroke", "signs of a stroke"],
        keywords: &["symptoms", "symptom", "signs", "warning"],
        answer: "Remember the acronym FAST: Face drooping, Arm weakness, Speech difficulty, Time to call emergency. \
                 Other symptoms include sudden numbness, confusion, trouble seeing, trouble walking, \
                 severe headache with no known cause.",
    },
    Topic {
        phrases: &["stroke risk factors", "risk factors"],
        keywords: &["risk", "factors", "causes", "cause"],
        answer: "Major risk factors include high blood pressure, smoking, diabetes, high cholesterol, obesity, \
                 physical inactivity, heavy alcohol use, family history, age (risk increases with age), \
                 and certain medical conditions like atrial fibrillation.",
    },
    Topic {
        phrases: &["stroke prevention"],
        keywords: &["prevention", "prevent", "avoid"],
        answer: "To prevent stroke: control blood pressure, manage diabetes, maintain healthy cholesterol levels, \
                 quit smoking, maintain a healthy weight, exercise regularly, eat a diet rich in fruits and vegetables, \
                 limit alcohol consumption, and treat obstructive sleep apnea if present.",
    },
    Topic {
        phrases: &["stroke treatment"],
        keywords: &["treatment", "treat", "treated", "medication", "medicine", "surgery"],
        answer: "Treatment depends on type of stroke. For ischemic stroke, medicines to dissolve clots and procedures \
                 to remove clots are used. For hemorrhagic stroke, controlling blood pressure and surgery may be needed. \
                 Rehabilitation is important for recovery.",
    },
    Topic {
        phrases: &["stroke recovery"],
        keywords: &["recovery", "recover", "rehabilitation", "rehab", "therapy"],
        answer: "Recovery varies by person and stroke severity. Rehabilitation can include physical therapy, \
                 occupational therapy, speech therapy, and psychological support. Recovery can continue for months or years.",
    },
    Topic {
        phrases: &["stroke statistics", "how common"],
        keywords: &["statistics", "stats", "common", "prevalence"],
        answer: "Stroke is a leading cause of death and serious long-term disability. \
                 Approximately 795,000 people in the United States have a stroke each year. \
                 Someone in the United States has a stroke every 40 seconds.",
    },
    Topic {
        phrases: &["tia", "mini stroke", "transient ischemic attack"],
        keywords: &["transient"],
        answer: "A Transient Ischemic Attack (TIA) or 'mini-stroke' causes temporary symptoms similar to a stroke. \
                 While these symptoms resolve within 24 hours, a TIA is a serious warning sign and \
                 should not be ignored as it indicates a high risk for a future stroke.",
    },
    Topic {
        phrases: &["stroke in young people"],
        keywords: &["young", "younger", "youth", "teen", "teenager"],
        answer: "While stroke risk increases with age, strokes can occur at any age. \
                 In younger people, they're often related to risk factors like high blood pressure, smoking, \
                 diabetes, obesity, heart disorders, or use of certain medications or drugs.",
    },
    Topic {
        phrases: &["fast", "fast method", "be fast"],
        keywords: &["acronym"],
        answer: "The FAST method is a quick way to identify stroke symptoms. \
                 F - Face drooping: does one side of the face droop or is it numb? \
                 A - Arm weakness: is one arm weak or numb? \
                 S - Speech difficulty: is speech slurred, or are they unable to speak or hard to understand? \
                 T - Time to call emergency services: if someone shows any of these symptoms, even if they go away, \
                 call emergency services and get them to the hospital immediately.",
    },
    Topic {
        phrases: &["help someone", "family member", "caregiver", "caregivers", "caregiving", "caring for"],
        keywords: &["care", "support", "survivor", "survivors"],
        answer: "Tips for caregivers supporting stroke survivors: educate yourself about stroke and recovery, \
                 create a safe home environment, help with medication management, encourage independence when possible, \
                 assist with rehabilitation exercises, watch for signs of depression or frustration, \
                 and take care of your own health and seek support when needed.",
    },
    Topic {
        phrases: &["blood pressure", "high blood pressure", "hypertension"],
        keywords: &["hypertensive", "bp"],
        answer: "High blood pressure is the most significant controllable risk factor for stroke. \
                 Regular monitoring and management through medication, diet, exercise, and stress reduction are essential. \
                 Aim to keep your blood pressure below 120/80 mmHg.",
    },
    Topic {
        phrases: &["diet", "food", "foods", "eat", "eating", "nutrition"],
        keywords: &["salt", "sodium", "mediterranean", "dash"],
        answer: "A heart-healthy diet can reduce stroke risk. Focus on fruits and vegetables, whole grains, \
                 lean proteins, low-fat dairy, limited salt (sodium), and limited saturated and trans fats. \
                 The Mediterranean and DASH diets are particularly beneficial for stroke prevention.",
    },
    Topic {
        phrases: &["exercise", "exercises", "physical activity", "workout", "workouts"],
        keywords: &["active", "walking", "fitness"],
        answer: "Regular physical activity reduces stroke risk by lowering blood pressure, improving cholesterol levels, \
                 managing weight, and controlling diabetes. Aim for at least 150 minutes of moderate-intensity \
                 exercise per week (about 30 minutes daily, 5 days a week).",
    },
];

const GREETINGS: [&str; 8] = [
    "hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening", "howdy",
];

const GREETING_RESPONSES: [&str; 3] = [
    "Hello! I'm your stroke information chatbot. How can I help you learn about strokes today?",
    "Hi there! I can provide information about strokes. What would you like to know?",
    "Hey! I'm here to answer your questions about strokes. What can I help you with?",
];

const FAREWELLS: [&str; 9] = [
    "bye", "goodbye", "see you", "farewell", "take care", "later", "end", "quit", "exit",
];

const FAREWELL_RESPONSES: [&str; 3] = [
    "Goodbye! Remember to take care of your health.",
    "Farewell! If you have more questions about strokes later, I'll be here.",
    "Take care! Remember the FAST acronym for stroke symptoms: Face drooping, Arm weakness, Speech difficulty, Time to call emergency.",
];

const THANKS: [&str; 5] = ["thank you", "thanks", "thank", "appreciate", "grateful"];

const THANK_RESPONSES: [&str; 3] = [
    "You're welcome! Is there anything else you'd like to know about strokes?",
    "Happy to help! Do you have any other questions about stroke prevention or symptoms?",
    "No problem! Remember that awareness is key in stroke prevention.",
];

pub const STROKE_FALLBACK: &str = "I'm not sure I understand your question about strokes. \
     You can ask me about stroke types, symptoms, risk factors, prevention, \
     treatment, recovery, caregiving, diet, exercise, or statistics.";

pub const GENERIC_FALLBACK: &str = "I'm here to provide information about strokes. You can ask me about stroke types, \
     symptoms, risk factors, prevention, treatment, recovery, caregiving, diet, exercise, or statistics.";

/// Quick replies offered when the bot cannot answer directly
pub const SUGGESTIONS: [&str; 5] = [
    "What is a stroke?",
    "Stroke symptoms",
    "Stroke risk factors",
    "Stroke prevention",
    "Stroke recovery",
];

/// Chatbot reply with optional quick-reply suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub suggestions: Vec<String>,
}

impl Reply {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            suggestions: Vec::new(),
        }
    }

    fn with_suggestions(text: &str) -> Self {
        Self {
            text: text.to_string(),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Lowercased message reduced to single-space separated words.
///
/// Padded with a space on both sides so phrase lookups can match on word
/// boundaries with a plain substring search.
#[derive(Debug)]
struct Normalized(String);

impl Normalized {
    fn new(message: &str) -> Self {
        let cleaned: String = message
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '\'' { c } else { ' ' })
            .collect();
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        Self(format!(" {} ", words.join(" ")))
    }

    fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn contains(&self, phrase: &str) -> bool {
        self.0.contains(&format!(" {} ", phrase))
    }

    fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.contains(p))
    }
}

/// Rule-based stroke information chatbot
#[derive(Debug, Clone, Copy, Default)]
pub struct Chatbot;

impl Chatbot {
    pub fn new() -> Self {
        Self
    }

    /// Reply to a message using the thread-local RNG for canned small talk
    pub fn reply(&self, message: &str) -> Reply {
        self.reply_with(message, &mut rand::rng())
    }

    /// Reply to a message, picking small-talk variants with the given RNG
    pub fn reply_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Reply {
        let message = Normalized::new(message);

        if message.is_empty() {
            return Reply::with_suggestions(GENERIC_FALLBACK);
        }

        if message.contains_any(&GREETINGS) {
            return Reply::with_suggestions(pick(&GREETING_RESPONSES, rng));
        }

        if message.contains_any(&FAREWELLS) {
            return Reply::plain(pick(&FAREWELL_RESPONSES, rng));
        }

        if message.contains_any(&THANKS) {
            return Reply::plain(pick(&THANK_RESPONSES, rng));
        }

        if let Some(topic) = self.find_topic(&message) {
            return Reply::plain(topic.answer);
        }

        if message.contains("stroke") || message.contains("strokes") {
            return Reply::with_suggestions(STROKE_FALLBACK);
        }

        Reply::with_suggestions(GENERIC_FALLBACK)
    }

    fn find_topic(&self, message: &Normalized) -> Option<&'static Topic> {
        KNOWLEDGE_BASE
            .iter()
            .find(|topic| message.contains_any(topic.phrases))
            .or_else(|| {
                KNOWLEDGE_BASE
                    .iter()
                    .find(|topic| message.contains_any(topic.keywords))
            })
    }
}

fn pick<'a, R: Rng + ?Sized>(choices: &[&'a str], rng: &mut R) -> &'a str {
    choices.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn reply(message: &str) -> Reply {
        let mut rng = StdRng::seed_from_u64(7);
        Chatbot::new().reply_with(message, &mut rng)
    }

    #[test]
    fn test_greeting() {
        let r = reply("Hello there!");
        assert!(GREETING_RESPONSES.contains(&r.text.as_str()));
        assert!(!r.suggestions.is_empty());
    }

    #[test]
    fn test_greeting_requires_whole_word() {
        // "this" contains "hi" but is not a greeting
        let r = reply("is this a stroke symptom list");
        assert_eq!(r.text, KNOWLEDGE_BASE[2].answer);
    }

    #[test]
    fn test_farewell_and_thanks() {
        assert!(FAREWELL_RESPONSES.contains(&reply("ok, goodbye").text.as_str()));
        assert!(THANK_RESPONSES.contains(&reply("Thanks a lot").text.as_str()));
        assert!(THANK_RESPONSES.contains(&reply("thank you so much").text.as_str()));
    }

    #[test]
    fn test_phrase_match() {
        assert_eq!(reply("What is a stroke?").text, KNOWLEDGE_BASE[0].answer);
        assert_eq!(reply("Tell me about types of stroke").text, KNOWLEDGE_BASE[1].answer);
        assert_eq!(reply("TIA").text, KNOWLEDGE_BASE[8].answer);
    }

    #[test]
    fn test_phrase_beats_keyword_from_earlier_topic() {
        // "ischemic" is a keyword of the types topic, the TIA phrase still wins
        let r = reply("what is a transient ischemic attack");
        assert_eq!(r.text, KNOWLEDGE_BASE[8].answer);
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(reply("how can I prevent it").text, KNOWLEDGE_BASE[4].answer);
        assert_eq!(reply("rehab options?").text, KNOWLEDGE_BASE[6].answer);
        assert_eq!(reply("can young adults be affected").text, KNOWLEDGE_BASE[9].answer);
    }

    #[test]
    fn test_lifestyle_and_caregiving_topics() {
        assert_eq!(
            reply("how do I help a family member after a stroke").text,
            KNOWLEDGE_BASE[11].answer
        );
        assert_eq!(reply("does blood pressure matter").text, KNOWLEDGE_BASE[12].answer);
        assert_eq!(reply("how much exercise").text, KNOWLEDGE_BASE[14].answer);
        // "risk" is a risk-factor keyword, the diet phrase still wins
        assert_eq!(reply("what diet lowers stroke risk").text, KNOWLEDGE_BASE[13].answer);
        assert_eq!(reply("I'm caring for my dad").text, KNOWLEDGE_BASE[11].answer);
    }

    #[test]
    fn test_fast_has_its_own_answer() {
        let r = reply("what does FAST stand for?");
        assert_eq!(r.text, KNOWLEDGE_BASE[10].answer);
        assert_ne!(reply("stroke symptoms").text, r.text);
    }

    #[test]
    fn test_fallbacks() {
        let r = reply("my uncle had a stroke");
        assert_eq!(r.text, STROKE_FALLBACK);
        assert_eq!(r.suggestions.len(), SUGGESTIONS.len());

        assert_eq!(reply("what's the weather").text, GENERIC_FALLBACK);
        assert_eq!(reply("   ").text, GENERIC_FALLBACK);
    }

    #[test]
    fn test_knowledge_replies_are_deterministic() {
        let bot = Chatbot::new();
        let a = bot.reply("stroke symptoms");
        let b = bot.reply("stroke symptoms");
        assert_eq!(a, b);
    }
}
