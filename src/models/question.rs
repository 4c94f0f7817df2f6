/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: char,
    pub text: String,
}

impl Choice {
    pub fn new(key: char, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<Choice>,
    /// Kept verbatim from the source so a bad key simply never matches.
    pub correct_key: String,
    user_answer: Option<char>,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<Choice>,
        correct_key: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_key: correct_key.into(),
            user_answer: None,
        }
    }

    pub fn user_answer(&self) -> Option<char> {
        self.user_answer
    }

    pub(crate) fn record(&mut self, key: char) {
        self.user_answer = Some(key);
    }

    pub(crate) fn clear_answer(&mut self) {
        self.user_answer = None;
    }

    /// Whether `correct_key` names one of the displayed options.
    pub fn has_valid_key(&self) -> bool {
        self.options.iter().any(|opt| key_matches(opt.key, &self.correct_key))
    }

    pub fn is_answered_correctly(&self) -> bool {
        self.user_answer
            .is_some_and(|answer| key_matches(answer, &self.correct_key))
    }

    pub fn option_by_key(&self, key: char) -> Option<&Choice> {
        self.options.iter().find(|opt| opt.key == key)
    }
}

fn key_matches(key: char, correct_key: &str) -> bool {
    let mut buf = [0u8; 4];
    key.encode_utf8(&mut buf) == correct_key
}
