use super::Question;

/// Ordered list of questions for one quiz. May be empty.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Returns false when `index` is out of range.
    pub(crate) fn record_answer(&mut self, index: usize, key: char) -> bool {
        match self.questions.get_mut(index) {
            Some(question) => {
                question.record(key);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_answers(&mut self) {
        for question in &mut self.questions {
            question.clear_answer();
        }
    }
}

impl From<Vec<Question>> for QuestionStore {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionStore {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
