use rand::Rng;

/// Plastic-type labels the demo can assign to an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Recyclable,
    NonRecyclable,
}

impl Label {
    /// The full label set the random strategy draws from
    pub const ALL: [Label; 2] = [Label::Recyclable, Label::NonRecyclable];

    /// Display form of the label, as stored in history and shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Recyclable => "Recyclable",
            Label::NonRecyclable => "Non-Recyclable",
        }
    }
}

/// Label-assignment strategy for uploaded images
///
/// The demo ships a single uniform-random implementation; a genuine model
/// would slot in behind the same trait without touching the classify route.
pub trait Classifier: Send + Sync {
    /// Assign a label to an upload
    ///
    /// `data` carries the decoded image bytes when the client sent them;
    /// implementations are free to ignore both arguments.
    fn classify(&self, filename: &str, data: Option<&[u8]>) -> Label;
}

/// Uniform random draw over the label set
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomClassifier;

impl Classifier for RandomClassifier {
    fn classify(&self, _filename: &str, _data: Option<&[u8]>) -> Label {
        let idx = rand::thread_rng().gen_range(0..Label::ALL.len());
        Label::ALL[idx]
    }
}

/// Always returns the same label
///
/// Used in tests to make classify responses deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier(pub Label);

impl Classifier for FixedClassifier {
    fn classify(&self, _filename: &str, _data: Option<&[u8]>) -> Label {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display_forms() {
        assert_eq!(Label::Recyclable.as_str(), "Recyclable");
        assert_eq!(Label::NonRecyclable.as_str(), "Non-Recyclable");
    }

    #[test]
    fn test_random_classifier_stays_in_label_set() {
        let classifier = RandomClassifier;

        for _ in 0..100 {
            let label = classifier.classify("bottle.jpg", None);
            assert!(Label::ALL.contains(&label));
        }
    }

    #[test]
    fn test_random_classifier_draws_both_labels() {
        let classifier = RandomClassifier;

        // 200 uniform draws miss a label with probability 2^-199
        let mut seen_recyclable = false;
        let mut seen_non_recyclable = false;
        for _ in 0..200 {
            match classifier.classify("bottle.jpg", None) {
                Label::Recyclable => seen_recyclable = true,
                Label::NonRecyclable => seen_non_recyclable = true,
            }
        }

        assert!(seen_recyclable);
        assert!(seen_non_recyclable);
    }

    #[test]
    fn test_fixed_classifier() {
        let classifier = FixedClassifier(Label::NonRecyclable);

        for _ in 0..10 {
            assert_eq!(
                classifier.classify("bottle.jpg", None),
                Label::NonRecyclable
            );
        }
    }
}
