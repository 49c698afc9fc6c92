//! Embedded sentiment lexicon.
//!
//! Scores follow the usual adjective-lexicon convention: polarity in
//! `[-1, 1]`, subjectivity in `[0, 1]`. Both tables are sorted by word.

/// `(word, polarity, subjectivity)`.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    ("absurd", -0.5, 1.0),
    ("acceptable", 0.2, 0.5),
    ("admirable", 0.7, 0.8),
    ("adorable", 0.5, 1.0),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.25, 0.6),
    ("appalling", -0.9, 1.0),
    ("attractive", 0.6, 0.8),
    ("average", -0.15, 0.4),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bizarre", -0.3, 0.8),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.5, 0.6),
    ("calm", 0.3, 0.75),
    ("careful", 0.1, 1.0),
    ("charming", 0.6, 0.9),
    ("cheap", 0.4, 0.7),
    ("clean", 0.37, 0.69),
    ("clever", 0.5, 0.75),
    ("confusing", -0.3, 0.6),
    ("cool", 0.35, 0.65),
    ("correct", 0.2, 0.5),
    ("crap", -0.8, 0.8),
    ("crazy", -0.6, 0.9),
    ("cruel", -1.0, 1.0),
    ("cute", 0.5, 1.0),
    ("dangerous", -0.6, 0.9),
    ("decent", 0.17, 0.5),
    ("delicious", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("depressing", -0.7, 0.7),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dull", -0.31, 0.71),
    ("easy", 0.43, 0.83),
    ("elegant", 0.7, 0.9),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("fair", 0.7, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("fine", 0.42, 0.5),
    ("flawless", 1.0, 1.0),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 0.75),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hard", -0.29, 0.54),
    ("hate", -0.8, 0.9),
    ("helpful", 0.5, 0.6),
    ("horrible", -1.0, 1.0),
    ("ideal", 0.9, 0.9),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("lame", -0.5, 0.75),
    ("lazy", -0.25, 1.0),
    ("like", 0.2, 0.3),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("magnificent", 1.0, 1.0),
    ("mediocre", -0.5, 0.7),
    ("messy", -0.5, 0.7),
    ("miserable", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("neat", 0.4, 0.6),
    ("nice", 0.6, 1.0),
    ("ok", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("outstanding", 0.5, 0.7),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("poor", -0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("problem", -0.3, 0.5),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("safe", 0.5, 0.5),
    ("satisfied", 0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("silly", -0.5, 0.9),
    ("simple", 0.0, 0.36),
    ("slow", -0.3, 0.39),
    ("smart", 0.21, 0.64),
    ("smooth", 0.4, 0.69),
    ("solid", 0.1, 0.1),
    ("strange", -0.05, 0.15),
    ("stupid", -0.8, 1.0),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("thrilled", 0.7, 0.9),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("unpleasant", -0.6, 0.8),
    ("upset", -0.5, 0.8),
    ("useful", 0.3, 0.0),
    ("useless", -0.5, 0.2),
    ("weak", -0.38, 0.63),
    ("weird", -0.5, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// `(word, intensity)`: modifiers scaling the next scored word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.5),
    ("completely", 1.3),
    ("especially", 1.2),
    ("exceptionally", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("hugely", 1.4),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("super", 1.3),
    ("too", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Words that flip the polarity of the next scored word.
pub(crate) const NEGATIONS: &[&str] = &[
    "cannot", "never", "no", "nobody", "none", "nor", "not", "nothing", "nowhere",
];

/// Look up a scored word.
pub(crate) fn score(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .binary_search_by(|(w, _, _)| w.cmp(&word))
        .ok()
        .map(|i| (LEXICON[i].1, LEXICON[i].2))
}

/// Look up an intensifier.
pub(crate) fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .binary_search_by(|(w, _)| w.cmp(&word))
        .ok()
        .map(|i| INTENSIFIERS[i].1)
}

/// Whether `word` negates what follows (`not`, `never`, `isn't`, ...).
pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.binary_search(&word).is_ok() || word.ends_with("n't")
}
