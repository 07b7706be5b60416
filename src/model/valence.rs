//! Sentiment valence lexicon
//!
//! A compact VADER-style lexicon: per-word valence on a roughly [-4, 4]
//! scale, plus negators and intensity boosters/dampeners. The annotator
//! turns summed valences into a bounded compound score.

use rustc_hash::{FxHashMap, FxHashSet};

/// Word valences. Positive words score above zero, negative below.
const VALENCES: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("wonderful", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("fantastic", 2.6),
    ("perfect", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("like", 1.5),
    ("liked", 1.7),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("beautiful", 2.9),
    ("brilliant", 2.8),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("nice", 1.8),
    ("fine", 0.8),
    ("fun", 2.3),
    ("funny", 1.9),
    ("glad", 2.0),
    ("grateful", 2.2),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("win", 2.8),
    ("won", 2.7),
    ("winner", 2.8),
    ("success", 2.7),
    ("successful", 2.6),
    ("succeed", 2.2),
    ("victory", 2.8),
    ("triumph", 2.9),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 1.8),
    ("benefit", 1.9),
    ("positive", 2.3),
    ("strong", 1.8),
    ("strength", 1.9),
    ("smart", 1.7),
    ("clever", 2.0),
    ("wise", 1.9),
    ("kind", 2.4),
    ("gentle", 1.9),
    ("generous", 2.3),
    ("friendly", 2.2),
    ("friend", 2.2),
    ("trust", 2.1),
    ("trusted", 2.1),
    ("honest", 2.3),
    ("fair", 1.7),
    ("calm", 1.3),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("safe", 1.9),
    ("secure", 1.6),
    ("comfort", 1.5),
    ("comfortable", 1.7),
    ("celebrate", 2.7),
    ("celebration", 2.7),
    ("praise", 2.4),
    ("reward", 2.2),
    ("gift", 1.9),
    ("luck", 2.3),
    ("lucky", 2.4),
    ("rich", 2.0),
    ("wealth", 2.2),
    ("healthy", 2.1),
    ("heal", 1.9),
    ("cure", 2.0),
    ("easy", 1.9),
    ("free", 1.9),
    ("freedom", 2.3),
    ("interesting", 1.7),
    ("impressive", 2.3),
    ("outstanding", 2.9),
    ("superb", 3.0),
    ("magnificent", 3.0),
    ("remarkable", 2.2),
    ("worthy", 1.9),
    ("worth", 0.9),
    ("welcome", 2.0),
    ("support", 1.7),
    ("supported", 1.7),
    ("helpful", 1.8),
    ("promising", 2.0),
    ("inspire", 2.4),
    ("inspired", 2.3),
    ("optimistic", 2.4),
    ("proud", 2.1),
    ("pride", 1.8),
    ("bright", 1.9),
    ("charming", 2.4),
    ("elegant", 2.1),
    ("innovative", 1.9),
    ("refreshing", 2.0),
    ("satisfied", 2.0),
    ("satisfying", 2.1),
    // negative
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("horrific", -2.9),
    ("worst", -3.1),
    ("worse", -2.1),
    ("hate", -2.7),
    ("hated", -2.7),
    ("hatred", -3.2),
    ("sad", -2.1),
    ("sadness", -2.2),
    ("unhappy", -1.8),
    ("miserable", -2.6),
    ("misery", -2.7),
    ("angry", -2.3),
    ("anger", -2.7),
    ("furious", -2.8),
    ("rage", -2.6),
    ("fear", -2.2),
    ("afraid", -2.2),
    ("scared", -2.2),
    ("scary", -2.2),
    ("terror", -3.1),
    ("horror", -2.7),
    ("panic", -2.4),
    ("worry", -1.9),
    ("worried", -1.8),
    ("anxious", -1.9),
    ("anxiety", -1.9),
    ("stress", -1.8),
    ("pain", -2.3),
    ("painful", -2.3),
    ("hurt", -2.2),
    ("suffer", -2.3),
    ("suffering", -2.4),
    ("sick", -2.0),
    ("illness", -1.9),
    ("disease", -1.8),
    ("death", -2.9),
    ("dead", -2.6),
    ("die", -2.9),
    ("died", -2.7),
    ("kill", -3.7),
    ("killed", -3.4),
    ("murder", -3.4),
    ("war", -2.9),
    ("violence", -3.1),
    ("violent", -2.9),
    ("attack", -2.1),
    ("attacked", -2.0),
    ("threat", -2.4),
    ("danger", -2.4),
    ("dangerous", -2.3),
    ("crisis", -2.3),
    ("disaster", -3.1),
    ("catastrophe", -3.0),
    ("tragedy", -3.0),
    ("tragic", -2.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.5),
    ("lose", -1.9),
    ("lost", -1.3),
    ("loss", -1.3),
    ("defeat", -2.0),
    ("poor", -1.9),
    ("poverty", -2.3),
    ("weak", -1.9),
    ("broken", -1.8),
    ("break", -1.4),
    ("damage", -2.2),
    ("damaged", -2.0),
    ("destroy", -2.6),
    ("destroyed", -2.7),
    ("destruction", -2.8),
    ("ruin", -2.4),
    ("ruined", -2.6),
    ("wrong", -2.1),
    ("mistake", -1.7),
    ("error", -1.7),
    ("problem", -1.7),
    ("trouble", -2.0),
    ("difficult", -1.5),
    ("ugly", -2.2),
    ("disgusting", -2.6),
    ("disgust", -2.4),
    ("nasty", -2.6),
    ("cruel", -2.7),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("corrupt", -2.7),
    ("fraud", -2.8),
    ("lie", -1.8),
    ("liar", -2.6),
    ("dishonest", -2.4),
    ("betray", -2.8),
    ("betrayal", -2.9),
    ("shame", -2.1),
    ("ashamed", -2.1),
    ("guilt", -2.1),
    ("guilty", -2.1),
    ("blame", -1.9),
    ("complain", -1.6),
    ("complaint", -1.6),
    ("annoying", -1.8),
    ("annoyed", -1.7),
    ("boring", -1.3),
    ("bored", -1.2),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("disappointment", -2.2),
    ("regret", -1.9),
    ("sorry", -0.3),
    ("cry", -1.9),
    ("tears", -1.0),
    ("alone", -1.0),
    ("lonely", -1.9),
    ("abandon", -2.2),
    ("abandoned", -2.0),
    ("reject", -1.9),
    ("rejected", -2.1),
    ("hostile", -2.4),
    ("toxic", -2.4),
    ("evil", -3.1),
];

/// Words that flip the polarity of a following sentiment word. Contracted
/// forms appear apostrophe-free because the normalizer strips apostrophes.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "cant", "dont", "didnt", "doesnt",
    "isnt", "wasnt", "werent", "wont", "wouldnt", "couldnt", "shouldnt", "aint", "without",
    "hardly", "barely", "scarcely",
];

/// Intensity modifiers and how much valence they add toward (positive) or
/// away from (negative) the sentiment word's sign.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("extremely", 0.293),
    ("absolutely", 0.293),
    ("incredibly", 0.293),
    ("totally", 0.293),
    ("utterly", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("so", 0.293),
    ("quite", 0.18),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("marginally", -0.293),
    ("kind", -0.15),
    ("sort", -0.15),
];

/// Lexicon handle used by the sentiment annotator.
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    valences: FxHashMap<&'static str, f64>,
    negators: FxHashSet<&'static str>,
    boosters: FxHashMap<&'static str, f64>,
}

impl Default for ValenceLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceLexicon {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Raw valence for a word, if it carries sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    /// Booster adjustment for a word, if it is an intensity modifier.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Number of valence entries, for provisioning checks.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_signs() {
        let lex = ValenceLexicon::new();
        assert!(lex.valence("wonderful").unwrap() > 0.0);
        assert!(lex.valence("terrible").unwrap() < 0.0);
        assert!(lex.valence("chair").is_none());
    }

    #[test]
    fn test_negators_include_contractions() {
        let lex = ValenceLexicon::new();
        assert!(lex.is_negator("not"));
        assert!(lex.is_negator("dont"));
        assert!(lex.is_negator("wasnt"));
        assert!(!lex.is_negator("very"));
    }

    #[test]
    fn test_boosters_and_dampeners() {
        let lex = ValenceLexicon::new();
        assert!(lex.booster("very").unwrap() > 0.0);
        assert!(lex.booster("slightly").unwrap() < 0.0);
        assert!(lex.booster("cat").is_none());
    }

    #[test]
    fn test_populated() {
        assert!(ValenceLexicon::new().len() > 200);
    }
}
