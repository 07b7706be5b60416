//! Rule/lexicon part-of-speech tagger
//!
//! Closed-class word lists plus a verb lexicon with light morphology and
//! suffix heuristics. Unknown open-class words default to common noun,
//! which is the conservative choice for theme extraction.

use crate::types::PosTag;
use rustc_hash::{FxHashMap, FxHashSet};

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "both", "either", "neither", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "who", "whom",
    "mine", "yours", "his", "hers", "ours", "theirs", "my", "your", "its", "our", "their",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves", "someone",
    "anyone", "everyone", "nobody", "something", "anything", "everything", "nothing",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "under", "over", "near", "across", "behind", "beyond", "without", "within", "upon", "off",
    "onto", "toward", "towards", "along", "among", "around", "despite", "except", "inside",
    "outside", "per", "since", "until",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "while", "if", "unless",
    "whereas", "though", "than", "whether", "once", "when", "where", "as",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "can", "could", "shall", "should", "may", "might", "must", "isnt",
    "arent", "wasnt", "werent", "dont", "doesnt", "didnt", "cant", "cannot", "couldnt", "wont",
    "wouldnt", "shouldnt", "havent", "hasnt", "hadnt",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "well", "often", "always", "never", "sometimes", "usually", "again",
    "still", "just", "almost", "quite", "rather", "soon", "already", "yet", "here", "there",
    "now", "then", "not", "maybe", "perhaps", "instead", "together", "away", "back", "even",
    "ever", "really",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "great", "big", "small", "large", "little", "old", "new", "young", "long",
    "short", "high", "low", "hot", "cold", "warm", "cool", "happy", "sad", "angry", "beautiful",
    "ugly", "nice", "fine", "poor", "rich", "fast", "slow", "early", "late", "hard", "easy",
    "soft", "strong", "weak", "dark", "deep", "shallow", "wide", "narrow", "heavy", "clean",
    "dirty", "dry", "wet", "empty", "full", "free", "busy", "cheap", "expensive", "quiet",
    "loud", "safe", "dangerous", "simple", "complex", "important", "possible", "impossible",
    "real", "true", "false", "right", "wrong", "same", "different", "certain", "sure", "ready",
    "common", "rare", "major", "minor", "main", "whole", "terrible", "horrible", "excellent",
    "perfect", "awful", "amazing", "entire", "several", "many", "few", "much", "more", "most",
    "less", "least", "other", "next", "last", "first", "second", "third",
];

/// Base forms of verbs recognized by the tagger.
const VERB_STEMS: &[&str] = &[
    "accept", "add", "agree", "allow", "analyze", "announce", "answer", "appear", "apply",
    "argue", "arrive", "ask", "attack", "attend", "avoid", "bear", "beat", "become", "begin",
    "believe", "belong", "break", "bring", "build", "buy", "call", "carry", "catch", "cause",
    "change", "chase", "check", "choose", "claim", "climb", "close", "collect", "come",
    "compare", "complete", "consider", "contain", "continue", "cook", "cost", "cover", "create",
    "cross", "cry", "cut", "dance", "decide", "deliver", "describe", "design", "destroy",
    "develop", "die", "discover", "discuss", "draw", "dream", "drink", "drive", "drop", "earn",
    "eat", "employ", "enjoy", "enter", "examine", "expect", "explain", "express", "face",
    "fail", "fall", "feed", "feel", "fight", "fill", "find", "finish", "fly", "focus",
    "follow", "forget", "gain", "give", "go", "grow", "happen", "hate", "hear", "help", "hide",
    "hit", "hold", "improve", "include", "increase", "intend", "introduce", "invite", "join",
    "jump", "keep", "kill", "know", "laugh", "lead", "learn", "leave", "lie", "like", "listen",
    "live", "look", "lose", "love", "make", "manage", "mean", "meet", "mention", "miss",
    "move", "need", "notice", "obtain", "occur", "offer", "own", "pass", "pay", "perform",
    "pick", "play", "prefer", "prepare", "press", "prevent", "produce", "promise", "protect",
    "prove", "provide", "publish", "pull", "push", "put", "raise", "reach", "read", "realize",
    "receive", "recognize", "reduce", "refer", "reflect", "refuse", "remain", "remember",
    "remove", "repeat", "replace", "reply", "represent", "require", "return", "reveal", "ride",
    "rise", "run", "save", "say", "see", "seem", "sell", "send", "serve", "set", "shake",
    "shout", "show", "shut", "sing", "sit", "sleep", "speak", "spend", "stand", "start",
    "stay", "stop", "succeed", "suffer", "suggest", "supply", "suppose", "take", "talk",
    "teach", "tell", "tend", "thank", "think", "throw", "touch", "travel", "try", "turn",
    "understand", "use", "visit", "wait", "walk", "want", "warn", "wash", "watch", "wear",
    "win", "wish", "work", "worry", "write",
];

/// Irregular past forms mapped to their base verb.
const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("ate", "eat"),
    ("became", "become"),
    ("began", "begin"),
    ("bought", "buy"),
    ("broke", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("drank", "drink"),
    ("drew", "draw"),
    ("drove", "drive"),
    ("fell", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("forgot", "forget"),
    ("fought", "fight"),
    ("found", "find"),
    ("gave", "give"),
    ("grew", "grow"),
    ("heard", "hear"),
    ("held", "hold"),
    ("hid", "hide"),
    ("kept", "keep"),
    ("knew", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rode", "ride"),
    ("rose", "rise"),
    ("said", "say"),
    ("sang", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("sent", "send"),
    ("shook", "shake"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("stood", "stand"),
    ("taught", "teach"),
    ("thought", "think"),
    ("threw", "throw"),
    ("told", "tell"),
    ("took", "take"),
    ("understood", "understand"),
    ("went", "go"),
    ("won", "win"),
    ("wore", "wear"),
    ("wrote", "write"),
];

/// Part-of-speech lexicon and tagging rules.
#[derive(Debug, Clone)]
pub struct PosLexicon {
    determiners: FxHashSet<&'static str>,
    pronouns: FxHashSet<&'static str>,
    prepositions: FxHashSet<&'static str>,
    conjunctions: FxHashSet<&'static str>,
    auxiliaries: FxHashSet<&'static str>,
    adverbs: FxHashSet<&'static str>,
    adjectives: FxHashSet<&'static str>,
    verb_stems: FxHashSet<&'static str>,
    irregular_past: FxHashMap<&'static str, &'static str>,
}

impl Default for PosLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PosLexicon {
    pub fn new() -> Self {
        Self {
            determiners: DETERMINERS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            prepositions: PREPOSITIONS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            verb_stems: VERB_STEMS.iter().copied().collect(),
            irregular_past: IRREGULAR_PAST.iter().copied().collect(),
        }
    }

    /// Total number of lexicon entries, for provisioning checks.
    pub fn len(&self) -> usize {
        self.determiners.len()
            + self.pronouns.len()
            + self.prepositions.len()
            + self.conjunctions.len()
            + self.auxiliaries.len()
            + self.adverbs.len()
            + self.adjectives.len()
            + self.verb_stems.len()
            + self.irregular_past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag a lowercased word. `prev` is the tag of the preceding token in
    /// the same sentence, used to disambiguate -ing/-ed forms.
    pub fn tag(&self, word: &str, prev: Option<PosTag>) -> PosTag {
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Number;
        }
        if self.determiners.contains(word) {
            return PosTag::Determiner;
        }
        if self.pronouns.contains(word) {
            return PosTag::Pronoun;
        }
        if self.prepositions.contains(word) {
            return PosTag::Preposition;
        }
        if self.conjunctions.contains(word) {
            return PosTag::Conjunction;
        }
        if self.auxiliaries.contains(word) {
            return PosTag::Auxiliary;
        }
        if self.verb_lemma(word).is_some() {
            return PosTag::Verb;
        }
        if self.adjectives.contains(word) {
            return PosTag::Adjective;
        }
        if self.adverbs.contains(word) || (word.ends_with("ly") && word.len() > 4) {
            return PosTag::Adverb;
        }
        if word.ends_with("ous")
            || word.ends_with("ful")
            || word.ends_with("ive")
            || word.ends_with("less")
            || word.ends_with("ish") && word.len() > 5
        {
            return PosTag::Adjective;
        }
        // Unknown -ing/-ed forms: verb after an auxiliary or pronoun,
        // attributive adjective otherwise.
        if word.ends_with("ing") || word.ends_with("ed") {
            return match prev {
                Some(PosTag::Auxiliary) | Some(PosTag::Pronoun) => PosTag::Verb,
                _ => PosTag::Adjective,
            };
        }
        PosTag::Noun
    }

    /// Naive lemma for a tagged word.
    pub fn lemma(&self, word: &str, pos: PosTag) -> String {
        match pos {
            PosTag::Verb => self
                .verb_lemma(word)
                .unwrap_or_else(|| word.to_string()),
            PosTag::Noun => singularize(word),
            _ => word.to_string(),
        }
    }

    /// Resolve a word to a known verb base form, if it has one.
    fn verb_lemma(&self, word: &str) -> Option<String> {
        if self.verb_stems.contains(word) {
            return Some(word.to_string());
        }
        if let Some(base) = self.irregular_past.get(word) {
            return Some((*base).to_string());
        }
        for candidate in inflection_stems(word) {
            if self.verb_stems.contains(candidate.as_str()) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Candidate base forms for an inflected word (-s, -es, -ies, -ed, -ing,
/// with doubled-consonant and dropped-e repair).
fn inflection_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    let mut push = |s: String| {
        if s.len() >= 2 && !stems.contains(&s) {
            stems.push(s);
        }
    };

    if let Some(base) = word.strip_suffix("ies") {
        push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("es") {
        push(base.to_string());
    }
    if let Some(base) = word.strip_suffix('s') {
        if !base.ends_with('s') {
            push(base.to_string());
        }
    }
    if let Some(base) = word.strip_suffix("ied") {
        push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("ed") {
        push(base.to_string());
        push(dedouble(base));
    }
    if let Some(base) = word.strip_suffix('d') {
        push(base.to_string());
    }
    if let Some(base) = word.strip_suffix("ing") {
        push(base.to_string());
        push(dedouble(base));
        push(format!("{base}e"));
    }

    stems
}

/// Drop a doubled final consonant ("stopp" -> "stop").
fn dedouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        chars[..chars.len() - 1].iter().collect()
    } else {
        stem.to_string()
    }
}

/// Strip common plural endings from a noun.
fn singularize(word: &str) -> String {
    if word.len() > 4 {
        if let Some(base) = word.strip_suffix("ies") {
            return format!("{base}y");
        }
    }
    if word.len() > 3
        && (word.ends_with("ses")
            || word.ends_with("xes")
            || word.ends_with("ches")
            || word.ends_with("shes"))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> PosLexicon {
        PosLexicon::new()
    }

    #[test]
    fn test_closed_classes() {
        let lex = lexicon();
        assert_eq!(lex.tag("the", None), PosTag::Determiner);
        assert_eq!(lex.tag("he", None), PosTag::Pronoun);
        assert_eq!(lex.tag("on", None), PosTag::Preposition);
        assert_eq!(lex.tag("and", None), PosTag::Conjunction);
        assert_eq!(lex.tag("is", None), PosTag::Auxiliary);
    }

    #[test]
    fn test_verb_recognition() {
        let lex = lexicon();
        assert_eq!(lex.tag("visit", None), PosTag::Verb);
        assert_eq!(lex.tag("visited", None), PosTag::Verb);
        assert_eq!(lex.tag("visits", None), PosTag::Verb);
        assert_eq!(lex.tag("chased", None), PosTag::Verb);
        assert_eq!(lex.tag("sat", None), PosTag::Verb);
        assert_eq!(lex.tag("works", None), PosTag::Verb);
        assert_eq!(lex.tag("sitting", None), PosTag::Verb);
        assert_eq!(lex.tag("making", None), PosTag::Verb);
    }

    #[test]
    fn test_verb_lemmas() {
        let lex = lexicon();
        assert_eq!(lex.lemma("chased", PosTag::Verb), "chase");
        assert_eq!(lex.lemma("sat", PosTag::Verb), "sit");
        assert_eq!(lex.lemma("works", PosTag::Verb), "work");
        assert_eq!(lex.lemma("carries", PosTag::Verb), "carry");
    }

    #[test]
    fn test_unknown_defaults_to_noun() {
        let lex = lexicon();
        assert_eq!(lex.tag("cat", None), PosTag::Noun);
        assert_eq!(lex.tag("mat", None), PosTag::Noun);
        assert_eq!(lex.tag("acme", None), PosTag::Noun);
    }

    #[test]
    fn test_suffix_heuristics() {
        let lex = lexicon();
        assert_eq!(lex.tag("quickly", None), PosTag::Adverb);
        assert_eq!(lex.tag("wonderful", None), PosTag::Adjective);
        assert_eq!(lex.tag("dangerous", None), PosTag::Adjective);
    }

    #[test]
    fn test_number() {
        let lex = lexicon();
        assert_eq!(lex.tag("2020", None), PosTag::Number);
        assert_eq!(lex.tag("7", None), PosTag::Number);
    }

    #[test]
    fn test_noun_singularization() {
        let lex = lexicon();
        assert_eq!(lex.lemma("cats", PosTag::Noun), "cat");
        assert_eq!(lex.lemma("cities", PosTag::Noun), "city");
        assert_eq!(lex.lemma("glass", PosTag::Noun), "glass");
        assert_eq!(lex.lemma("bus", PosTag::Noun), "bus");
    }

    #[test]
    fn test_ing_disambiguation_uses_context() {
        let lex = lexicon();
        // after a pronoun: predicate
        assert_eq!(lex.tag("zorbing", Some(PosTag::Pronoun)), PosTag::Verb);
        // after a determiner: attributive
        assert_eq!(lex.tag("zorbing", Some(PosTag::Determiner)), PosTag::Adjective);
    }

    #[test]
    fn test_lexicon_is_populated() {
        assert!(!lexicon().is_empty());
    }
}
