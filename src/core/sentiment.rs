use crate::domain::model::SentimentLabel;
use crate::domain::ports::PolarityScorer;
use regex::Regex;
use std::collections::HashMap;

/// Compound-score cutoffs. The boundaries are inclusive: a score of exactly
/// `positive` is Positive and exactly `negative` is Negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

/// Maps a message to exactly one sentiment label. Total: any score strictly
/// between the thresholds is Neutral.
pub fn label_sentiment(
    message: &str,
    scorer: &dyn PolarityScorer,
    thresholds: &SentimentThresholds,
) -> SentimentLabel {
    let compound = scorer.compound(message);
    if compound >= thresholds.positive {
        SentimentLabel::Positive
    } else if compound <= thresholds.negative {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

// Tuning constants of the lexicon engine. Raw valences live on a [-4, 4]
// scale and the final score is normalized into [-1, 1].
const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const INTENSITY_INCREMENT: f64 = 0.293;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NEGATION_LOOKBACK: usize = 3;
const INTENSITY_LOOKBACK: usize = 2;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "cannot", "without", "neither", "nor",
];

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "totally",
    "so",
    "incredibly",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "kinda", "marginally"];

/// Word valences. General sentiment vocabulary plus the customer-support
/// domain (delivery damage, delays, billing friction, service quality).
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 3.2),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.9),
    ("fantastic", 3.0),
    ("superb", 3.0),
    ("brilliant", 2.9),
    ("perfect", 3.2),
    ("best", 3.2),
    ("love", 3.2),
    ("happy", 2.7),
    ("glad", 2.2),
    ("grateful", 2.4),
    ("pleased", 2.3),
    ("satisfied", 2.2),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("appreciate", 2.0),
    ("appreciated", 2.1),
    ("please", 1.1),
    ("helpful", 2.1),
    ("help", 1.2),
    ("helped", 1.6),
    ("resolved", 1.8),
    ("friendly", 2.2),
    ("polite", 1.9),
    ("nice", 1.8),
    ("fine", 1.1),
    ("fast", 1.4),
    ("quick", 1.5),
    ("quickly", 1.6),
    ("smooth", 1.5),
    ("smoothly", 1.6),
    ("easy", 1.7),
    ("reliable", 2.0),
    ("trust", 1.8),
    ("acceptable", 1.2),
    // negative
    ("bad", -2.5),
    ("terrible", -3.1),
    ("awful", -2.9),
    ("horrible", -3.0),
    ("worst", -3.1),
    ("hate", -2.7),
    ("angry", -2.3),
    ("furious", -2.9),
    ("upset", -2.1),
    ("unhappy", -2.3),
    ("annoyed", -1.9),
    ("annoying", -2.0),
    ("frustrated", -2.4),
    ("frustrating", -2.5),
    ("disappointed", -2.2),
    ("disappointing", -2.4),
    ("dissatisfied", -2.4),
    ("rude", -2.4),
    ("unacceptable", -2.6),
    ("useless", -2.4),
    ("unreliable", -2.2),
    ("unresolved", -1.9),
    ("problem", -1.6),
    ("problems", -1.7),
    ("issue", -1.2),
    ("issues", -1.3),
    ("error", -1.7),
    ("fail", -2.3),
    ("fails", -2.2),
    ("failed", -2.3),
    ("complaint", -1.8),
    ("complain", -1.7),
    ("damaged", -2.2),
    ("broken", -2.2),
    ("defective", -2.4),
    ("faulty", -2.3),
    ("ruined", -2.7),
    ("crushed", -1.9),
    ("torn", -1.6),
    ("leaking", -1.8),
    ("smashed", -2.3),
    ("wet", -0.9),
    ("missing", -1.6),
    ("missed", -1.2),
    ("lost", -2.0),
    ("stolen", -2.6),
    ("late", -1.5),
    ("delay", -1.4),
    ("delayed", -1.7),
    ("slow", -1.3),
    ("waiting", -0.9),
    ("wrong", -2.1),
    ("overcharged", -2.2),
    ("expensive", -1.2),
    ("scam", -2.9),
    ("fraud", -3.0),
    ("difficult", -1.5),
    ("impossible", -2.2),
    ("confused", -1.3),
    ("confusing", -1.6),
    ("sorry", -0.8),
];

/// Lexicon/rule polarity engine. Holds its fixed lexicon and token pattern
/// at construction; scoring is pure and deterministic.
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    token_pattern: Regex,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            token_pattern: Regex::new(r"[a-z']+").expect("token pattern is valid"),
        }
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&raw) = self.lexicon.get(*token) else {
                continue;
            };
            let mut valence = raw;

            // Intensity words in the two preceding tokens push the valence
            // further from or closer to zero.
            let intensity_start = i.saturating_sub(INTENSITY_LOOKBACK);
            for prior in &tokens[intensity_start..i] {
                if BOOSTERS.contains(prior) {
                    valence += INTENSITY_INCREMENT * raw.signum();
                } else if DAMPENERS.contains(prior) {
                    valence -= INTENSITY_INCREMENT * raw.signum();
                }
            }

            // A negator within the three preceding tokens flips the valence.
            let negation_start = i.saturating_sub(NEGATION_LOOKBACK);
            if tokens[negation_start..i].iter().any(|t| Self::is_negator(t)) {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        if sum == 0.0 {
            return 0.0;
        }

        let emphasis =
            lowered.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCREMENT;
        sum += emphasis * sum.signum();

        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}
