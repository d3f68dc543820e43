//! Dialogue Pools — Flowey's scripted lines, keyed by verdict.
//!
//! All tables are static and non-empty. Selection takes the RNG as a
//! parameter so callers (and tests) decide where randomness comes from.

use super::classifier::Verdict;
use super::expression::Expression;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INTENSE_THRESHOLD: f32 = 0.8;

/// Shown before the visitor has submitted anything.
pub const OPENING_LINE: &str = "* Prove you're human. Make Flowey smile!";

const FALLBACK_LINE: &str = "* ...";

// ── Single-verdict pools ───────────────────────────────────

pub const HAPPY_INTENSE: &[&str] = &[
    "* Golly! That's WONDERFUL! You're such a good friend... aren't you?",
    "* Wow! That makes me SO happy! You really understand me!",
    "* Gosh, you know EXACTLY what to say! I like you already...",
    "* That's amazing! We're going to have SO much fun together!",
    "* Hee hee hee... You're different from the others. I can tell.",
    "* Perfect! You're filled with such beautiful DETERMINATION!",
];

pub const HAPPY_MILD: &[&str] = &[
    "* That's... nice. You seem useful- I mean, friendly!",
    "* Hee hee, how pleasant. You might be worth keeping around.",
    "* How sweet! I'm starting to like you more and more...",
    "* Interesting... You're not as boring as I thought.",
    "* That's good to hear! You're learning to please me.",
];

pub const SAD_INTENSE: &[&str] = &[
    "* Oh... OH. I see how it is. You're just like ALL the others.",
    "* That's... that's HORRIBLE! And here I thought we were friends!",
    "* You really don't care about me at all, do you? Nobody ever does...",
    "* I should have known... Everyone always leaves me in the end.",
    "* Why... why would you say something so cruel? I trusted you!",
    "* Fine. FINE! I don't need you anyway! I don't need ANYONE!",
];

pub const SAD_MILD: &[&str] = &[
    "* That's... not very nice. I thought you cared about me.",
    "* Hmm, that hurts a little. But I suppose I understand...",
    "* I don't like hearing things like that. It makes me feel... empty.",
    "* That makes me sad... But maybe you didn't mean it?",
    "* Oh... I see. Well, I guess not everyone can appreciate me.",
];

pub const MAD_INTENSE: &[&str] = &[
    "* You're really starting to IRRITATE me now!",
    "* I'm getting SICK of your attitude! Watch yourself!",
    "* You know what? I don't LIKE you anymore!",
    "* That's it! I've had ENOUGH of your nonsense!",
    "* You're pushing your luck, human. I suggest you stop.",
    "* UGH! Why do you have to be so ANNOYING?!",
];

pub const MAD_MILD: &[&str] = &[
    "* That's... frustrating. You're testing my patience.",
    "* I don't appreciate that attitude. Not one bit.",
    "* You're starting to get on my nerves...",
    "* That's not very smart of you. I suggest you rethink that.",
    "* I'm warning you... don't push me too far.",
    "* You're making me angry. Is that what you want?",
];

pub const JUMPSCARE_LINES: &[&str] = &[
    "* DIE.",
    "* You IDIOT! In this world, it's KILL or BE KILLED!",
    "* I'll teach you what REAL suffering feels like!",
    "* Hee hee hee... It's me, your 'best friend'... FLOWEY THE FLOWER!",
    "* You think you're SO smart? I'll show you how naive you are!",
    "* FOOLISH! I am the prince of this world's future!",
    "* Finally... someone who understands the REAL me!",
];

pub const NEUTRAL_LINES: &[&str] = &[
    "* Howdy! I'm Flowey. Flowey the Flower! Your best friend!",
    "* What do you want? I have all day... unfortunately.",
    "* ...",
    "* That's... interesting. Tell me more about yourself.",
    "* I see. How... ordinary. But perhaps you have potential?",
    "* Hmm... You're different from most humans. I wonder why...",
    "* Gosh, you're quiet! Don't be shy, we're going to be great friends!",
];

// ── Follow-up pools ────────────────────────────────────────

pub const BETRAYAL: &[&str] = &[
    "* Oh... so you were just PRETENDING to be nice? How... predictable.",
    "* I should have known you'd show your true colors eventually...",
    "* Hee hee... You're learning to hurt people, aren't you? Good.",
    "* There it is! The real you! I KNEW you couldn't stay nice forever!",
];

pub const MANIPULATION: &[&str] = &[
    "* Oh! You DO care about me! I knew you had a good heart!",
    "* See? Isn't it better when we're friends? You should always be nice to me.",
    "* Aww, you don't like seeing me sad? How... sweet. Remember that.",
    "* That's more like it! I knew you'd come around. You're so easy to read.",
];

pub const PERSISTENT_NEGATIVITY: &[&str] = &[
    "* You're REALLY starting to annoy me now...",
    "* Are you TRYING to make me angry? Because it's working.",
    "* I'm getting tired of your attitude. Choose your next words carefully.",
    "* You know what? Maybe I was wrong about you. Maybe you ARE just like the rest.",
];

pub const TRUST_BUILDING: &[&str] = &[
    "* You really GET me, don't you? We're going to be SUCH good friends!",
    "* I can tell you apart from all the others. You're... special.",
    "* Keep saying nice things like that and I might just tell you a secret...",
    "* You know exactly how to make me smile! I'm starting to trust you.",
];

// ── Idle pools ─────────────────────────────────────────────

pub const SINISTER_HINTS: &[&str] = &[
    "* You know... I wasn't always just a flower. I used to be... someone else.",
    "* Sometimes I remember what it was like to feel... nothing. It was so... freeing.",
    "* Do you ever wonder what it would be like to have the power to reset everything?",
    "* I've seen this conversation before, you know. Many, many times...",
    "* In this world... it really is kill or be killed. But you don't know that yet.",
    "* Everyone who's ever cared about me... well, let's just say it didn't end well for them.",
    "* You seem different, but... they all seem different at first. Then they disappoint me.",
    "* I wonder... what would you do if you had the power to control everything?",
    "* Friendship... love... hope... Such beautiful things to destroy, don't you think?",
];

pub const VULNERABLE_LINES: &[&str] = &[
    "* I... I don't have many friends. You won't leave me too, will you?",
    "* Sometimes I get so lonely... It's nice having someone to talk to.",
    "* Everyone always abandons me in the end... But you're different, right?",
    "* I try so hard to be good, but... but it's difficult sometimes.",
    "* Do you think I'm a good person? I... I really want to be good.",
    "* I'm sorry if I seem strange sometimes. I just... I just want to be loved.",
    "* You probably think I'm just a silly flower... but I have feelings too.",
    "* I hope we can stay friends forever and ever... You won't hurt me, will you?",
];

// ── Keys ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Intense,
    Mild,
}

/// Two-step reactions that imply Flowey remembers the last exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// happy → sad
    Betrayal,
    /// sad → happy
    Manipulation,
    /// sad → sad
    PersistentNegativity,
    /// happy → happy
    TrustBuilding,
}

impl FollowUp {
    pub fn for_pair(previous: Expression, current: Expression) -> Option<Self> {
        use Expression::{Happy, Sad};
        match (previous, current) {
            (Happy, Sad) => Some(FollowUp::Betrayal),
            (Sad, Happy) => Some(FollowUp::Manipulation),
            (Sad, Sad) => Some(FollowUp::PersistentNegativity),
            (Happy, Happy) => Some(FollowUp::TrustBuilding),
            _ => None,
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            FollowUp::Betrayal => BETRAYAL,
            FollowUp::Manipulation => MANIPULATION,
            FollowUp::PersistentNegativity => PERSISTENT_NEGATIVITY,
            FollowUp::TrustBuilding => TRUST_BUILDING,
        }
    }
}

/// Pool for one expression and band. Neutral and jumpscare ignore the band.
pub fn pool_for(expression: Expression, band: ConfidenceBand) -> &'static [&'static str] {
    use ConfidenceBand::{Intense, Mild};
    match (expression, band) {
        (Expression::Happy, Intense) => HAPPY_INTENSE,
        (Expression::Happy, Mild) => HAPPY_MILD,
        (Expression::Sad, Intense) => SAD_INTENSE,
        (Expression::Sad, Mild) => SAD_MILD,
        (Expression::Mad, Intense) => MAD_INTENSE,
        (Expression::Mad, Mild) => MAD_MILD,
        (Expression::Jumpscare, _) => JUMPSCARE_LINES,
        (Expression::Neutral, _) => NEUTRAL_LINES,
    }
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or(FALLBACK_LINE)
}

// ── Selector ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogueSelector {
    intense_threshold: f32,
}

impl Default for DialogueSelector {
    fn default() -> Self {
        Self {
            intense_threshold: DEFAULT_INTENSE_THRESHOLD,
        }
    }
}

impl DialogueSelector {
    pub fn with_intense_threshold(intense_threshold: f32) -> Self {
        Self {
            intense_threshold: intense_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn intense_threshold(&self) -> f32 {
        self.intense_threshold
    }

    /// Confidence strictly above the threshold counts as intense.
    pub fn band(&self, confidence: f32) -> ConfidenceBand {
        if confidence > self.intense_threshold {
            ConfidenceBand::Intense
        } else {
            ConfidenceBand::Mild
        }
    }

    pub fn pool(&self, verdict: &Verdict) -> &'static [&'static str] {
        pool_for(verdict.expression, self.band(verdict.confidence))
    }

    /// One line for a single verdict.
    pub fn select_dialogue<R: Rng + ?Sized>(&self, verdict: &Verdict, rng: &mut R) -> &'static str {
        pick(self.pool(verdict), rng)
    }

    /// One line reacting to the move from `previous` to `current`; pairs
    /// without a dedicated pool use [`Self::select_dialogue`].
    pub fn select_follow_up<R: Rng + ?Sized>(
        &self,
        previous: Expression,
        current: &Verdict,
        rng: &mut R,
    ) -> &'static str {
        match FollowUp::for_pair(previous, current.expression) {
            Some(kind) => {
                tracing::debug!("[Dialogue] {} -> {} uses {:?}", previous, current.expression, kind);
                pick(kind.lines(), rng)
            }
            None => self.select_dialogue(current, rng),
        }
    }
}

pub fn sinister_hint<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(SINISTER_HINTS, rng)
}

pub fn vulnerable_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(VULNERABLE_LINES, rng)
}

/// [`DialogueSelector::select_dialogue`] with the default threshold and thread RNG.
pub fn select_dialogue(verdict: &Verdict) -> &'static str {
    DialogueSelector::default().select_dialogue(verdict, &mut rand::thread_rng())
}

/// [`DialogueSelector::select_follow_up`] with the default threshold and thread RNG.
pub fn select_follow_up(previous: Expression, current: &Verdict) -> &'static str {
    DialogueSelector::default().select_follow_up(previous, current, &mut rand::thread_rng())
}
