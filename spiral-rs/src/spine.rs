//! Emoji spine — the four-glyph emotional shorthand.
//!
//! A spine packs an emotional/processing state into four glyphs:
//! anchor (core emotion), body (processing organ), tempo (urgency), and
//! intent (action needed).  `🔥🧠⚡🗯️` reads as "anger, in the mind,
//! urgent, needs to speak truth".
//!
//! The vocabulary tables here are fixed and disjoint; the compiler scans an
//! input sequence for the first glyph belonging to each table and falls back
//! to a default glyph for any table with no match.  Spines are only ever
//! constructed by [`crate::compiler::EmojiCompiler::parse_spine`] and
//! consumed by [`EmojiSpine::to_statement`].

// ── Vocabulary tables ─────────────────────────────────────────────────────────

/// Anchor glyphs: core emotions.
pub const ANCHOR_EMOTIONS: &[(&str, &str)] = &[
    ("❤️", "love"),
    ("🔥", "anger"),
    ("💧", "grief"),
    ("🌞", "joy"),
    ("🕷️", "fear"),
    ("🧊", "dissociation"),
    ("🪄", "hope"),
    ("❓", "confusion"),
    ("🙈", "shame"),
    ("🪨", "resolve"),
];

/// Tempo glyphs: speed/urgency of processing.
pub const TEMPO_MARKERS: &[(&str, &str)] = &[
    ("⚡", "urgent"),
    ("🚨", "crisis"),
    ("🐎", "normal"),
    ("🌊", "flowing"),
    ("🐢", "slow"),
    ("🧘", "sacred"),
];

/// Intent glyphs: the action being asked for.
pub const INTENT_MARKERS: &[(&str, &str)] = &[
    ("🗯️", "speak_truth"),
    ("🆘", "need_help"),
    ("✨", "connect"),
    ("🛑", "set_boundary"),
    ("🔓", "reclaim_power"),
];

/// Default glyph per slot when the input sequence has no match.
pub const DEFAULT_ANCHOR: &str = "❓";
pub const DEFAULT_TEMPO: &str = "🐎";
pub const DEFAULT_INTENT: &str = "✨";
/// Body is not scanned for; every parsed spine defaults to the mind.
pub const DEFAULT_BODY: &str = "🧠";

/// Look a glyph up in one of the vocabulary tables.
pub fn lookup<'t>(table: &[(&str, &'t str)], glyph: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, word)| *word)
}

// ── EmojiSpine ────────────────────────────────────────────────────────────────

/// A parsed emoji spine.
///
/// Immutable once constructed; rendered exactly once into an assignment
/// statement by [`EmojiSpine::to_statement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSpine {
    /// Core emotion (`❤️`, `🔥`, `💧`, …).
    pub anchor: String,
    /// Body part/processing organ (`🧠`, `🫀`, …).
    pub body: String,
    /// Speed/urgency (`⚡`, `🐎`, `🐢`, …).
    pub tempo: String,
    /// Action needed (`🗯️`, `🆘`, `✨`, …).
    pub intent: String,
}

impl EmojiSpine {
    /// Render the spine as a ritual-syntax emotional-state assignment.
    ///
    /// Glyphs missing from their vocabulary table degrade to the words
    /// `unknown` / `normal` / `process` — unreachable through parsing (the
    /// parser only selects table members or table-member defaults) but kept
    /// for directly constructed spines.
    pub fn to_statement(&self) -> String {
        let emotion = lookup(ANCHOR_EMOTIONS, &self.anchor).unwrap_or("unknown");
        let speed = lookup(TEMPO_MARKERS, &self.tempo).unwrap_or("normal");
        let action = lookup(INTENT_MARKERS, &self.intent).unwrap_or("process");
        format!(
            "user.emotional_state = \"{emotion}\"; \
             user.tempo = \"{speed}\"; \
             user.intent = \"{action}\""
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn spine(anchor: &str, tempo: &str, intent: &str) -> EmojiSpine {
        EmojiSpine {
            anchor: anchor.to_owned(),
            body: DEFAULT_BODY.to_owned(),
            tempo: tempo.to_owned(),
            intent: intent.to_owned(),
        }
    }

    #[test]
    fn anger_spine_statement() {
        assert_eq!(
            spine("🔥", "⚡", "🗯️").to_statement(),
            "user.emotional_state = \"anger\"; user.tempo = \"urgent\"; \
             user.intent = \"speak_truth\""
        );
    }

    #[test]
    fn default_glyphs_render_their_table_words() {
        // The parser's fallback glyphs are themselves table members.
        assert_eq!(
            spine(DEFAULT_ANCHOR, DEFAULT_TEMPO, DEFAULT_INTENT).to_statement(),
            "user.emotional_state = \"confusion\"; user.tempo = \"normal\"; \
             user.intent = \"connect\""
        );
    }

    #[test]
    fn unknown_glyphs_degrade_to_fallback_words() {
        assert_eq!(
            spine("🎲", "🎲", "🎲").to_statement(),
            "user.emotional_state = \"unknown\"; user.tempo = \"normal\"; \
             user.intent = \"process\""
        );
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup(ANCHOR_EMOTIONS, "💧"), Some("grief"));
        assert_eq!(lookup(TEMPO_MARKERS, "🐢"), Some("slow"));
        assert_eq!(lookup(INTENT_MARKERS, "🔓"), Some("reclaim_power"));
        assert_eq!(lookup(ANCHOR_EMOTIONS, "🐢"), None);
    }

    #[test]
    fn tables_are_disjoint() {
        for (g, _) in ANCHOR_EMOTIONS {
            assert!(lookup(TEMPO_MARKERS, g).is_none(), "{g} in two tables");
            assert!(lookup(INTENT_MARKERS, g).is_none(), "{g} in two tables");
        }
        for (g, _) in TEMPO_MARKERS {
            assert!(lookup(INTENT_MARKERS, g).is_none(), "{g} in two tables");
        }
    }

    #[test]
    fn variation_selector_keys_are_exact() {
        // Table keys for 🗯️ / ❤️ / 🕷️ carry U+FE0F; the bare code point
        // is a different string and must not match.
        assert_eq!(lookup(INTENT_MARKERS, "🗯\u{fe0f}"), Some("speak_truth"));
        assert_eq!(lookup(INTENT_MARKERS, "🗯"), None);
    }
}
