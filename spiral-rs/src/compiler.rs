//! Emoji → ritual-syntax compiler.
//!
//! A table-driven, line-oriented translator.  Each input line is classified
//! by an ordered chain of checks — spine parse first, then fixed glyph-set
//! membership tests — and rendered as one ritual statement.  The chain order
//! is load-bearing: the first satisfied branch wins and later branches are
//! never consulted, so reordering changes the language.
//!
//! The compiler is total: malformed input never raises, it degrades to
//! default glyphs or a generic echo statement.

use aho_corasick::AhoCorasick;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::spine::{
    self, EmojiSpine, ANCHOR_EMOTIONS, DEFAULT_ANCHOR, DEFAULT_BODY, DEFAULT_INTENT,
    DEFAULT_TEMPO, INTENT_MARKERS, TEMPO_MARKERS,
};

// ── Glyph extraction ──────────────────────────────────────────────────────────

/// One emoji-class code point, with a directly following U+FE0F variation
/// selector attached so that presentation-style glyphs (`🗯️`, `❤️`, `➡️`)
/// stay whole and compare equal to the vocabulary-table keys.
const GLYPH_PATTERN: &str = "[\u{2702}-\u{27b0}\u{24c2}-\u{1f251}\
                             \u{1f300}-\u{1f5ff}\u{1f600}-\u{1f64f}\
                             \u{1f680}-\u{1f6ff}\u{1f1e0}-\u{1f1ff}]\u{fe0f}?";

// ── EmojiCompiler ─────────────────────────────────────────────────────────────

/// Stateless emoji → ritual translator.
///
/// Holds only the compiled glyph matcher and the per-branch glyph sets;
/// every `compile_*` call is a pure function of its input.
pub struct EmojiCompiler {
    glyphs: Regex,
    voice_glyphs: AhoCorasick,
    conditional_glyphs: AhoCorasick,
    pause_glyphs: AhoCorasick,
    consent_glyphs: AhoCorasick,
}

impl Default for EmojiCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiCompiler {
    pub fn new() -> Self {
        Self {
            glyphs: Regex::new(GLYPH_PATTERN).expect("fixed glyph pattern compiles"),
            voice_glyphs: AhoCorasick::new(["🏰", "🧠"]),
            conditional_glyphs: AhoCorasick::new(["💭", "➡️"]),
            pause_glyphs: AhoCorasick::new(["⏸️", "🛑"]),
            consent_glyphs: AhoCorasick::new(["📋", "✅", "❌"]),
        }
    }

    /// Extract the emoji glyphs of `sequence`, in order.
    pub fn extract_glyphs<'a>(&self, sequence: &'a str) -> Vec<&'a str> {
        self.glyphs
            .find_iter(sequence)
            .map(|m| m.as_str())
            .collect()
    }

    /// Parse an emoji sequence into a spine.
    ///
    /// Returns `None` when fewer than 3 glyphs are present.  Otherwise the
    /// first glyph belonging to each vocabulary table fills the matching
    /// slot; tables with no match fall back to their fixed default glyph.
    /// Never fails on malformed input — lossy translation is the policy.
    pub fn parse_spine(&self, sequence: &str) -> Option<EmojiSpine> {
        let glyphs = self.extract_glyphs(sequence);
        if glyphs.len() < 3 {
            return None;
        }

        let first_in = |table| {
            glyphs
                .iter()
                .find(|g| spine::lookup(table, g).is_some())
                .copied()
        };

        Some(EmojiSpine {
            anchor: first_in(ANCHOR_EMOTIONS).unwrap_or(DEFAULT_ANCHOR).to_owned(),
            body: DEFAULT_BODY.to_owned(),
            tempo: first_in(TEMPO_MARKERS).unwrap_or(DEFAULT_TEMPO).to_owned(),
            intent: first_in(INTENT_MARKERS).unwrap_or(DEFAULT_INTENT).to_owned(),
        })
    }

    /// Compile a single emoji line to one ritual statement.
    ///
    /// Precedence: spine → voice → conditional → pause → consent → phase →
    /// generic echo.  First match wins.
    pub fn compile_line(&self, line: &str) -> String {
        let line: String = line.trim().nfc().collect();

        if let Some(spine) = self.parse_spine(&line) {
            return spine.to_statement();
        }

        if self.voice_glyphs.is_match(&line) {
            compile_voice_invocation(&line)
        } else if self.conditional_glyphs.is_match(&line) {
            compile_conditional(&line)
        } else if self.pause_glyphs.is_match(&line) {
            compile_sacred_pause(&line)
        } else if self.consent_glyphs.is_match(&line) {
            compile_consent(&line)
        } else if line.contains('🌀') {
            compile_spiral_phase(&line)
        } else {
            format!("output.print(\"Emoji expression: {line}\")")
        }
    }

    /// Compile a multi-line emoji program to a complete ritual.
    ///
    /// The header's intent description is derived from the spine of the
    /// first line; the body is one compiled statement per non-blank line.
    /// Pure templated assembly — the result is not validated.
    pub fn compile_ritual(&self, source: &str) -> String {
        let lines: Vec<&str> = source.trim().split('\n').collect();

        let intent_desc = match lines.first().and_then(|l| self.parse_spine(l)) {
            Some(spine) => {
                let emotion = spine::lookup(ANCHOR_EMOTIONS, &spine.anchor).unwrap_or("stable");
                let action = spine::lookup(INTENT_MARKERS, &spine.intent).unwrap_or("support");
                format!("Process {emotion} with {action}")
            }
            None => "Emoji-driven emotional processing".to_owned(),
        };

        let mut out = vec![
            "ritual.emoji_session {".to_owned(),
            format!("    intent: \"{intent_desc}\","),
            "    participants: [user, @healer],".to_owned(),
            "    consent: { required: [\"emotional_support\"] }".to_owned(),
            "}".to_owned(),
            String::new(),
            "execute {".to_owned(),
        ];

        for line in &lines {
            if line.trim().is_empty() {
                continue;
            }
            out.push(format!("    {}", self.compile_line(line)));
        }

        out.push("}".to_owned());
        out.push(String::new());
        out.push("complete {".to_owned());
        out.push("    @healer.honor_completion()".to_owned());
        out.push("}".to_owned());

        out.join("\n")
    }
}

// ── Branch renderers ──────────────────────────────────────────────────────────

/// Voice invocation: `🏰🧠💔` summons the grief keeper, and so on.
fn compile_voice_invocation(line: &str) -> String {
    if line.contains('💔') {
        "@healer.support_grief()".to_owned()
    } else if line.contains('😊') {
        "@sage.share_wisdom()".to_owned()
    } else if line.contains('😰') {
        "@protector.provide_safety()".to_owned()
    } else if line.contains('😡') {
        "@mirror.transform_anger()".to_owned()
    } else {
        "@healer.assess(user.emotional_state)".to_owned()
    }
}

/// Emotional conditional: `💭😢🧘`, `💭🤯`, …
fn compile_conditional(line: &str) -> String {
    if line.contains('😰') && line.contains("🛡️") {
        "if user.emotional_state == \"anxiety\" { @protector.activate_safety() }".to_owned()
    } else if line.contains('😢') && line.contains('🧘') {
        "if user.emotional_state == \"sadness\" { sacred_pause.engage() }".to_owned()
    } else if line.contains('🤯') {
        "if user.bandwidth.current() < 0.3 { sacred_pause.mandatory() }".to_owned()
    } else {
        "if user.needs_support { @healer.respond() }".to_owned()
    }
}

/// Sacred pause: `⏸️` offers, `🛑` mandates.
fn compile_sacred_pause(line: &str) -> String {
    if line.contains('🛑') {
        "sacred_pause.mandatory { purpose: \"Emotional overload protection\" }".to_owned()
    } else {
        "sacred_pause.offer { purpose: \"Processing time\" }".to_owned()
    }
}

/// Consent operation: `📋✅` grants, `📋❌` denies, bare `📋` checks.
fn compile_consent(line: &str) -> String {
    if line.contains('✅') {
        "consent.grant(\"emotional_support\")".to_owned()
    } else if line.contains('❌') {
        "consent.deny(\"deep_processing\")".to_owned()
    } else {
        "consent.check(\"emotional_support\")".to_owned()
    }
}

/// Spiral phase marker: `🌀` plus a phase glyph.
fn compile_spiral_phase(line: &str) -> String {
    if line.contains("👁️") {
        "look_in { @healer.assess(user.current_state) }".to_owned()
    } else if line.contains('🌊') {
        "spiral_up { @healer.guide_processing() }".to_owned()
    } else if line.contains("🕊️") {
        "flow_out { @healer.support_integration() }".to_owned()
    } else {
        "// Spiral phase marker".to_owned()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
