//! Line-oriented ritual interpreter.
//!
//! The [`Interpreter`] walks program text one line at a time and dispatches
//! each line through a fixed, ordered list of substring predicates — first
//! match wins, later rules are never consulted.  The order is part of the
//! language and must not be rearranged.
//!
//! There is intentionally no block-nesting state: `execute {`, `look_in {`
//! and friends are announcement lines, `if`/`for each` bodies are never
//! branched on.  Any line whose execution fails aborts the whole run; the
//! caller receives the output produced so far plus an error tagged with the
//! 1-based line number.  Prior state is never rolled back.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use unicode_normalization::UnicodeNormalization;

use super::expand::substitute;

// ── Prompt callback ───────────────────────────────────────────────────────────

/// A callback that resolves an `input.ask` prompt to one line of user text.
/// The interpreter itself never touches stdin; the CLI installs a real
/// reader, tests install closures.
pub type PromptFn = Box<dyn FnMut(&str) -> Result<String, String>>;

/// A [`PromptFn`] that prints the prompt and blocks on one stdin line.
pub fn stdin_prompt() -> PromptFn {
    Box::new(|prompt| {
        print!("{prompt}");
        std::io::stdout()
            .flush()
            .map_err(|e| format!("prompt write failed: {e}"))?;
        let mut line = String::new();
        let n = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("input read failed: {e}"))?;
        if n == 0 {
            return Err("unexpected end of input".to_owned());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_owned())
    })
}

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Structured result of one [`Interpreter::run`] call.
///
/// Failures are values, not panics: a failed line yields `success = false`,
/// the offending 1-based line number inside `error`, and whatever output and
/// variable state had accumulated before the failure.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub success: bool,
    /// Every line printed by the program, in order.
    pub output: Vec<String>,
    /// `Line {n}: {message}` on failure.
    pub error: Option<String>,
    /// Final variable bindings (partial on failure).
    pub variables: BTreeMap<String, String>,
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// Best-effort executor for ritual-syntax text.
pub struct Interpreter {
    /// Variable store; last write wins.  Ordered so substitution and
    /// reporting are deterministic.
    variables: BTreeMap<String, String>,
    /// Consent domain → granted.  Absent domains count as granted.
    consent: BTreeMap<String, bool>,
    /// Lines printed so far in the current run.
    pub output: Vec<String>,
    /// Resolver for `input.ask`; `None` makes `input.ask` a line error.
    pub prompt: Option<PromptFn>,
    /// When set, emitted lines are also printed immediately, so interactive
    /// prompts interleave with program output.
    pub live: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
            consent: BTreeMap::new(),
            output: Vec::new(),
            prompt: None,
            live: false,
        }
    }

    /// Run a complete program.
    ///
    /// State is reset at entry — nothing carries over between runs.  Blank
    /// lines and `//` comments are skipped; every other line is executed in
    /// order until the end of input or the first failing line.
    pub fn run(&mut self, source: &str) -> RunOutcome {
        self.variables.clear();
        self.consent.clear();
        self.output.clear();

        for (idx, raw) in source.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if let Err(e) = self.exec_line(line) {
                return RunOutcome {
                    success: false,
                    output: self.output.clone(),
                    error: Some(format!("Line {}: {e}", idx + 1)),
                    variables: self.variables.clone(),
                };
            }
        }

        RunOutcome {
            success: true,
            output: self.output.clone(),
            error: None,
            variables: self.variables.clone(),
        }
    }

    /// Execute one trimmed, non-comment line.
    ///
    /// Dispatch order (fixed): print → voice → input → consent → pause →
    /// assignment → structural announcement → silent no-op.
    fn exec_line(&mut self, line: &str) -> Result<(), String> {
        if line.contains("output.print(") {
            let message = self.extract_arg(line, "output.print")?;
            self.emit(message);
        } else if line.contains('@') && line.contains(".speak") {
            self.handle_voice_speak(line);
        } else if line.contains("input.ask(") {
            self.handle_input_ask(line)?;
        } else if line.contains("consent.") {
            self.handle_consent(line)?;
        } else if line.contains("sacred_pause.") {
            self.handle_sacred_pause(line);
        } else if line.contains('=') && !line.ends_with('{') {
            self.handle_assignment(line);
        } else if line.starts_with("ritual.") {
            self.emit(format!("Starting ritual: {line}"));
        } else if line == "execute {" {
            self.emit("Executing ritual...".to_owned());
        } else if line == "complete {" {
            self.emit("Completing ritual...".to_owned());
        } else if matches!(line, "look_in {" | "spiral_up {" | "flow_out {") {
            let phase = line.trim_end_matches(" {");
            self.emit(format!("Entering {phase} phase"));
        }
        // Everything else: unrecognized, deliberately ignored.
        Ok(())
    }

    // ── Statement handlers ────────────────────────────────────────────────────

    /// `@healer.speak { message: "...", tone: "..." }` — resolve the voice by
    /// substring, pull the `message:` field up to the next comma or brace.
    fn handle_voice_speak(&mut self, line: &str) {
        let voice = if line.contains("@healer") {
            "Healer"
        } else if line.contains("@sage") {
            "Sage"
        } else if line.contains("@mirror") {
            "Mirror"
        } else {
            "Voice"
        };

        if let Some(pos) = line.find("message:") {
            let rest = &line[pos + "message:".len()..];
            let end = match rest.find(',') {
                Some(i) => i,
                None => rest.find('}').unwrap_or(rest.len()),
            };
            let message = rest[..end]
                .trim()
                .trim_matches(|c| c == '"' || c == '\'');
            let message = substitute(message, &self.variables);
            self.emit(format!("{voice}: {message}"));
        } else {
            self.emit(format!("{voice} speaks"));
        }
    }

    /// `user.name = input.ask("prompt")` — one blocking line read through the
    /// injected prompt callback.
    fn handle_input_ask(&mut self, line: &str) -> Result<(), String> {
        let prompt_text = self.extract_arg(line, "input.ask")?;
        let ask = self
            .prompt
            .as_mut()
            .ok_or_else(|| "input.ask: no input source available".to_owned())?;
        let response = ask(&format!("{prompt_text}: "))?;

        if line.contains('=') {
            let name = line.split('=').next().unwrap_or("").trim().to_owned();
            self.variables.insert(name, response);
        }
        Ok(())
    }

    /// `consent.check(domain)` reports; `consent.request(domain)` auto-grants.
    /// Other consent forms (grant/deny as emitted by the compiler) are
    /// consumed without effect.
    fn handle_consent(&mut self, line: &str) -> Result<(), String> {
        if line.contains("consent.check(") {
            let domain = self.extract_arg(line, "consent.check")?;
            // Unknown domains default to granted — demo policy.
            let granted = self.consent.get(&domain).copied().unwrap_or(true);
            let status = if granted { "Granted" } else { "Denied" };
            self.emit(format!("Checking consent for '{domain}': {status}"));
        } else if line.contains("consent.request(") {
            let domain = self.extract_arg(line, "consent.request")?;
            self.consent.insert(domain.clone(), true);
            self.emit(format!("Requesting consent for '{domain}': Granted"));
        }
        Ok(())
    }

    /// Sacred pauses acknowledge and move on — no delay, no state change.
    fn handle_sacred_pause(&mut self, line: &str) {
        if line.contains("sacred_pause.offer") {
            self.emit("Sacred pause offered - taking a moment...".to_owned());
        } else if line.contains("sacred_pause.engage") {
            self.emit("Sacred pause engaged - restoring emotional bandwidth...".to_owned());
        }
    }

    /// `name = value` — also handles `;`-chained assignments so a compiled
    /// spine statement binds its three variables separately.
    fn handle_assignment(&mut self, line: &str) {
        for segment in line.split(';') {
            if let Some((name, value)) = segment.split_once('=') {
                let value = strip_quotes(value.trim());
                self.variables
                    .insert(name.trim().to_owned(), value.to_owned());
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Extract the argument of `func(...)` from `line`: outermost quotes
    /// stripped, variables substituted.  Errors when the closing paren is
    /// missing.
    fn extract_arg(&self, line: &str, func: &str) -> Result<String, String> {
        let open = format!("{func}(");
        let start = line
            .find(&open)
            .ok_or_else(|| format!("{func}: malformed call"))?
            + open.len();
        let end = line
            .rfind(')')
            .filter(|&end| end >= start)
            .ok_or_else(|| format!("{func}: missing closing ')'"))?;
        let arg = strip_quotes(line[start..end].trim());
        Ok(substitute(arg, &self.variables))
    }

    /// Append to the output buffer (NFC-normalized), echoing when live.
    fn emit(&mut self, message: String) {
        let message: String = message.nfc().collect();
        if self.live {
            println!("{message}");
        }
        self.output.push(message);
    }
}

/// Strip one pair of surrounding matching quotes, if present.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str) -> RunOutcome {
        Interpreter::new().run(src)
    }

    #[test]
    fn print_literal() {
        let out = run("output.print(\"Hello\")");
        assert!(out.success);
        assert_eq!(out.output, vec!["Hello"]);
    }

    #[test]
    fn print_substitutes_bound_variable() {
        let out = run("user.name = \"Ann\"\noutput.print(user.name)");
        assert!(out.success);
        assert_eq!(out.output, vec!["Ann"]);
        assert_eq!(out.variables.get("user.name").map(String::as_str), Some("Ann"));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let out = run("// a comment\n\noutput.print(\"x\")\n   \n// done");
        assert_eq!(out.output, vec!["x"]);
    }

    #[test]
    fn assignment_strips_single_or_double_quotes() {
        let out = run("a = \"one\"\nb = 'two'\nc = three");
        assert_eq!(out.variables.get("a").map(String::as_str), Some("one"));
        assert_eq!(out.variables.get("b").map(String::as_str), Some("two"));
        assert_eq!(out.variables.get("c").map(String::as_str), Some("three"));
    }

    #[test]
    fn chained_assignment_binds_each_segment() {
        let out = run(
            "user.emotional_state = \"anger\"; user.tempo = \"urgent\"; \
             user.intent = \"speak_truth\"",
        );
        assert!(out.success);
        assert_eq!(
            out.variables.get("user.emotional_state").map(String::as_str),
            Some("anger")
        );
        assert_eq!(out.variables.get("user.tempo").map(String::as_str), Some("urgent"));
        assert_eq!(
            out.variables.get("user.intent").map(String::as_str),
            Some("speak_truth")
        );
    }

    #[test]
    fn last_write_wins() {
        let out = run("x = \"old\"\nx = \"new\"");
        assert_eq!(out.variables.get("x").map(String::as_str), Some("new"));
    }

    #[test]
    fn voice_speak_with_message() {
        let out = run("@healer.speak { message: \"You are safe\", tone: \"gentle\" }");
        assert_eq!(out.output, vec!["Healer: You are safe"]);
    }

    #[test]
    fn voice_speak_substitutes_variables() {
        let out = run("user.name = \"Ann\"\n@sage.speak { message: \"Welcome user.name\" }");
        assert_eq!(out.output, vec!["Sage: Welcome Ann"]);
    }

    #[test]
    fn voice_speak_without_message_field() {
        let out = run("@mirror.speak {");
        assert_eq!(out.output, vec!["Mirror speaks"]);
    }

    #[test]
    fn unknown_voice_falls_back() {
        let out = run("@translator.speak { message: \"hola\" }");
        assert_eq!(out.output, vec!["Voice: hola"]);
    }

    #[test]
    fn consent_check_defaults_to_granted() {
        let out = run("consent.check(\"emotional_support\")");
        assert!(out.success);
        assert_eq!(
            out.output,
            vec!["Checking consent for 'emotional_support': Granted"]
        );
    }

    #[test]
    fn consent_request_then_check() {
        let out = run("consent.request(\"deep_processing\")\nconsent.check(\"deep_processing\")");
        assert_eq!(
            out.output,
            vec![
                "Requesting consent for 'deep_processing': Granted",
                "Checking consent for 'deep_processing': Granted",
            ]
        );
    }

    #[test]
    fn compiler_emitted_consent_forms_are_ignored() {
        let out = run("consent.grant(\"emotional_support\")");
        assert!(out.success);
        assert!(out.output.is_empty());
    }

    #[test]
    fn sacred_pause_wording() {
        let out = run("sacred_pause.offer { purpose: \"rest\" }\nsacred_pause.engage()");
        assert_eq!(
            out.output,
            vec![
                "Sacred pause offered - taking a moment...",
                "Sacred pause engaged - restoring emotional bandwidth...",
            ]
        );
    }

    #[test]
    fn structural_lines_announce_only() {
        let out = run(
            "ritual.greeting {\nexecute {\nlook_in {\nspiral_up {\nflow_out {\ncomplete {",
        );
        assert_eq!(
            out.output,
            vec![
                "Starting ritual: ritual.greeting {",
                "Executing ritual...",
                "Entering look_in phase",
                "Entering spiral_up phase",
                "Entering flow_out phase",
                "Completing ritual...",
            ]
        );
    }

    #[test]
    fn unrecognized_lines_are_ignored() {
        let out = run("intent: \"Demonstrate\",\nparticipants: [user, @sage],\n}");
        assert!(out.success);
        assert!(out.output.is_empty());
    }

    #[test]
    fn input_ask_binds_response() {
        let mut interp = Interpreter::new();
        interp.prompt = Some(Box::new(|prompt| {
            assert_eq!(prompt, "What name?: ");
            Ok("Ann".to_owned())
        }));
        let out = interp.run("user.name = input.ask(\"What name?\")\noutput.print(user.name)");
        assert!(out.success);
        assert_eq!(out.output, vec!["Ann"]);
    }

    #[test]
    fn input_ask_without_assignment_discards_response() {
        let mut interp = Interpreter::new();
        interp.prompt = Some(Box::new(|_| Ok("ignored".to_owned())));
        let out = interp.run("input.ask(\"Press enter\")");
        assert!(out.success);
        assert!(out.variables.is_empty());
    }

    #[test]
    fn input_ask_without_prompt_source_fails_with_line_number() {
        let out = run("output.print(\"one\")\nuser.x = input.ask(\"?\")");
        assert!(!out.success);
        let err = out.error.unwrap();
        assert!(err.starts_with("Line 2:"), "{err}");
        // Output up to the failure is retained.
        assert_eq!(out.output, vec!["one"]);
    }

    #[test]
    fn malformed_call_missing_paren_fails() {
        let mut interp = Interpreter::new();
        interp.prompt = Some(Box::new(|_| Ok(String::new())));
        let out = interp.run("user.x = input.ask(\"oops\"");
        assert!(!out.success);
        let err = out.error.unwrap();
        assert!(err.starts_with("Line 1:"), "{err}");
        assert!(err.contains("missing closing"), "{err}");
    }

    #[test]
    fn failing_line_keeps_prior_state() {
        let out = run("x = \"kept\"\noutput.print(\"kept too\")\ninput.ask(\"boom\")");
        assert!(!out.success);
        assert_eq!(out.variables.get("x").map(String::as_str), Some("kept"));
        assert_eq!(out.output, vec!["kept too"]);
    }

    #[test]
    fn state_is_isolated_between_runs() {
        let mut interp = Interpreter::new();
        let first = interp.run("x = \"1\"\noutput.print(\"a\")");
        assert!(first.success);
        let second = interp.run("output.print(\"b\")");
        assert!(second.variables.is_empty());
        assert_eq!(second.output, vec!["b"]);
    }

    #[test]
    fn conditional_lines_are_not_branched() {
        // `if` lines fall into the assignment rule (they contain `=` and do
        // not end with `{`) — a documented limitation of this tier.
        let out = run("if user.emotional_state == \"anxiety\" { @protector.activate_safety() }");
        assert!(out.success);
        assert!(out.output.is_empty());
        assert!(out.variables.contains_key("if user.emotional_state"));
    }

    #[test]
    fn compiled_spine_round_trip() {
        let compiler = crate::compiler::EmojiCompiler::new();
        let ritual = compiler.compile_ritual("🔥🧠⚡🗯️");
        let out = Interpreter::new().run(&ritual);
        assert!(out.success, "{:?}", out.error);
        assert_eq!(
            out.variables.get("user.emotional_state").map(String::as_str),
            Some("anger")
        );
        assert_eq!(out.variables.get("user.tempo").map(String::as_str), Some("urgent"));
        assert_eq!(
            out.variables.get("user.intent").map(String::as_str),
            Some("speak_truth")
        );
    }
}
