//! Scripted coding assistant.
//!
//! Responses are templates picked by keyword and filled with surface metrics of the
//! current document. The metrics are presentation heuristics, not static analysis. All
//! randomness comes from an injected RNG so a seeded run is reproducible.

use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::language::LanguageId;
use super::services::ports::AssistantSettings;

pub type RequestId = u64;

const GREETING: &str =
    "Hi! I'm your coding assistant. Ask me to analyze, optimize, explain or generate code.";

pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't process that request right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Analysis,
    Optimization,
    Explanation,
    Generation,
}

/// Keyword routing in fixed priority order: analysis beats optimization beats explanation.
pub fn classify_prompt(prompt: &str) -> ResponseKind {
    let prompt = prompt.to_lowercase();
    if prompt.contains("analyze") || prompt.contains("review") {
        ResponseKind::Analysis
    } else if prompt.contains("optimize") || prompt.contains("improve") {
        ResponseKind::Optimization
    } else if prompt.contains("explain") {
        ResponseKind::Explanation
    } else {
        ResponseKind::Generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeMetrics {
    pub lines: usize,
    pub non_empty_lines: usize,
    pub comment_lines: usize,
    pub functions: usize,
    /// Pseudo-complexity in `1..=10`.
    pub complexity: u8,
    /// `0.0..=100.0`
    pub maintainability: f64,
}

fn decision_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:if|elif|else|for|while|switch|case|catch|except)\b|&&|\|\|").unwrap()
    })
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bfunction\b|=>|\bdef\s+\w+|\bclass\s+\w+").unwrap())
}

pub fn compute_metrics(text: &str) -> CodeMetrics {
    let lines = text.lines().count();
    let non_empty_lines = text.lines().filter(|l| !l.trim().is_empty()).count();
    let comment_lines = text
        .lines()
        .map(str::trim_start)
        .filter(|l| {
            l.starts_with("//")
                || l.starts_with('#')
                || l.starts_with("/*")
                || l.starts_with('*')
                || l.starts_with("<!--")
        })
        .count();
    let functions = function_regex().find_iter(text).count();
    let decisions = decision_regex().find_iter(text).count();
    let complexity = (1 + decisions / 2).clamp(1, 10) as u8;

    let volume = text.chars().count().max(1) as f64;
    let loc = non_empty_lines.max(1) as f64;
    let raw = 171.0 - 5.2 * volume.ln() - 0.23 * f64::from(complexity) - 16.2 * loc.ln();
    let maintainability = (raw * 100.0 / 171.0).clamp(0.0, 100.0);

    CodeMetrics {
        lines,
        non_empty_lines,
        comment_lines,
        functions,
        complexity,
        maintainability,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantResponse {
    pub kind: ResponseKind,
    pub metrics: CodeMetrics,
    pub text: String,
}

/// Builds the scripted reply for `prompt`. Metrics are taken from `context` (the active
/// document), or from the prompt itself when there is no document text.
pub fn generate_response<R: Rng + ?Sized>(
    prompt: &str,
    language: LanguageId,
    context: &str,
    rng: &mut R,
) -> AssistantResponse {
    let kind = classify_prompt(prompt);
    let source = if context.trim().is_empty() {
        prompt
    } else {
        context
    };
    let metrics = compute_metrics(source);

    let text = match kind {
        ResponseKind::Analysis => analysis_reply(language, source, &metrics, rng),
        ResponseKind::Optimization => optimization_reply(language, &metrics, rng),
        ResponseKind::Explanation => explanation_reply(language, source, &metrics),
        ResponseKind::Generation => generation_reply(prompt, language),
    };

    AssistantResponse {
        kind,
        metrics,
        text,
    }
}

fn analysis_reply<R: Rng + ?Sized>(
    language: LanguageId,
    source: &str,
    m: &CodeMetrics,
    rng: &mut R,
) -> String {
    let performance: u8 = rng.gen_range(70..=98);
    let security: u8 = rng.gen_range(75..=99);
    let readability: u8 = rng.gen_range(65..=95);

    let mut suggestions = Vec::new();
    if m.complexity > 5 {
        suggestions.push("Split the larger functions; branching is getting dense.");
    }
    if m.comment_lines == 0 {
        suggestions.push("Add a few comments around the non-obvious parts.");
    }
    match language {
        LanguageId::JavaScript if source.contains("var ") => {
            suggestions.push("Prefer `const`/`let` over `var`.");
        }
        LanguageId::JavaScript if source.contains("==") && !source.contains("===") => {
            suggestions.push("Use strict equality (`===`).");
        }
        LanguageId::Python if !source.contains("->") => {
            suggestions.push("Consider adding type hints to function signatures.");
        }
        _ => {}
    }
    if suggestions.is_empty() {
        suggestions.push("The structure looks reasonable. No obvious issues.");
    }

    let mut out = format!(
        "## Code Analysis ({})\n\n\
         Metrics:\n\
         - Lines: {} ({} non-empty, {} comments)\n\
         - Functions: {}\n\
         - Complexity: {}/10\n\
         - Maintainability index: {:.1}/100\n\n\
         Scores:\n\
         - Performance: {performance}%\n\
         - Security: {security}%\n\
         - Readability: {readability}%\n\n\
         Suggestions:",
        language.display_name(),
        m.lines,
        m.non_empty_lines,
        m.comment_lines,
        m.functions,
        m.complexity,
        m.maintainability,
    );
    for s in suggestions {
        out.push_str("\n- ");
        out.push_str(s);
    }
    out
}

fn optimization_reply<R: Rng + ?Sized>(
    language: LanguageId,
    m: &CodeMetrics,
    rng: &mut R,
) -> String {
    let improvement: u8 = rng.gen_range(10..=40);
    let tips: &[&str] = match language {
        LanguageId::JavaScript => &[
            "Memoize expensive computations (useMemo / useCallback).",
            "Avoid re-creating closures inside render paths.",
            "Batch DOM updates instead of touching the DOM in loops.",
        ],
        LanguageId::Python => &[
            "Use list comprehensions instead of manual append loops.",
            "Cache repeated lookups with functools.lru_cache.",
            "Prefer generators for large sequences.",
        ],
        LanguageId::Html => &[
            "Defer non-critical scripts.",
            "Lazy-load images below the fold.",
        ],
        LanguageId::Css => &[
            "Merge duplicate selectors.",
            "Avoid deeply nested selectors.",
            "Animate transform/opacity instead of layout properties.",
        ],
        _ => &[
            "Remove dead code and unused values.",
            "Hoist repeated work out of loops.",
        ],
    };

    let mut out = format!("## Optimization Suggestions ({})\n", language.display_name());
    for (i, tip) in tips.iter().enumerate() {
        out.push_str(&format!("\n{}. {tip}", i + 1));
    }
    out.push_str(&format!(
        "\n\nEstimated improvement: ~{improvement}% faster\n\
         Complexity: {}/10 now, {}/10 after refactoring",
        m.complexity,
        m.complexity.saturating_sub(1).max(1),
    ));
    out
}

fn explanation_reply(language: LanguageId, source: &str, m: &CodeMetrics) -> String {
    let mut elements = Vec::new();
    if source.contains("import ") || source.contains("require(") {
        elements.push("imports external modules");
    }
    if source.contains("export ") || source.contains("module.exports") {
        elements.push("exports values for other modules");
    }
    if source.contains("class ") {
        elements.push("defines classes");
    }
    if source.contains("useState") || source.contains("useEffect") {
        elements.push("uses React hooks for state");
    }
    if source.contains("async ") || source.contains("await ") {
        elements.push("runs asynchronous code");
    }

    let mut out = format!(
        "## Code Explanation ({})\n\n\
         This file has {} lines and defines {} function(s).",
        language.display_name(),
        m.lines,
        m.functions,
    );
    if elements.is_empty() {
        out.push_str("\nIt is mostly straight-line code.");
    } else {
        out.push_str("\nIt ");
        out.push_str(&elements.join(", "));
        out.push('.');
    }
    out.push_str(&format!(
        "\n\nOverall complexity is {}/10.",
        m.complexity
    ));
    out
}

fn generation_reply(prompt: &str, language: LanguageId) -> String {
    let snippet = match language {
        LanguageId::Python => {
            "def solution(data):\n    result = []\n    for item in data:\n        result.append(item)\n    return result"
        }
        LanguageId::Html => "<section class=\"feature\">\n  <h2>Feature</h2>\n  <p>Describe it here.</p>\n</section>",
        LanguageId::Css => ".feature {\n  display: flex;\n  gap: 1rem;\n}",
        LanguageId::Json => "{\n  \"name\": \"example\",\n  \"enabled\": true\n}",
        _ => {
            "function solution(data) {\n  return data.map((item) => item);\n}"
        }
    };

    format!(
        "## Generated {} code\n\n\
         Based on your request: \"{}\"\n\n\
         ```{}\n{snippet}\n```",
        language.display_name(),
        prompt.trim(),
        language.language_id(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// The scripted request "failed"; the transcript gets the fallback text instead.
    SimulatedFailure,
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::SimulatedFailure => write!(f, "assistant request failed"),
        }
    }
}

impl std::error::Error for AssistantError {}

/// A reply that has been decided but not yet delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub request_id: RequestId,
    pub delay: Duration,
    pub outcome: Result<String, AssistantError>,
}

#[derive(Debug)]
pub struct AssistantState {
    transcript: Vec<ChatMessage>,
    pending: FxHashSet<RequestId>,
    next_request_id: RequestId,
    rng: StdRng,
    delay_ms: (u64, u64),
    failure_rate: f64,
    pub visible: bool,
    pub input: String,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_offset: usize,
    pub view_width: usize,
    pub view_height: usize,
}

/// One display row of the laid-out transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Header(ChatRole),
    Text(String),
    Blank,
    Typing,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new(&AssistantSettings::default())
    }
}

impl AssistantState {
    pub fn new(settings: &AssistantSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let min = settings.delay_min_ms;
        let max = settings.delay_max_ms.max(min);
        Self {
            transcript: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
            }],
            pending: FxHashSet::default(),
            next_request_id: 1,
            rng,
            delay_ms: (min, max),
            failure_rate: settings.failure_rate.clamp(0.0, 1.0),
            visible: true,
            input: String::new(),
            scroll_offset: 0,
            view_width: 40,
            view_height: 10,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Appends `prompt` to the transcript and decides the reply, delay and simulated
    /// failure. Blank prompts are ignored.
    pub fn submit_prompt(
        &mut self,
        prompt: &str,
        language: LanguageId,
        context: &str,
    ) -> Option<PendingReply> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: prompt.to_string(),
        });

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.saturating_add(1);
        self.pending.insert(request_id);

        let response = generate_response(prompt, language, context, &mut self.rng);
        let (min, max) = self.delay_ms;
        let delay = Duration::from_millis(self.rng.gen_range(min..=max));
        let outcome = if self.rng.gen_bool(self.failure_rate) {
            Err(AssistantError::SimulatedFailure)
        } else {
            Ok(response.text)
        };

        tracing::debug!(
            request_id,
            kind = ?response.kind,
            delay_ms = delay.as_millis() as u64,
            failed = outcome.is_err(),
            "assistant reply scheduled"
        );

        Some(PendingReply {
            request_id,
            delay,
            outcome,
        })
    }

    /// Submits the panel's input buffer.
    pub fn submit_input(&mut self, language: LanguageId, context: &str) -> Option<PendingReply> {
        let prompt = std::mem::take(&mut self.input);
        self.submit_prompt(&prompt, language, context)
    }

    /// Lands a reply. Unknown ids are dropped; failures become the fallback text.
    pub fn receive_reply(
        &mut self,
        request_id: RequestId,
        outcome: Result<String, AssistantError>,
    ) -> bool {
        if !self.pending.remove(&request_id) {
            return false;
        }

        let text = match outcome {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(request_id, error = %err, "assistant reply replaced by fallback");
                FALLBACK_REPLY.to_string()
            }
        };
        self.transcript.push(ChatMessage {
            role: ChatRole::Assistant,
            text,
        });
        self.scroll_offset = 0;
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        self.input.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Scrolls within `[0, max_scroll]`.
    pub fn scroll(&mut self, delta: isize) -> bool {
        let prev = self.scroll_offset;
        let next = if delta < 0 {
            prev.saturating_sub(delta.unsigned_abs())
        } else {
            prev.saturating_add(delta as usize)
        };
        self.scroll_offset = next.min(self.max_scroll());
        self.scroll_offset != prev
    }

    pub fn set_view_size(&mut self, width: usize, height: usize) -> bool {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.view_width, self.view_height) {
            return false;
        }
        self.view_width = width;
        self.view_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        true
    }

    pub fn max_scroll(&self) -> usize {
        self.transcript_lines()
            .len()
            .saturating_sub(self.view_height)
    }

    /// Transcript wrapped to `view_width`: a role header, the wrapped text and a blank
    /// separator per message, then a typing marker while a reply is pending.
    pub fn transcript_lines(&self) -> Vec<TranscriptLine> {
        let mut lines = Vec::new();
        for message in &self.transcript {
            lines.push(TranscriptLine::Header(message.role));
            for paragraph in message.text.split('\n') {
                lines.extend(
                    wrap_line(paragraph, self.view_width)
                        .into_iter()
                        .map(TranscriptLine::Text),
                );
            }
            lines.push(TranscriptLine::Blank);
        }
        if self.is_waiting() {
            lines.push(TranscriptLine::Typing);
        }
        lines
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split on graphemes.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_inclusive(' ') {
        let word_width = word.trim_end().width();
        if current_width + word_width > width && !current.is_empty() {
            out.push(current.trim_end().to_string());
            current.clear();
            current_width = 0;
        }

        if word_width > width {
            for grapheme in word.graphemes(true) {
                let w = grapheme.width();
                if current_width + w > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += w;
            }
        } else {
            current.push_str(word);
            current_width += word.width();
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current.trim_end().to_string());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/assistant.rs"]
mod tests;
