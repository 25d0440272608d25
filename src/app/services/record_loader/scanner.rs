//! Span scanning for concatenated JSON object literals
//!
//! The coordinate asset contains object literals emitted back-to-back with no
//! reliable delimiter: sometimes a newline, sometimes whitespace, sometimes
//! nothing at all. This module locates the individual literals with a single
//! pass that tracks nested-brace depth and string-literal state, so braces
//! inside quoted values never split a span. A pattern split on `}{` is known
//! to corrupt exactly that case and is deliberately not used anywhere.

/// One candidate object literal located in the raw input
///
/// A span is `complete` when its braces balanced back to depth zero. Spans
/// that ran off the end of the input, or that cover stray text between
/// literals, are reported incomplete and fail JSON parsing downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<'a> {
    /// Zero-based ordinal of the span within the input
    pub index: usize,

    /// The candidate literal text, borrowed from the input
    pub text: &'a str,

    /// Whether the span is a brace-balanced object literal
    pub complete: bool,
}

/// Scanner state while inside a candidate span
#[derive(Debug, Clone, Copy, PartialEq)]
enum SpanState {
    /// Inside an object literal at the given brace depth
    Object { depth: usize },
    /// Inside stray text that did not open with a brace
    Stray,
}

/// Split raw text into candidate object-literal spans
///
/// Whitespace between spans is skipped. Text at depth zero that does not open
/// with `{` is collected as a single stray span ending at the next top-level
/// `{`, so one run of garbage costs one skip report instead of poisoning its
/// neighbours. The final span is emitted even if the input ends mid-object.
pub fn scan_spans(input: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut state: Option<SpanState> = None;
    let mut span_start = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (pos, ch) in input.char_indices() {
        match state {
            None => {
                if ch.is_whitespace() {
                    continue;
                }
                span_start = pos;
                state = if ch == '{' {
                    Some(SpanState::Object { depth: 1 })
                } else {
                    Some(SpanState::Stray)
                };
            }
            Some(SpanState::Stray) => {
                if ch == '{' {
                    spans.push(Span {
                        index: spans.len(),
                        text: input[span_start..pos].trim_end(),
                        complete: false,
                    });
                    span_start = pos;
                    state = Some(SpanState::Object { depth: 1 });
                }
            }
            Some(SpanState::Object { depth }) => {
                if in_string {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == '"' {
                        in_string = false;
                    }
                    continue;
                }

                match ch {
                    '"' => in_string = true,
                    '{' => state = Some(SpanState::Object { depth: depth + 1 }),
                    '}' => {
                        if depth == 1 {
                            spans.push(Span {
                                index: spans.len(),
                                text: &input[span_start..pos + ch.len_utf8()],
                                complete: true,
                            });
                            state = None;
                        } else {
                            state = Some(SpanState::Object { depth: depth - 1 });
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    // A span still open at end of input is malformed but must be reported
    if state.is_some() {
        spans.push(Span {
            index: spans.len(),
            text: input[span_start..].trim_end(),
            complete: false,
        });
    }

    spans
}

/// Count complete object literals without parsing them
///
/// This is the cheap path behind the banner count. On well-formed input it
/// agrees exactly with the number of records the full parse returns; on
/// malformed input it counts only the brace-balanced spans and never panics.
pub fn count_complete_spans(input: &str) -> usize {
    scan_spans(input).iter().filter(|s| s.complete).count()
}
