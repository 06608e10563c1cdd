use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Field holding the human-readable title of a record.
pub const TITLE_FIELD: &str = "Title";

/// Candidate body fields, checked in priority order; first present wins.
pub const BODY_FIELDS: &[&str] = &["Body__c", "body", "Body", "content", "Content"];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static UNDERSCORE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());

/// One record turned into a writable output: a file base name plus the
/// cleaned body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcribed {
    pub file_name: String,
    pub text: String,
}

/// Why a record produced no output. Never fatal; the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NotAnObject,
    NoBodyField,
    BodyNotString,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Skip::NotAnObject => "not a dictionary",
            Skip::NoBodyField => "no body field",
            Skip::BodyNotString => "body is not a string",
        };
        f.write_str(reason)
    }
}

/// Derive a file name and cleaned body from one record, or say why not.
pub fn transcribe(key: &str, record: &Value) -> Result<Transcribed, Skip> {
    let fields = record.as_object().ok_or(Skip::NotAnObject)?;

    let file_name = match fields.get(TITLE_FIELD).and_then(Value::as_str) {
        Some(title) => {
            let derived = derive_file_name(title);
            if derived.is_empty() {
                // Title had no alphanumeric characters; name it as if absent.
                fallback_name(key)
            } else {
                derived
            }
        }
        None => fallback_name(key),
    };

    let body = BODY_FIELDS
        .iter()
        .find_map(|f| fields.get(*f))
        .ok_or(Skip::NoBodyField)?;
    let body = body.as_str().ok_or(Skip::BodyNotString)?;

    Ok(Transcribed {
        file_name,
        text: strip_html(body),
    })
}

fn fallback_name(key: &str) -> String {
    format!("note_{key}")
}

/// Reduce a title to a filesystem-safe base name: `[A-Za-z0-9_]` only,
/// single underscores, none leading or trailing. Returns an empty string
/// for a title with no alphanumeric characters.
pub fn derive_file_name(title: &str) -> String {
    let name = title.replace(' ', "_");
    let name = NON_WORD_RE.replace_all(&name, "_");
    let name = UNDERSCORE_RUN_RE.replace_all(&name, "_");
    name.trim_matches('_').to_string()
}

/// Remove `<...>` tag sequences, collapse whitespace runs to one space and
/// trim. Deliberately regex-level: comments, CDATA and unclosed tags get no
/// special treatment, and entities like `&amp;` are left literal.
pub fn strip_html(text: &str) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
