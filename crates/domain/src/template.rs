//! Placeholder substitution for outgoing messages.
//!
//! Event reminders use the named dialect (`{name}`, `{event_name}`) and
//! campaign templates use the positional dialect (`{{1}}` .. `{{5}}`).
//! Both renderers replace every occurrence in a single pass, so text that
//! was substituted in is never scanned for placeholders again. Unknown
//! placeholders are left untouched.

const NAME_PLACEHOLDER: &str = "{name}";
const EVENT_NAME_PLACEHOLDER: &str = "{event_name}";

/// Values for the named placeholder dialect
#[derive(Debug, Clone, Copy)]
pub struct NamedParams<'a> {
    pub name: &'a str,
    pub event_name: &'a str,
}

pub fn render_named(template: &str, params: &NamedParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            out.push_str(params.name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(EVENT_NAME_PLACEHOLDER) {
            out.push_str(params.event_name);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Parses `{{N}}` at the start of `s` and returns N with the remaining text
fn positional_placeholder(s: &str) -> Option<(usize, &str)> {
    let inner = s.strip_prefix("{{")?;
    let end = inner.find("}}")?;
    let digits = &inner[..end];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse::<usize>().ok()?;
    Some((index, &inner[end + 2..]))
}

/// Replaces `{{N}}` with `values[N - 1]`. Placeholders without a value stay
/// as they are and values without a placeholder are ignored.
pub fn render_positional<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match positional_placeholder(tail) {
            Some((index, after)) if index >= 1 && index <= values.len() => {
                out.push_str(values[index - 1].as_ref());
                rest = after;
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// A WhatsApp message template with positional placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub body: &'static str,
}

pub const MESSAGE_TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        id: "job_alert_v1",
        name: "New Opportunity Alert",
        body: "Hi {{1}}, Exciting news! 🚀 A new role: {{2}} at {{3}} has just been posted. Deadline: {{4}}. Apply now: {{5}}",
    },
    MessageTemplate {
        id: "deadline_alert_v2",
        name: "Deadline Reminder",
        body: "Attention {{1}}! ⏰ Only 24 hours left to apply for {{2}} at {{3}}. Don't miss out: {{4}}",
    },
    MessageTemplate {
        id: "interview_update_v1",
        name: "Interview Update",
        body: "Hello {{1}}, an update on your {{2}} interview at {{3}}. Please check your portal for time slots: {{4}}. Good luck! {{5}}",
    },
];

impl MessageTemplate {
    pub fn find(template_id: &str) -> Option<&'static MessageTemplate> {
        MESSAGE_TEMPLATES.iter().find(|t| t.id == template_id)
    }

    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> String {
        render_positional(self.body, values)
    }
}
