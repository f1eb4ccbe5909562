use rustberry::Diagnostic;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// `path:line:column: message [rule]`, followed by any notes, one per line.
pub(crate) fn format_diagnostic(path: &Path, diagnostic: &Diagnostic) -> String {
    let mut out = match diagnostic.locations().first() {
        Some(loc) => format!(
            "{}:{}:{}: {} [{}]",
            path.display(),
            loc.line,
            loc.column,
            diagnostic.message,
            diagnostic.rule,
        ),
        None => format!("{}: {} [{}]", path.display(), diagnostic.message, diagnostic.rule),
    };
    for note in &diagnostic.notes {
        out.push_str("\n    = ");
        out.push_str(note);
    }
    out
}
