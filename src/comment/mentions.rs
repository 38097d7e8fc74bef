/// Label that starts every mentions line.
pub const MENTIONS_LABEL: &str = "**cc:** ";

/// Renders `**cc:** @a @b`.
///
/// An empty list still renders the bare label; callers decide whether to show it.
pub fn format_mentions<S: AsRef<str>>(mentions: &[S]) -> String {
    let handles: Vec<String> = mentions
        .iter()
        .map(|mention| format!("@{}", mention.as_ref()))
        .collect();
    format!("{}{}", MENTIONS_LABEL, handles.join(" "))
}
