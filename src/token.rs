/// Strips the optional `"<seq>;"` prefix carried by some status fields
/// (such as `"17;SOL_COMPUTED"`) and folds the remainder to ASCII uppercase.
///
/// Total: empty input yields an empty token.
pub fn normalize_token(text: &str) -> String {
    let text = match text.find(';') {
        Some(offset) => &text[offset + 1..],
        None => text,
    };

    text.to_ascii_uppercase()
}
