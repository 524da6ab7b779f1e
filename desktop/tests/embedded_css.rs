#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a truncated or moved
//! theme would only show up at runtime, so check it here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_blank() {
    assert!(
        EMBEDDED_CSS.split_whitespace().map(str::len).sum::<usize>() > 4000,
        "embedded theme looks truncated"
    );
}

#[test]
fn embedded_css_defines_palette() {
    for token in ["--color-bg", "--color-accent: #6a0dad", "body {", "@media (max-width: 720px)"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
