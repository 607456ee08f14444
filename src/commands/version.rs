//! Command: print version information.

/// The version text, rendered once so tests can pin the exact template.
#[must_use]
pub fn text() -> String {
    let version = option_env!("TEXSEQ_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    format!(
        "texseq {version}\n\nCopyright 2026 The texseq developers.\nLicense: MIT <https://opensource.org/licenses/MIT>.\n"
    )
}

/// Print the version text to stdout.
pub fn run() {
    print!("{}", text());
}
