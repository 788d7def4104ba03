//! Tool-family handlers — one invocation grammar per module.
//!
//! Each handler produces:
//! 1. The exact command line for a task
//! 2. For third-party families, the executable name probed at build time

pub mod bcftools;
pub mod gatk;
pub mod vcflib;
pub mod vcftools;
pub mod vcfx;

/// Escape user-supplied text for a make recipe (`$` is make's expansion
/// character).
pub fn escape_make(s: &str) -> String {
    s.replace('$', "$$")
}

/// Join command words with single spaces, dropping empty ones.
pub fn words<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring test on a task name.
pub fn name_mentions(name: &str, needle: &str) -> bool {
    name.to_ascii_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vb004_escape_dollar() {
        assert_eq!(escape_make("--expr '$1 > 2'"), "--expr '$$1 > 2'");
        assert_eq!(escape_make("plain"), "plain");
    }

    #[test]
    fn test_vb004_words_skip_empty() {
        assert_eq!(words(["$(X)", "", "<", "in.vcf"]), "$(X) < in.vcf");
        assert_eq!(words(["", ""]), "");
    }

    #[test]
    fn test_vb004_name_mentions() {
        assert!(name_mentions("bcf_Count_large", "count"));
        assert!(!name_mentions("bcf_stats", "count"));
    }
}
