use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no positive word list") || haystack.contains("no negative word list") {
        push_hint(
            &mut out,
            "Pass `--positive <PATH>` and `--negative <PATH>`, or set them under `[lexicon]` in prosemd.toml.",
        );
        push_hint(&mut out, "Create a starter config with `prosemd init`.");
    }

    if haystack.contains("failed to read positive")
        || haystack.contains("failed to read negative")
        || haystack.contains("failed to read valence")
    {
        push_hint(&mut out, "Verify the word list or valence table path exists and is readable.");
        push_hint(
            &mut out,
            "Relative paths in prosemd.toml resolve against the directory holding the file.",
        );
    }

    if haystack.contains("malformed valence") {
        push_hint(
            &mut out,
            "Valence tables need `token<TAB>mean` on every non-blank line.",
        );
    }

    if haystack.contains("complexity threshold") {
        push_hint(&mut out, "Use `--threshold 2` (the default) or any value of 1 or more.");
    }

    if haystack.contains("precision must be at most") {
        push_hint(&mut out, "Use a `precision` between 0 and 15.");
    }

    if haystack.contains("failed to read input") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("config file") && haystack.contains("invalid") {
        push_hint(
            &mut out,
            "Check `prosemd.toml` syntax and key names, or regenerate with `prosemd init --force`.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
