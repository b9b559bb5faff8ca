use crate::toc::types::AnchoredHeader;

/// Title used when a document does not already carry one and no
/// override was given
pub const DEFAULT_TITLE: &str =
    "**Table of Contents**  *generated with [mdtoc](https://github.com/betterwebinit/mdtoc)*";

/// Render anchored headers as an indented markdown list under `title`.
/// Entries are indented by one `indent_unit` per rank above the
/// shallowest rank in the batch. Returns None when there is nothing
/// to render.
pub fn render(
    title: &str,
    headers: &[AnchoredHeader],
    entry_prefix: &str,
    indent_unit: &str,
) -> Option<String> {
    let lowest_rank = headers.iter().map(|h| h.rank).min()?;

    let entries = headers
        .iter()
        .map(|h| {
            format!(
                "{}{} {}",
                indent_unit.repeat(h.rank - lowest_rank),
                entry_prefix,
                h.anchor
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!("{}\n\n{}\n", title, entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(rank: usize, anchor: &str) -> AnchoredHeader {
        AnchoredHeader {
            rank,
            anchor: anchor.to_string(),
        }
    }

    #[test]
    fn test_render_empty_batch_is_skipped() {
        assert_eq!(render("Title", &[], "-", "  "), None);
    }

    #[test]
    fn test_render_indents_by_rank() {
        let headers = vec![
            anchored(1, "[A](#a)"),
            anchored(2, "[B](#b)"),
            anchored(3, "[C](#c)"),
        ];

        let toc = render("**Table of Contents**", &headers, "-", "  ").unwrap();
        assert_eq!(
            toc,
            "**Table of Contents**\n\n- [A](#a)\n  - [B](#b)\n    - [C](#c)\n"
        );
    }

    #[test]
    fn test_render_indents_relative_to_shallowest_rank() {
        let headers = vec![anchored(3, "[A](#a)"), anchored(4, "[B](#b)")];

        let toc = render("t", &headers, "-", "  ").unwrap();
        assert_eq!(toc, "t\n\n- [A](#a)\n  - [B](#b)\n");
    }

    #[test]
    fn test_render_four_space_indent_unit() {
        let headers = vec![anchored(1, "[A](#a)"), anchored(2, "[B](#b)")];

        let toc = render("t", &headers, "-", "    ").unwrap();
        assert_eq!(toc, "t\n\n- [A](#a)\n    - [B](#b)\n");
    }

    #[test]
    fn test_render_custom_entry_prefix() {
        let headers = vec![anchored(1, "[A](#a)")];

        let toc = render("t", &headers, "*", "  ").unwrap();
        assert_eq!(toc, "t\n\n* [A](#a)\n");
    }
}
