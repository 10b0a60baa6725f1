//! Line/block tokenizer for the constrained markdown dialect.
//!
//! [`parse_blocks`] consumes a body line by line and produces a sequence of
//! typed [`Block`] nodes. Rendering each node independently removes the
//! ordering hazards of whole-string substitution chains: a fence interior can
//! never be misread as a heading, and an interleaved paragraph/list/paragraph
//! group keeps its structure instead of collapsing into one list.
//!
//! Tokenizing is total: anything that fails a block rule (a lone `|` row, a
//! `####` heading outside the supported 1-3 range) degrades to paragraph
//! text rather than erroring.

/// One block-level node of the dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Heading, levels 1-3.
    Heading { level: u8, text: String },
    /// Fenced code block, preserved verbatim.
    Code {
        language: Option<String>,
        content: String,
    },
    /// Table. `header` is present when the second source row was a
    /// separator row; headerless tables keep every row in `rows`.
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    /// Bullet or numbered list.
    List { ordered: bool, items: Vec<String> },
    /// Block quote.
    Quote { lines: Vec<String> },
    /// Horizontal rule.
    Rule,
    /// Plain paragraph lines (single newlines inside become line breaks).
    Paragraph { lines: Vec<String> },
}

/// Tokenize a body into block nodes.
#[must_use]
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        // Fences come first so nothing inside one is ever reinterpreted.
        if let Some(info) = line.strip_prefix("```") {
            let language = {
                let info = info.trim();
                (!info.is_empty()).then(|| info.to_owned())
            };
            let mut content = String::new();
            i += 1;
            while i < lines.len() {
                if lines[i].starts_with("```") {
                    i += 1;
                    break;
                }
                content.push_str(lines[i]);
                content.push('\n');
                i += 1;
            }
            // An unclosed fence swallows the rest of the body, best effort.
            blocks.push(Block::Code { language, content });
            continue;
        }

        if let Some((level, text)) = heading_line(line) {
            blocks.push(Block::Heading {
                level,
                text: text.to_owned(),
            });
            i += 1;
            continue;
        }

        if is_rule_line(line) {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if is_table_line(line) {
            let start = i;
            while i < lines.len() && is_table_line(lines[i]) {
                i += 1;
            }
            let run = &lines[start..i];
            match parse_table(run) {
                Some(table) => blocks.push(table),
                // Single-row or otherwise malformed run: plain text.
                None => blocks.push(Block::Paragraph {
                    lines: run.iter().map(|l| (*l).to_owned()).collect(),
                }),
            }
            continue;
        }

        if line.starts_with('>') {
            let mut quote_lines = Vec::new();
            while i < lines.len() && lines[i].starts_with('>') {
                quote_lines.push(strip_quote_marker(lines[i]).to_owned());
                i += 1;
            }
            blocks.push(Block::Quote { lines: quote_lines });
            continue;
        }

        if let Some(ordered) = list_marker(line) {
            let mut items = Vec::new();
            while i < lines.len() && list_marker(lines[i]) == Some(ordered) {
                items.push(strip_list_marker(lines[i]).to_owned());
                i += 1;
            }
            blocks.push(Block::List { ordered, items });
            continue;
        }

        // Paragraph: consecutive lines that start no other block kind. A
        // list marker (or any block start) terminates the paragraph, so a
        // paragraph/list/paragraph group survives as three blocks.
        let mut para = Vec::new();
        while i < lines.len() && is_paragraph_line(lines[i]) {
            para.push(lines[i].to_owned());
            i += 1;
        }
        blocks.push(Block::Paragraph { lines: para });
    }

    blocks
}

/// Match a supported heading line, returning (level, trimmed text).
fn heading_line(line: &str) -> Option<(u8, &str)> {
    for (level, marker) in [(3_u8, "### "), (2, "## "), (1, "# ")] {
        if let Some(text) = line.strip_prefix(marker) {
            let text = text.trim();
            return (!text.is_empty()).then_some((level, text));
        }
    }
    None
}

fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Parse a contiguous run of table lines; `None` means the run is not a
/// well-formed table and should stay literal text.
fn parse_table(run: &[&str]) -> Option<Block> {
    if run.len() < 2 {
        return None;
    }

    let rows: Vec<Vec<String>> = run.iter().map(|line| split_cells(line)).collect();

    if is_separator_row(&rows[1]) {
        Some(Block::Table {
            header: Some(rows[0].clone()),
            rows: rows[2..].to_vec(),
        })
    } else {
        Some(Block::Table { header: None, rows })
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// A separator row's cells contain only hyphens/colons (whitespace is
/// already trimmed away), with at least one hyphen each.
fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':')
        })
}

fn strip_quote_marker(line: &str) -> &str {
    line.strip_prefix("> ")
        .or_else(|| line.strip_prefix('>'))
        .unwrap_or(line)
}

/// `Some(false)` for a bullet line, `Some(true)` for a numbered line.
fn list_marker(line: &str) -> Option<bool> {
    if line.starts_with("- ") || line.starts_with("* ") {
        return Some(false);
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    (digits > 0 && line[digits..].starts_with(". ")).then_some(true)
}

fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest;
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    &line[digits + 2..]
}

fn is_paragraph_line(line: &str) -> bool {
    !line.trim().is_empty()
        && !line.starts_with("```")
        && heading_line(line).is_none()
        && !is_rule_line(line)
        && !is_table_line(line)
        && !line.starts_with('>')
        && list_marker(line).is_none()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_paragraph_list_paragraph_interleaving() {
        let blocks = parse_blocks("para1\n- item1\n- item2\npara2");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    lines: vec!["para1".to_owned()]
                },
                Block::List {
                    ordered: false,
                    items: vec!["item1".to_owned(), "item2".to_owned()]
                },
                Block::Paragraph {
                    lines: vec!["para2".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        let blocks = parse_blocks("# One\n## Two\n### Three\n#### Four");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "One".to_owned()
                },
                Block::Heading {
                    level: 2,
                    text: "Two".to_owned()
                },
                Block::Heading {
                    level: 3,
                    text: "Three".to_owned()
                },
                // Level 4 is outside the dialect; degrades to literal text.
                Block::Paragraph {
                    lines: vec!["#### Four".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn test_fence_protects_contents() {
        let blocks = parse_blocks("```rust\n# not a heading\n| not | a | table |\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: Some("rust".to_owned()),
                content: "# not a heading\n| not | a | table |\n".to_owned(),
            }]
        );
    }

    #[test]
    fn test_unclosed_fence_swallows_rest() {
        let blocks = parse_blocks("```\ncode line\nstill code");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: None,
                content: "code line\nstill code\n".to_owned(),
            }]
        );
    }

    #[test]
    fn test_table_with_separator_has_header() {
        let blocks = parse_blocks("| A | B |\n| - | - |\n| 1 | 2 |");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: Some(vec!["A".to_owned(), "B".to_owned()]),
                rows: vec![vec!["1".to_owned(), "2".to_owned()]],
            }]
        );
    }

    #[test]
    fn test_table_without_separator_is_all_body() {
        let blocks = parse_blocks("| A | B |\n| 1 | 2 |");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: None,
                rows: vec![
                    vec!["A".to_owned(), "B".to_owned()],
                    vec!["1".to_owned(), "2".to_owned()],
                ],
            }]
        );
    }

    #[test]
    fn test_single_row_table_stays_literal() {
        let blocks = parse_blocks("| lonely | row |");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                lines: vec!["| lonely | row |".to_owned()]
            }]
        );
    }

    #[test]
    fn test_quote_run_groups_lines() {
        let blocks = parse_blocks("> first\n> second");
        assert_eq!(
            blocks,
            vec![Block::Quote {
                lines: vec!["first".to_owned(), "second".to_owned()]
            }]
        );
    }

    #[test]
    fn test_ordered_and_unordered_lists_split() {
        let blocks = parse_blocks("- a\n- b\n1. one\n2. two");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    ordered: false,
                    items: vec!["a".to_owned(), "b".to_owned()]
                },
                Block::List {
                    ordered: true,
                    items: vec!["one".to_owned(), "two".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn test_rule_line() {
        let blocks = parse_blocks("above\n\n---\n\nbelow");
        assert_eq!(blocks[1], Block::Rule);
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_paragraph_keeps_inner_newlines() {
        let blocks = parse_blocks("line one\nline two\n\nnext");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    lines: vec!["line one".to_owned(), "line two".to_owned()]
                },
                Block::Paragraph {
                    lines: vec!["next".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn test_empty_body_yields_no_blocks() {
        assert_eq!(parse_blocks(""), Vec::<Block>::new());
        assert_eq!(parse_blocks("\n\n  \n"), Vec::<Block>::new());
    }
}
