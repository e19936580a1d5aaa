//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use icumsg::syntax::Token;
use serde::Serialize;

/// One row of the token listing.
#[derive(Debug, Serialize)]
pub struct TokenRow {
    pub index: usize,
    /// Character offset of the token in the template.
    pub offset: usize,
    pub kind: &'static str,
    pub text: String,
}

impl TokenRow {
    /// Build rows for a token list, computing character offsets.
    pub fn from_tokens(tokens: &[Token]) -> Vec<TokenRow> {
        let mut offset = 0;
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let row = TokenRow {
                    index,
                    offset,
                    kind: token_kind(token),
                    text: token.as_source().to_string(),
                };
                offset += token.source_len();
                row
            })
            .collect()
    }
}

/// Stable name of a token kind.
pub fn token_kind(token: &Token) -> &'static str {
    match token {
        Token::LeftBrace => "left_brace",
        Token::RightBrace => "right_brace",
        Token::Comma => "comma",
        Token::Hashtag => "hashtag",
        Token::Escape => "escape",
        Token::Whitespace(_) => "whitespace",
        Token::Text(_) => "text",
    }
}

/// Format token rows as a table.
pub fn format_token_table(rows: &[TokenRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Offset", "Kind", "Text"]);

    for row in rows {
        table.add_row(vec![
            row.index.to_string(),
            row.offset.to_string(),
            row.kind.to_string(),
            format!("{:?}", row.text),
        ]);
    }

    table
}
