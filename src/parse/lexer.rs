use logos::Logos;
use text_size::{TextRange, TextSize};

pub type Spanned<T> = (TextRange, T);

#[must_use]
pub fn lex(source: &str) -> Vec<Spanned<TokenKind>> {
    TokenKind::lexer(source)
        .spanned()
        .map(|(kind, span)| (text_range(span), kind))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn text_range(span: std::ops::Range<usize>) -> TextRange {
    TextRange::new(
        TextSize::from(span.start as u32),
        TextSize::from(span.end as u32),
    )
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Mnemonic,
    #[token(",")]
    Comma,

    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"#[^\r\n]*")]
    Comment,
    #[regex(r"(\r\n|\r|\n)+")]
    LineBreak,

    #[error]
    Error,
}

impl TokenKind {
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Comma | Self::Whitespace | Self::Comment | Self::LineBreak
        )
    }
}
