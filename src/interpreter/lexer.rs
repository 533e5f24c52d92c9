use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The digits are carried as
    /// written; the parser converts them to `i64`, so an oversized literal
    /// is reported as a parse error rather than a lexer failure.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `macro`
    #[token("macro")]
    Macro,
    /// Identifier tokens; binding or parameter names such as `x` or
    /// `adder`. ASCII letters, digits, and underscores, not starting with a
    /// digit.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Newlines; counted for error reporting and otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Input the lexer does not recognize, carrying the offending text.
    /// Produced instead of aborting so the parser can report it in context.
    Illegal(String),

    /// End of input. The `logos` iterator simply stops; the parser
    /// synthesizes this sentinel when it runs past the last token.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting. Incremented as
/// newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Token {
    /// The fixed display name of this token's kind, as used in parse error
    /// messages: keyword and literal kinds by their uppercase names,
    /// punctuation by its source text.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Identifier("x".to_string()).kind_name(), "IDENT");
    /// assert_eq!(Token::Assign.kind_name(), "=");
    /// assert_eq!(Token::Eof.kind_name(), "EOF");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Identifier(_) => "IDENT",
            Self::Let => "LET",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Macro => "MACRO",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            // Skipped during lexing; never reaches the parser.
            Self::NewLine | Self::Ignored => "WHITESPACE",
        }
    }
}

/// Lexes `source` into a sequence of `(token, line)` pairs.
///
/// Unrecognized input produces [`Token::Illegal`] carrying the offending
/// text, so lexing itself never fails. Line numbers are 1-based and count
/// newlines only; no column information is recorded.
///
/// # Example
/// ```
/// use capuchin::interpreter::lexer::{Token, tokens};
///
/// let toks = tokens("let five = 5;");
///
/// assert_eq!(toks[0], (Token::Let, 1));
/// assert_eq!(toks[1], (Token::Identifier("five".to_string()), 1));
/// assert_eq!(toks[2], (Token::Assign, 1));
/// assert_eq!(toks[3], (Token::Int("5".to_string()), 1));
/// assert_eq!(toks[4], (Token::Semicolon, 1));
/// ```
#[must_use]
pub fn tokens(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut out = Vec::new();

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(token) => out.push((token, line)),
            Err(()) => out.push((Token::Illegal(lexer.slice().to_string()), line)),
        }
    }

    out
}
