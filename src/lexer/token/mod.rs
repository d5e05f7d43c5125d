mod fmt;

use super::SourcePos;


/// Words reserved by the language. Matching ignores case.
pub const KEYWORDS: [&str; 28] = [
	"if", "else", "while", "for", "do", "switch", "case", "default", "break", "continue",
	"return", "void", "int", "float", "double", "char", "bool", "true", "false", "const",
	"static", "class", "public", "private", "protected", "struct", "enum", "string",
];


/// Whether the word is a keyword, regardless of case.
pub fn is_keyword(word: &str) -> bool {
	KEYWORDS
		.iter()
		.any(|keyword| keyword.eq_ignore_ascii_case(word))
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // %

	Assign, // =

	Equals,        // ==
	NotEquals,     // !=
	Lower,         // <
	Greater,       // >
	LowerEquals,   // <=
	GreaterEquals, // >=

	And, // &&
	Or,  // ||
	Not, // !

	BitAnd, // &
	BitOr,  // |
	BitXor, // ^
	BitNot, // ~
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
	Semicolon, // ;
	Comma,     // ,
	Dot,       // .
	Colon,     // :

	OpenParens,   // (
	CloseParens,  // )
	OpenBrace,    // {
	CloseBrace,   // }
	OpenBracket,  // [
	CloseBracket, // ]
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Keyword,
	Identifier,
	Integer,
	Float,
	String,
	Char,
	Operator(Operator),
	Delimiter(Delimiter),
	Comment,
	Whitespace,
	/// Matched by a registered automaton without a built-in classification.
	Automaton,
	Eof,
}


impl TokenKind {
	/// Classify the match of a registered automaton.
	pub fn classify(automaton: &str, lexeme: &str) -> Self {
		use crate::registry::{FLOAT, IDENTIFIER, INTEGER};

		match automaton {
			IDENTIFIER if is_keyword(lexeme) => Self::Keyword,
			IDENTIFIER => Self::Identifier,
			INTEGER => Self::Integer,
			FLOAT => Self::Float,
			_ => Self::Automaton,
		}
	}


	/// Classify an identifier-like word.
	pub fn word(word: &str) -> Self {
		if is_keyword(word) {
			Self::Keyword
		} else {
			Self::Identifier
		}
	}
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub lexeme: Box<str>,
	/// Position of the first character.
	pub pos: SourcePos,
	/// The registered automaton that matched the lexeme, if any.
	pub automaton: Option<Box<str>>,
}


impl Token {
	pub fn new(kind: TokenKind, lexeme: &str, pos: SourcePos) -> Self {
		Self { kind, lexeme: lexeme.into(), pos, automaton: None }
	}


	pub fn matched(kind: TokenKind, lexeme: &str, pos: SourcePos, automaton: &str) -> Self {
		Self {
			kind,
			lexeme: lexeme.into(),
			pos,
			automaton: Some(automaton.into()),
		}
	}


	/// Tokens other than end of file.
	pub fn is_valid(&self) -> bool {
		self.kind != TokenKind::Eof
	}
}
