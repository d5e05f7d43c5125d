mod automata;
mod cursor;
mod error;
mod token;

use crate::registry::Registry;
use automata::Automata;
pub use cursor::{Cursor, SourcePos};
pub use error::{Error, ErrorKind};
pub use token::{is_keyword, Delimiter, Operator, Token, TokenKind, KEYWORDS};


/// Which tokens are dropped instead of produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
	pub skip_whitespace: bool,
	pub skip_comments: bool,
}


impl Default for Options {
	fn default() -> Self {
		Self { skip_whitespace: true, skip_comments: true }
	}
}


/// The lexer. At every position, the longest prefix accepted by a registered automaton
/// wins. When no automaton accepts a prefix, the built-in recognizers take over.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>, registry: &'a Registry, options: Options) -> Self {
		Self(Automata::new(cursor, registry, options))
	}


	/// The position of the next character to be scanned.
	pub fn pos(&self) -> SourcePos {
		self.0.pos()
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}


/// Lexical analysis.
#[derive(Debug)]
pub struct Analysis {
	/// The produced tokens, terminated by an end of file token.
	pub tokens: Vec<Token>,
	/// Lexical errors. Scanning continues after each of them.
	pub errors: Vec<Error>,
}


impl Analysis {
	/// Tokenize the whole source. This never fails, errors are collected instead.
	pub fn tokenize(source: &str, registry: &Registry, options: Options) -> Self {
		let mut lexer = Lexer::new(Cursor::from(source), registry, options);

		let mut tokens = Vec::new();
		let mut errors = Vec::new();

		for result in &mut lexer {
			match result {
				Ok(token) => tokens.push(token),
				Err(error) => errors.push(error),
			}
		}

		tokens.push(Token::new(TokenKind::Eof, "", lexer.pos()));

		Self { tokens, errors }
	}


	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}
}
