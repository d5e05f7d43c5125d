mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// A character that starts no token.
	Unexpected(char),
	/// String literal without the closing quote before the end of the line.
	UnterminatedString,
	/// Char literal without the closing quote after its single character.
	UnterminatedChar,
	/// Empty char literal ('').
	EmptyCharLiteral,
}


/// A lexical error. Scanning always resumes after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	/// Position of the first character of the offending lexeme.
	pub pos: SourcePos,
	/// The offending lexeme, as consumed.
	pub lexeme: Box<str>,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unexpected(input: char, pos: SourcePos) -> Self {
		let mut lexeme = [0; 4];
		Self {
			error: ErrorKind::Unexpected(input),
			pos,
			lexeme: (&*input.encode_utf8(&mut lexeme)).into(),
		}
	}

	pub fn unterminated_string(lexeme: &str, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedString, pos, lexeme: lexeme.into() }
	}

	pub fn unterminated_char(lexeme: &str, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedChar, pos, lexeme: lexeme.into() }
	}

	pub fn empty_char_literal(lexeme: &str, pos: SourcePos) -> Self {
		Self { error: ErrorKind::EmptyCharLiteral, pos, lexeme: lexeme.into() }
	}
}
