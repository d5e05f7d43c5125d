use std::{
	borrow::Cow,
	fmt::{self, Display},
};

use super::Error;


/// Spellings of the empty word accepted when parsing symbols from text.
pub const EPSILON_ALIASES: [&str; 4] = ["E", "ε", "epsilon", ""];


/// A transition label. Automata read one character at a time, and epsilon transitions
/// consume no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
	Char(char),
	Epsilon,
}


impl Symbol {
	pub fn is_epsilon(&self) -> bool {
		matches!(self, Self::Epsilon)
	}


	pub fn as_char(&self) -> Option<char> {
		match self {
			Self::Char(c) => Some(*c),
			Self::Epsilon => None,
		}
	}


	/// Parse a symbol from its textual form. All epsilon aliases collapse into
	/// `Symbol::Epsilon`. A backslash escapes the following character, which is the only
	/// way to spell the letter `E` as an ordinary symbol.
	pub fn parse(input: &str) -> Result<Self, Error> {
		if EPSILON_ALIASES.contains(&input) {
			return Ok(Self::Epsilon);
		}

		let mut chars = input.chars();

		match (chars.next(), chars.next(), chars.next()) {
			(Some(c), None, _) => Ok(Self::Char(c)),
			(Some('\\'), Some(c), None) => Ok(Self::Char(c)),
			_ => Err(Error::invalid_symbol(input)),
		}
	}


	/// The textual form accepted back by `Symbol::parse`.
	pub fn escaped(&self) -> Cow<'static, str> {
		match self {
			Self::Epsilon => Cow::Borrowed("E"),
			Self::Char('E') => Cow::Borrowed("\\E"),
			Self::Char('\\') => Cow::Borrowed("\\\\"),
			Self::Char(c) => Cow::Owned(c.to_string()),
		}
	}
}


impl From<char> for Symbol {
	fn from(c: char) -> Self {
		Self::Char(c)
	}
}


impl Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Char(c) => write!(f, "{}", c),
			Self::Epsilon => "ε".fmt(f),
		}
	}
}
