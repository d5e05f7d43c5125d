use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected(value) => write!(f, "unexpected {:?}", value),

			Self::UnterminatedString => "unterminated string literal".fmt(f),

			Self::UnterminatedChar => "unterminated char literal".fmt(f),

			Self::EmptyCharLiteral => "empty char literal".fmt(f),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {} (near {:?}).", self.pos, self.error, self.lexeme)
	}
}
