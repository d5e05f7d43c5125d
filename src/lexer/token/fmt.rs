use std::fmt::{self, Display};

use super::{Delimiter, Operator, Token, TokenKind};


impl Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			Self::Plus => "PLUS",
			Self::Minus => "MINUS",
			Self::Times => "MULTIPLY",
			Self::Div => "DIVIDE",
			Self::Mod => "MODULO",
			Self::Assign => "ASSIGN",
			Self::Equals => "EQUAL",
			Self::NotEquals => "NOT_EQUAL",
			Self::Lower => "LESS_THAN",
			Self::Greater => "GREATER_THAN",
			Self::LowerEquals => "LESS_EQUAL",
			Self::GreaterEquals => "GREATER_EQUAL",
			Self::And => "AND",
			Self::Or => "OR",
			Self::Not => "NOT",
			Self::BitAnd => "BIT_AND",
			Self::BitOr => "BIT_OR",
			Self::BitXor => "BIT_XOR",
			Self::BitNot => "BIT_NOT",
		};

		name.fmt(f)
	}
}


impl Display for Delimiter {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			Self::Semicolon => "SEMICOLON",
			Self::Comma => "COMMA",
			Self::Dot => "DOT",
			Self::Colon => "COLON",
			Self::OpenParens => "LPAREN",
			Self::CloseParens => "RPAREN",
			Self::OpenBrace => "LBRACE",
			Self::CloseBrace => "RBRACE",
			Self::OpenBracket => "LBRACKET",
			Self::CloseBracket => "RBRACKET",
		};

		name.fmt(f)
	}
}


impl Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Keyword => "KEYWORD".fmt(f),
			Self::Identifier => "IDENTIFIER".fmt(f),
			Self::Integer => "INTEGER".fmt(f),
			Self::Float => "FLOAT".fmt(f),
			Self::String => "STRING".fmt(f),
			Self::Char => "CHAR".fmt(f),
			Self::Operator(op) => op.fmt(f),
			Self::Delimiter(delimiter) => delimiter.fmt(f),
			Self::Comment => "COMMENT".fmt(f),
			Self::Whitespace => "WHITESPACE".fmt(f),
			Self::Automaton => "AUTOMATON".fmt(f),
			Self::Eof => "EOF".fmt(f),
		}
	}
}


impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"Token({}, {:?}, Line: {}, Col: {})",
			self.kind,
			self.lexeme,
			self.pos.line,
			self.pos.column
		)?;

		if let Some(automaton) = &self.automaton {
			write!(f, " [{}]", automaton)?;
		}

		Ok(())
	}
}
