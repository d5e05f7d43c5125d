use super::{Comment, Cursor, Root, SourcePos, State, Token, TokenKind, Transition};
use crate::lexer::{Delimiter, Operator};


/// The state for lexing two-character symbols, and the start of comments.
#[derive(Debug)]
pub(super) struct Symbol {
	first: char,
	start_offset: usize,
	pos: SourcePos,
}


impl Symbol {
	pub fn from_first(first: char, cursor: &Cursor) -> Self {
		Self { first, start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let operator = |op, lexeme| Token::new(TokenKind::Operator(op), lexeme, self.pos);

		let produce = |op| {
			Transition::produce(Root, operator(op, cursor.slice_through(self.start_offset)))
		};
		let skip_produce = |op| {
			Transition::resume_produce(Root, operator(op, cursor.slice_from(self.start_offset)))
		};

		match (self.first, cursor.peek()) {
			('/', Some('/')) => Transition::step(Comment::from_start(self.start_offset, self.pos)),
			('/', _) => skip_produce(Operator::Div),

			('=', Some('=')) => produce(Operator::Equals),
			('=', _) => skip_produce(Operator::Assign),

			('!', Some('=')) => produce(Operator::NotEquals),
			('!', _) => skip_produce(Operator::Not),

			('<', Some('=')) => produce(Operator::LowerEquals),
			('<', _) => skip_produce(Operator::Lower),

			('>', Some('=')) => produce(Operator::GreaterEquals),
			('>', _) => skip_produce(Operator::Greater),

			('&', Some('&')) => produce(Operator::And),
			('&', _) => skip_produce(Operator::BitAnd),

			('|', Some('|')) => produce(Operator::Or),
			('|', _) => skip_produce(Operator::BitOr),

			// We must have covered all possibilites for the first character. The peeked
			// character is wildcarded, which will cover everthing including EOF (None).
			_ => unreachable!("invalid first character in symbol state"),
		}
	}
}


impl From<Symbol> for State {
	fn from(state: Symbol) -> State {
		Self::Symbol(state)
	}
}


/// Helper for symbols.
pub enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Some symbols are single characters. We can produce them straight away.
	Single(TokenKind),
	/// Others have two characters, so we must handle those separately.
	Double { first: char },
}


impl SymbolChar {
	pub fn from_first(first: char) -> Self {
		let operator = |op| Self::Single(TokenKind::Operator(op));
		let delimiter = |delimiter| Self::Single(TokenKind::Delimiter(delimiter));
		let double = |c| Self::Double { first: c };

		match first {
			// Single character.
			'+' => operator(Operator::Plus),
			'-' => operator(Operator::Minus),
			'*' => operator(Operator::Times),
			'%' => operator(Operator::Mod),
			'^' => operator(Operator::BitXor),
			'~' => operator(Operator::BitNot),
			';' => delimiter(Delimiter::Semicolon),
			',' => delimiter(Delimiter::Comma),
			'.' => delimiter(Delimiter::Dot),
			':' => delimiter(Delimiter::Colon),
			'(' => delimiter(Delimiter::OpenParens),
			')' => delimiter(Delimiter::CloseParens),
			'{' => delimiter(Delimiter::OpenBrace),
			'}' => delimiter(Delimiter::CloseBrace),
			'[' => delimiter(Delimiter::OpenBracket),
			']' => delimiter(Delimiter::CloseBracket),

			// Double character.
			'/' | '=' | '!' | '<' | '>' | '&' | '|' => double(first),

			// Not a symbol character:
			_ => SymbolChar::None,
		}
	}
}
