use super::{Cursor, Error, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing string literals. The opening quote has already been consumed.
#[derive(Debug)]
pub(super) struct StringLiteral {
	start_offset: usize,
	/// Whether the previous character was a backslash.
	escaping: bool,
	pos: SourcePos,
}


impl StringLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), escaping: false, pos: cursor.pos() }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let unterminated = || {
			Error::unterminated_string(cursor.slice_from(self.start_offset), self.pos)
		};

		match (&self, cursor.peek()) {
			// EOF while scanning a literal is always an error.
			(_, None) => Transition::error(Root, unterminated()),

			// Escaped character, whatever it is.
			(&Self { escaping: true, .. }, Some(_)) => {
				self.escaping = false;
				Transition::step(self)
			}

			(_, Some('\\')) => {
				self.escaping = true;
				Transition::step(self)
			}

			// Closing quote.
			(_, Some('"')) => Transition::produce(
				Root,
				Token::new(TokenKind::String, cursor.slice_through(self.start_offset), self.pos),
			),

			// Strings can't span lines. The newline is left for the root state.
			(_, Some('\n')) => Transition::resume_error(Root, unterminated()),

			(_, Some(_)) => Transition::step(self),
		}
	}
}


impl From<StringLiteral> for State {
	fn from(state: StringLiteral) -> State {
		State::StringLiteral(state)
	}
}


/// The state for lexing char literals. The opening quote has already been consumed.
#[derive(Debug)]
pub(super) struct CharLiteral {
	start_offset: usize,
	/// Whether the value has been scanned, including escape sequences.
	value: bool,
	/// Whether the previous character was a backslash.
	escaping: bool,
	pos: SourcePos,
}


impl CharLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			start_offset: cursor.offset(),
			value: false,
			escaping: false,
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let unterminated = || {
			Error::unterminated_char(cursor.slice_from(self.start_offset), self.pos)
		};

		match (&self, cursor.peek()) {
			// Empty literal at EOF.
			(&Self { value: false, escaping: false, .. }, None) => Transition::error(
				Root,
				Error::empty_char_literal(cursor.slice_from(self.start_offset), self.pos),
			),

			(_, None) => Transition::error(Root, unterminated()),

			// Closing quote.
			(&Self { value: true, .. }, Some('\'')) => Transition::produce(
				Root,
				Token::new(TokenKind::Char, cursor.slice_through(self.start_offset), self.pos),
			),

			// Anything but the closing quote after the value.
			(&Self { value: true, .. }, Some(_)) => Transition::resume_error(Root, unterminated()),

			// Escaped character, whatever it is.
			(&Self { escaping: true, .. }, Some(_)) => {
				self.escaping = false;
				self.value = true;
				Transition::step(self)
			}

			// Empty literal. The closing quote is consumed with it.
			(_, Some('\'')) => Transition::error(
				Root,
				Error::empty_char_literal(cursor.slice_through(self.start_offset), self.pos),
			),

			(_, Some('\\')) => {
				self.escaping = true;
				Transition::step(self)
			}

			(_, Some('\n')) => Transition::resume_error(Root, unterminated()),

			(_, Some(_)) => {
				self.value = true;
				Transition::step(self)
			}
		}
	}
}


impl From<CharLiteral> for State {
	fn from(state: CharLiteral) -> State {
		State::CharLiteral(state)
	}
}
