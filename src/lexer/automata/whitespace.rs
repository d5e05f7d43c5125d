use super::{Cursor, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing runs of whitespace, when they are not skipped.
#[derive(Debug)]
pub(super) struct Whitespace {
	start_offset: usize,
	pos: SourcePos,
}


impl Whitespace {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			_ => Transition::resume_produce(
				Root,
				Token::new(TokenKind::Whitespace, cursor.slice_from(self.start_offset), self.pos),
			),
		}
	}
}


impl From<Whitespace> for State {
	fn from(state: Whitespace) -> State {
		State::Whitespace(state)
	}
}
