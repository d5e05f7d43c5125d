use super::{Cursor, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing numeric literals, both integer and float.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	consumed_decimal: bool,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			start_offset: cursor.offset(),
			consumed_decimal: false,
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Consume digits.
			Some(c) if c.is_ascii_digit() => Transition::step(self),

			// Up to one dot, only when a digit follows.
			Some('.')
				if !self.consumed_decimal
					&& cursor.peek_next().map_or(false, |c| c.is_ascii_digit()) =>
			{
				self.consumed_decimal = true;
				Transition::step(self)
			}

			// Stop and produce if a non-digit is found, including EOF.
			_ => {
				let kind = if self.consumed_decimal { TokenKind::Float } else { TokenKind::Integer };
				let lexeme = cursor.slice_from(self.start_offset);

				Transition::resume_produce(Root, Token::new(kind, lexeme, self.pos))
			}
		}
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
