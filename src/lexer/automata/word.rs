use super::{Cursor, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing identifiers and keywords.
#[derive(Debug)]
pub(super) struct Word {
	start_offset: usize,
	pos: SourcePos,
}


impl Word {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		// The root state only enters this state on a word start character.
		match cursor.peek() {
			// Word character.
			Some(c) if c.is_word() => Transition::step(self),

			// If we visit EOF or a non-word character, we should just produce.
			_ => {
				let word = cursor.slice_from(self.start_offset);
				Transition::resume_produce(Root, Token::new(TokenKind::word(word), word, self.pos))
			}
		}
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


/// Helper trait for checking if a character is a valid word constituent.
pub trait IsWord {
	fn is_word_start(&self) -> bool;
	fn is_word(&self) -> bool;
}


impl IsWord for char {
	fn is_word_start(&self) -> bool {
		self.is_ascii_alphabetic() || *self == '_'
	}

	fn is_word(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == '_'
	}
}
