use super::{Context, Cursor, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing line comments. The leading slashes have already been consumed.
#[derive(Debug)]
pub(super) struct Comment {
	start_offset: usize,
	pos: SourcePos,
}


impl Comment {
	pub fn from_start(start_offset: usize, pos: SourcePos) -> Self {
		Self { start_offset, pos }
	}


	pub fn visit(self, cursor: &Cursor, context: Context) -> Transition {
		match cursor.peek() {
			// Newline marks the end of the comment, and is left for the root state.
			Some('\n') | None if context.options.skip_comments => Transition::resume(Root),

			Some('\n') | None => Transition::resume_produce(
				Root,
				Token::new(TokenKind::Comment, cursor.slice_from(self.start_offset), self.pos),
			),

			// Otherwise, eat everything.
			_ => Transition::step(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		State::Comment(state)
	}
}
