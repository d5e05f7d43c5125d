use super::{Cursor, Root, SourcePos, State, Token, TokenKind, Transition};
use crate::registry::Match;


/// The state for consuming a prefix accepted by a registered automaton.
#[derive(Debug)]
pub(super) struct Matched {
	automaton: Box<str>,
	start_offset: usize,
	end_offset: usize,
	pos: SourcePos,
}


impl Matched {
	pub fn at(cursor: &Cursor, matched: Match) -> Self {
		Self {
			automaton: matched.automaton.into(),
			start_offset: cursor.offset(),
			end_offset: cursor.offset() + matched.len,
			pos: cursor.pos(),
		}
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		if cursor.offset() < self.end_offset {
			return Transition::step(self);
		}

		let lexeme = cursor.slice_from(self.start_offset);
		let kind = TokenKind::classify(&self.automaton, lexeme);

		Transition::resume_produce(Root, Token::matched(kind, lexeme, self.pos, &self.automaton))
	}
}


impl From<Matched> for State {
	fn from(state: Matched) -> State {
		State::Matched(state)
	}
}
