use super::{
	symbol::SymbolChar,
	word::IsWord,
	CharLiteral,
	Context,
	Cursor,
	Error,
	Matched,
	NumberLiteral,
	State,
	StringLiteral,
	Symbol,
	Token,
	Transition,
	Whitespace,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor, context: Context) -> Transition {
		let c = match cursor.peek() {
			Some(c) => c,
			// Eof.
			None => return Transition::step(self),
		};

		// Whitespace.
		if c.is_ascii_whitespace() {
			return if context.options.skip_whitespace {
				Transition::step(self)
			} else {
				Transition::resume(Whitespace::at(cursor))
			};
		}

		// Registered automata take precedence over the built-in recognizers.
		if let Some(matched) = context.registry.longest_match(cursor.rest()) {
			return Transition::resume(Matched::at(cursor, matched));
		}

		match c {
			// String literals.
			'"' => Transition::step(StringLiteral::at(cursor)),

			// Char literals.
			'\'' => Transition::step(CharLiteral::at(cursor)),

			// Number literals.
			c if c.is_ascii_digit() => Transition::resume(NumberLiteral::at(cursor)),

			// Identifiers and keywords.
			c if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Operators, delimiters and comments.
			c => match SymbolChar::from_first(c) {
				SymbolChar::None => Transition::error(self, Error::unexpected(c, cursor.pos())),

				SymbolChar::Single(kind) => Transition::produce(
					self,
					Token::new(kind, cursor.slice_through(cursor.offset()), cursor.pos()),
				),

				SymbolChar::Double { first } => Transition::step(Symbol::from_first(first, cursor)),
			},
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
