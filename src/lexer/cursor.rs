use std::fmt::{self, Display};


/// A human readable position in the source code. Both lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
	pub line: u32,
	pub column: u32,
}


impl SourcePos {
	pub fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}


	pub fn visit(&mut self, input: char) {
		if input == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
	}
}


impl Default for SourcePos {
	fn default() -> Self {
		Self { line: 1, column: 1 }
	}
}


impl Display for SourcePos {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}


/// A cursor for the source code. Offsets are in bytes, and always lie on character
/// boundaries.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a str,
	offset: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}


	/// The character after the current one.
	pub fn peek_next(&self) -> Option<char> {
		self.rest().chars().nth(1)
	}


	/// The input from the current character onwards.
	pub fn rest(&self) -> &'a str {
		&self.input[self.offset ..]
	}


	/// The input from the given offset up to, but not including, the current character.
	pub fn slice_from(&self, start: usize) -> &'a str {
		&self.input[start .. self.offset]
	}


	/// The input from the given offset up to, and including, the current character.
	pub fn slice_through(&self, start: usize) -> &'a str {
		let end = self.peek().map_or(self.offset, |c| self.offset + c.len_utf8());
		&self.input[start .. end]
	}


	pub fn step(&mut self) {
		if let Some(c) = self.peek() {
			self.pos.visit(c);
			self.offset += c.len_utf8();
		}
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		Self {
			input,
			offset: 0,
			pos: SourcePos::default()
		}
	}
}
