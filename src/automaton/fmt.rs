use std::fmt::{self, Display};

use super::{Automaton, Kind, State, Transition};


/// Section headers are indented once, their entries twice.
const SECTION: &str = "\t";
const ENTRY: &str = "\t\t";


/// Write symbols separated by commas.
fn symbols<I, T>(f: &mut fmt::Formatter, symbols: I) -> fmt::Result
where
	I: IntoIterator<Item = T>,
	T: Display,
{
	let mut symbols = symbols.into_iter();

	if let Some(symbol) = symbols.next() {
		symbol.fmt(f)?;
	}

	for symbol in symbols {
		write!(f, ", {}", symbol)?;
	}

	Ok(())
}


impl Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Nfa => "NFA".fmt(f),
			Self::Dfa => "DFA".fmt(f),
		}
	}
}


impl Display for State {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.id.fmt(f)?;

		if self.label != self.id {
			write!(f, " \"{}\"", self.label)?;
		}

		match (self.is_initial, self.is_final) {
			(true, true) => " (initial, final)".fmt(f),
			(true, false) => " (initial)".fmt(f),
			(false, true) => " (final)".fmt(f),
			(false, false) => Ok(()),
		}
	}
}


impl Display for Transition {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} -> {}: ", self.from, self.to)?;
		symbols(f, self.symbols.iter())
	}
}


impl Display for Automaton {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "{} {} \"{}\"", self.kind, self.id, self.name)?;

		write!(f, "{}alphabet: {{", SECTION)?;
		symbols(f, self.alphabet.iter())?;
		writeln!(f, "}}")?;

		writeln!(f, "{}states:", SECTION)?;
		for state in self.states() {
			writeln!(f, "{}{}", ENTRY, state)?;
		}

		writeln!(f, "{}transitions:", SECTION)?;
		for transition in &self.transitions {
			writeln!(f, "{}{}", ENTRY, transition)?;
		}

		Ok(())
	}
}
