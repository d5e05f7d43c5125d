use std::fmt::{self, Display};

use termion::color as term;
pub use termion::color::{Green, Red, Yellow};


/// Paint the foreground with a given color when formatting the value.
pub struct Fg<C, T>(pub C, pub T);


impl<C, T> Display for Fg<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", term::Fg(self.0), self.1, term::Fg(term::Reset))
	}
}


/// The prefix of error diagnostics.
pub fn error() -> Fg<Red, &'static str> {
	Fg(Red, "Error")
}


/// The prefix of warning diagnostics.
pub fn warning() -> Fg<Yellow, &'static str> {
	Fg(Yellow, "Warning")
}
