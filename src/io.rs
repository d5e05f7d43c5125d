use std::{
	convert::TryFrom,
	fmt::{self, Display},
	fs::File,
	io::{self, BufReader, Read},
	path::{Path, PathBuf},
};

use lexmata::{automaton::{self, Definition}, Automaton};


/// Why an input file could not be used.
#[derive(Debug)]
pub enum ErrorKind {
	Io(io::Error),
	Json(serde_json::Error),
	Automaton(automaton::Error),
}


/// An input error, bound to the offending file.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	pub path: PathBuf,
}


impl std::error::Error for Error {}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}: ", self.path.display())?;

		match &self.error {
			ErrorKind::Io(error) => error.fmt(f),
			ErrorKind::Json(error) => write!(f, "invalid definition: {}", error),
			ErrorKind::Automaton(error) => error.fmt(f),
		}
	}
}


impl Error {
	fn io(error: io::Error, path: &Path) -> Self {
		Self { error: ErrorKind::Io(error), path: path.into() }
	}

	fn json(error: serde_json::Error, path: &Path) -> Self {
		Self { error: ErrorKind::Json(error), path: path.into() }
	}

	fn automaton(error: automaton::Error, path: &Path) -> Self {
		Self { error: ErrorKind::Automaton(error), path: path.into() }
	}
}


/// Read the whole source, from the given file or from stdin.
pub fn read_source(path: Option<&Path>) -> Result<String, Error> {
	let mut source = String::new();

	match path {
		Some(path) => File::open(path)
			.and_then(|mut file| file.read_to_string(&mut source))
			.map_err(|error| Error::io(error, path))?,

		None => io::stdin()
			.lock()
			.read_to_string(&mut source)
			.map_err(|error| Error::io(error, Path::new("<stdin>")))?,
	};

	Ok(source)
}


/// Load an automaton from a JSON definition file.
pub fn load_automaton(path: &Path) -> Result<Automaton, Error> {
	let file = File::open(path).map_err(|error| Error::io(error, path))?;

	let definition: Definition = serde_json::from_reader(BufReader::new(file))
		.map_err(|error| Error::json(error, path))?;

	Automaton::try_from(definition).map_err(|error| Error::automaton(error, path))
}


/// Pretty print an automaton as a JSON definition.
pub fn to_json(automaton: &Automaton) -> String {
	serde_json::to_string_pretty(&Definition::from(automaton))
		.expect("definitions contain only strings, booleans and sequences")
}
