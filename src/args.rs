use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};

use lexmata::lexer::Options;


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Args {
	/// Tokenize a source file, or stdin.
	Tokenize {
		/// Extra automata definitions, registered after the defaults.
		automata: Vec<PathBuf>,
		/// Whether to register the default identifier, integer and float automata.
		defaults: bool,
		options: Options,
		source: Option<PathBuf>,
	},
	/// Convert an automaton to a DFA.
	Convert { automaton: PathBuf },
	/// Minimize a DFA.
	Minimize { automaton: PathBuf },
	/// Report on an automaton, and run it over the given inputs.
	Check {
		automaton: PathBuf,
		inputs: Vec<String>,
	},
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		lexmata =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@setting SubcommandRequiredElseHelp)
			(@subcommand tokenize =>
				(about: "Split the source into tokens, using the longest match of the automata")
				(@arg automata: -a --automata +takes_value +multiple number_of_values(1)
					"Load an automaton definition (JSON), may be repeated")
				(@arg bare: --bare "Don't register the default automata")
				(@arg whitespace: --whitespace "Produce whitespace tokens")
				(@arg comments: --comments "Produce comment tokens")
				(@arg source: "The source file, defaults to stdin")
			)
			(@subcommand convert =>
				(about: "Convert an automaton definition to an equivalent DFA")
				(@arg automaton: +required "The automaton definition (JSON)")
			)
			(@subcommand minimize =>
				(about: "Minimize a DFA definition")
				(@arg automaton: +required "The automaton definition (JSON)")
			)
			(@subcommand check =>
				(about: "Validate an automaton definition and run it over some inputs")
				(@arg automaton: +required "The automaton definition (JSON)")
				(@arg inputs: ... "Strings to accept or reject")
			)
	);

	let matches = match app.get_matches_from_safe(args) {
		Ok(matches) => matches,

		Err(error) => return match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	};

	let args = match matches.subcommand() {
		("tokenize", Some(matches)) => Args::Tokenize {
			automata: matches
				.values_of_os("automata")
				.map(|paths| paths.map(PathBuf::from).collect())
				.unwrap_or_default(),
			defaults: !matches.is_present("bare"),
			options: Options {
				skip_whitespace: !matches.is_present("whitespace"),
				skip_comments: !matches.is_present("comments"),
			},
			source: matches.value_of_os("source").map(PathBuf::from),
		},

		("convert", Some(matches)) => Args::Convert { automaton: path(matches, "automaton") },

		("minimize", Some(matches)) => Args::Minimize { automaton: path(matches, "automaton") },

		("check", Some(matches)) => Args::Check {
			automaton: path(matches, "automaton"),
			inputs: matches
				.values_of("inputs")
				.map(|inputs| inputs.map(String::from).collect())
				.unwrap_or_default(),
		},

		// SubcommandRequiredElseHelp rejects everything else.
		(name, _) => unreachable!("unknown subcommand: {}", name),
	};

	Ok(Command::Run(args))
}


/// A path argument. Required arguments are always present.
fn path(matches: &clap::ArgMatches, name: &str) -> PathBuf {
	matches
		.value_of_os(name)
		.map(PathBuf::from)
		.unwrap_or_default()
}


#[cfg(test)]
mod tests {
	use super::*;

	use assert_matches::assert_matches;


	#[test]
	fn test_tokenize_args() {
		let command = parse(
			vec!["lexmata", "tokenize", "-a", "x.json", "--automata", "y.json", "--comments", "in.c"]
		);

		assert_matches!(
			command,
			Ok(Command::Run(Args::Tokenize { automata, defaults: true, options, source: Some(source) })) => {
				assert_eq!(automata, [PathBuf::from("x.json"), PathBuf::from("y.json")]);
				assert_eq!(options, Options { skip_whitespace: true, skip_comments: false });
				assert_eq!(source, PathBuf::from("in.c"));
			}
		);

		assert_matches!(
			parse(vec!["lexmata", "tokenize", "--bare"]),
			Ok(Command::Run(Args::Tokenize { defaults: false, source: None, .. }))
		);
	}


	#[test]
	fn test_check_args() {
		assert_matches!(
			parse(vec!["lexmata", "check", "a.json", "ab", "", "c"]),
			Ok(Command::Run(Args::Check { automaton, inputs })) => {
				assert_eq!(automaton, PathBuf::from("a.json"));
				assert_eq!(inputs, ["ab", "", "c"]);
			}
		);
	}


	#[test]
	fn test_help_and_errors() {
		assert_matches!(parse(vec!["lexmata", "--help"]), Ok(Command::Help(_)));
		assert_matches!(parse(vec!["lexmata", "--version"]), Ok(Command::Version(_)));
		assert_matches!(parse(vec!["lexmata", "convert"]), Err(_));
		assert_matches!(parse(vec!["lexmata"]), Err(_));
	}
}
