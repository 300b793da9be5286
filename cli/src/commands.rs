//! Command parsing and dispatch.
//!
//! Each command calls into `strand_bindings`, so native failures arrive here
//! already translated into [`BoundaryFailure`].

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use strand_bindings::{BoundaryFailure, gfile, hts_verbose, math, statusor_examples};

pub const USAGE: &str = "\
usage: strand <command> [args]

commands:
  demo                     run every StatusOr example through the boundary
  phred <perror>           error probability -> Phred score
  perror <phred>           Phred score -> error probability
  zero-shift <v>...        shift log10 likelihoods so the maximum is 0
  exists <path>            whether a path exists
  glob <pattern>           sorted paths matching a glob pattern
  cat <path>               print a file line by line
  write <path> <text>      write text to a file (created or truncated)
  verbosity [level]        show, or set then show, native verbosity
  help                     show this message";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Demo,
    Phred { perror: f64 },
    Perror { phred: f64 },
    ZeroShift { values: Vec<f64> },
    Exists { path: String },
    Glob { pattern: String },
    Cat { path: String },
    Write { path: String, text: String },
    Verbosity { level: Option<String> },
    Help,
}

/// What a command produced. `Nothing` is the void-success case.
#[derive(Debug, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
    Nothing,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        let command = match name.as_str() {
            "demo" => {
                expect_args(name, rest, 0)?;
                Command::Demo
            }
            "phred" => {
                expect_args(name, rest, 1)?;
                Command::Phred {
                    perror: parse_number(&rest[0])?,
                }
            }
            "perror" => {
                expect_args(name, rest, 1)?;
                Command::Perror {
                    phred: parse_number(&rest[0])?,
                }
            }
            "zero-shift" => Command::ZeroShift {
                values: rest
                    .iter()
                    .map(|raw| parse_number(raw))
                    .collect::<Result<_>>()?,
            },
            "exists" => {
                expect_args(name, rest, 1)?;
                Command::Exists {
                    path: rest[0].clone(),
                }
            }
            "glob" => {
                expect_args(name, rest, 1)?;
                Command::Glob {
                    pattern: rest[0].clone(),
                }
            }
            "cat" => {
                expect_args(name, rest, 1)?;
                Command::Cat {
                    path: rest[0].clone(),
                }
            }
            "write" => {
                expect_args(name, rest, 2)?;
                Command::Write {
                    path: rest[0].clone(),
                    text: rest[1].clone(),
                }
            }
            "verbosity" => {
                if rest.len() > 1 {
                    bail!("verbosity takes at most 1 argument, got {}", rest.len());
                }
                Command::Verbosity {
                    level: rest.first().cloned(),
                }
            }
            "help" | "-h" | "--help" => Command::Help,
            other => bail!("unknown command '{other}'"),
        };
        Ok(command)
    }

    pub fn execute(self) -> Result<Output, BoundaryFailure> {
        match self {
            Command::Demo => Ok(Output::Json(run_demo())),
            Command::Phred { perror } => {
                math::perror_to_phred(perror).map(|v| Output::Json(float(v)))
            }
            Command::Perror { phred } => {
                math::phred_to_perror(phred).map(|v| Output::Json(float(v)))
            }
            Command::ZeroShift { values } => math::zero_shift_log10_probs(&values)
                .map(|v| Output::Json(v.into_iter().map(float).collect())),
            Command::Exists { path } => Ok(Output::Json(json!(gfile::exists(path)))),
            Command::Glob { pattern } => gfile::glob(&pattern).map(|v| Output::Json(json!(v))),
            Command::Cat { path } => {
                let mut file = gfile::ReadableFile::new(&path)?;
                let lines = file.read_lines()?;
                file.close()?;
                Ok(Output::Text(lines.concat()))
            }
            Command::Write { path, text } => {
                let mut file = gfile::WritableFile::new(&path)?;
                file.write(&text)?;
                file.close()?;
                Ok(Output::Nothing)
            }
            Command::Verbosity { level } => {
                if let Some(raw) = level {
                    match raw.trim().parse::<i32>() {
                        Ok(value) => hts_verbose::set_raw(value)?,
                        Err(_) => {
                            hts_verbose::set_by_name(&raw)?;
                        }
                    }
                }
                let level = hts_verbose::get();
                Ok(Output::Json(json!({
                    "level": level.as_str(),
                    "value": level.value(),
                })))
            }
            Command::Help => Ok(Output::Text(format!("{USAGE}\n"))),
        }
    }
}

fn expect_args(name: &str, rest: &[String], count: usize) -> Result<()> {
    if rest.len() != count {
        bail!("{name} takes {count} argument(s), got {}", rest.len());
    }
    Ok(())
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .with_context(|| format!("'{raw}' is not a number"))
}

/// JSON has no infinities or NaN; spell them out instead of emitting `null`.
fn float(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else if value.is_nan() {
        json!("NaN")
    } else if value > 0.0 {
        json!("inf")
    } else {
        json!("-inf")
    }
}

/// Run every example and report each outcome, in a fixed order.
fn run_demo() -> Value {
    fn entry<T: Into<Value>>(name: &str, result: Result<T, BoundaryFailure>) -> Value {
        match result {
            Ok(value) => json!({ "operation": name, "value": value.into() }),
            Err(err) => json!({ "operation": name, "error": err.to_string() }),
        }
    }

    use statusor_examples as ex;
    Value::Array(vec![
        entry(ex::MAKE_INT_OK.as_str(), ex::make_int_ok()),
        entry(ex::MAKE_INT_FAIL.as_str(), ex::make_int_fail()),
        entry(ex::MAKE_STR_OK.as_str(), ex::make_str_ok()),
        entry(ex::MAKE_STR_FAIL.as_str(), ex::make_str_fail()),
        entry(
            ex::MAKE_INT_UNIQUE_PTR_OK.as_str(),
            ex::make_int_unique_ptr_ok().map(|boxed| *boxed),
        ),
        entry(
            ex::MAKE_INT_UNIQUE_PTR_FAIL.as_str(),
            ex::make_int_unique_ptr_fail().map(|boxed| *boxed),
        ),
        entry(ex::MAKE_INT_VECTOR_OK.as_str(), ex::make_int_vector_ok()),
        entry(ex::MAKE_INT_VECTOR_FAIL.as_str(), ex::make_int_vector_fail()),
        entry(
            ex::FUNC_RETURNING_STATUS_OK.as_str(),
            ex::func_returning_status_ok().map(|()| Value::Null),
        ),
        entry(
            ex::FUNC_RETURNING_STATUS_FAIL.as_str(),
            ex::func_returning_status_fail().map(|()| Value::Null),
        ),
    ])
}
