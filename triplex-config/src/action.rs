//! Parser of binding strings, such as `Escape`, `MO(1)` or `LT(2, Space)`

use std::fmt;

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

// Pest parser using the grammar file
#[derive(Parser)]
#[grammar = "action.pest"]
struct ActionParser;

/// A parsed binding: the behavior name and its arguments.
///
/// Arguments are actions themselves, so `LT(2, MO(1))` is a valid binding. A plain number or
/// keycode argument is an action without arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionSpec {
    pub name: String,
    pub args: Vec<ActionSpec>,
}

impl ActionSpec {
    pub fn new(name: impl Into<String>, args: Vec<ActionSpec>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse a binding string
    pub fn parse(binding: &str) -> Result<Self, String> {
        let action = ActionParser::parse(Rule::binding, binding)
            .map_err(|e| format!("Invalid binding '{}': {}", binding, e))?
            .flat_map(|pair| pair.into_inner())
            .find(|pair| pair.as_rule() == Rule::action)
            .ok_or_else(|| format!("Invalid binding '{}': no action found", binding))?;
        Self::from_pair(action)
    }

    fn from_pair(pair: Pair<'_, Rule>) -> Result<Self, String> {
        let mut name = None;
        let mut args = Vec::new();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::identifier => name = Some(inner.as_str().to_string()),
                Rule::arguments => {
                    for argument in inner.into_inner() {
                        let action = argument
                            .into_inner()
                            .next()
                            .ok_or("Missing action in argument")?;
                        args.push(Self::from_pair(action)?);
                    }
                }
                rule => return Err(format!("Unexpected rule encountered in binding: {:?}", rule)),
            }
        }
        let name = name.ok_or("Missing behavior name in binding")?;
        Ok(Self { name, args })
    }
}

impl fmt::Display for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
