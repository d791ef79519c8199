#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Number of distinct labels produced by [`LabelScheme::Letters`].
const ALPHABET_LEN: usize = 26;

/// Names given to the unknowns of a system, one per row in row order.
///
/// Labels are positional: the unknown resolved by row `i` gets the `i`-th label.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LabelScheme {
    /// `x`, `y`, `z`, then wrapping around to `a`, `b`, ... `w`. Supports at most 26 unknowns.
    #[default]
    Letters,
    /// The prefix followed by the row index: `x0`, `x1`, ... for a prefix of `"x"`.
    Indexed(String),
    /// Caller-supplied labels; there must be exactly one per unknown.
    Custom(Vec<String>),
}

impl LabelScheme {
    /// Produces the labels for a system with `unknowns` rows.
    pub fn labels(&self, unknowns: usize) -> Result<Vec<String>, Error> {
        match self {
            LabelScheme::Letters => {
                if unknowns > ALPHABET_LEN {
                    return Err(Error::LabelsExhausted {
                        unknowns,
                        available: ALPHABET_LEN,
                    });
                }
                Ok((0..unknowns).map(letter).collect())
            }
            LabelScheme::Indexed(prefix) => {
                Ok((0..unknowns).map(|i| format!("{prefix}{i}")).collect())
            }
            LabelScheme::Custom(labels) => {
                if labels.len() != unknowns {
                    return Err(Error::LabelCount {
                        expected: unknowns,
                        found: labels.len(),
                    });
                }
                Ok(labels.clone())
            }
        }
    }
}

/// `i`-th letter counting from `x` and wrapping past `z`.
fn letter(i: usize) -> String {
    let offset = (usize::from(b'x' - b'a') + i) % ALPHABET_LEN;
    char::from(b'a' + offset as u8).to_string()
}
