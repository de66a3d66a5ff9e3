use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Marker that starts a directive in a format string
pub const DIRECTIVE_MARKER: char = '%';

/// Comment prefix `#`, alternatives split on `/`, fields separated by `^`,
/// mnemonic optionally followed by a `^`-introduced distinguisher, english to end of line
pub const DEFAULT_FORMAT: &str = "%c#%a/%i^%h^%k^%r%d^|%e/";

/// Maximum number of characters kept per field
pub const DEFAULT_FIELD_CAPACITY: usize = 39;

/// Fields that may carry alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Reading,
    Logograph,
    Mnemonic,
}

impl Field {
    fn from_kind(kind: char) -> Option<Self> {
        match kind {
            'h' => Some(Field::Reading),
            'k' => Some(Field::Logograph),
            'r' => Some(Field::Mnemonic),
            _ => None,
        }
    }
}

/// How a field's text span ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Literal(char),
    /// Whichever of the two occurs first; `optional` wins ties and opens a distinguisher
    Either { optional: char, fallback: char },
}

/// One compiled parsing instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Text matched verbatim against the line
    Literal(String),
    /// Skip up to and including the delimiter
    Ignore(char),
    Field {
        field: Field,
        terminator: Terminator,
        alternative: Option<char>,
    },
    /// Text up to `fallback`, only when the preceding field ended on its optional delimiter
    Distinguisher { fallback: char },
    /// Rest of the line
    English,
}

/// Non-fatal findings of the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWarning {
    MisplacedComment { position: usize },
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatWarning::MisplacedComment { position } => write!(
                f,
                "'%c' at byte {position} is not the first directive of the format"
            ),
        }
    }
}

/// A validated format string, ready to parse any number of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    source: String,
    steps: Vec<Step>,
    comment: Option<char>,
    capacity: usize,
    warnings: Vec<FormatWarning>,
}

impl Format {
    /// Validate and compile a format string with the default field capacity
    pub fn compile(source: &str) -> Result<Self, FormatError> {
        Self::with_capacity(source, DEFAULT_FIELD_CAPACITY)
    }

    /// Validate and compile a format string, keeping at most `capacity` characters per field
    pub fn with_capacity(source: &str, capacity: usize) -> Result<Self, FormatError> {
        let mut cursor = Cursor::new(source);
        let mut steps = Vec::new();
        let mut literal = String::new();
        let mut alternative = None;
        let mut comment = None;
        let mut warnings = Vec::new();

        while let Some((position, ch)) = cursor.bump() {
            if ch != DIRECTIVE_MARKER {
                literal.push(ch);
                continue;
            }

            let Some((_, kind)) = cursor.bump() else {
                return Err(FormatError::DanglingMarker { position });
            };

            if !literal.is_empty() {
                steps.push(Step::Literal(std::mem::take(&mut literal)));
            }

            if let Some(field) = Field::from_kind(kind) {
                match cursor.delimiter(position, kind)? {
                    Delimiter::Literal(delim) => steps.push(Step::Field {
                        field,
                        terminator: Terminator::Literal(delim),
                        alternative,
                    }),
                    Delimiter::Distinguisher {
                        optional, fallback, ..
                    } => {
                        steps.push(Step::Field {
                            field,
                            terminator: Terminator::Either { optional, fallback },
                            alternative,
                        });
                        steps.push(Step::Distinguisher { fallback });
                    }
                }
                continue;
            }

            match kind {
                'i' => match cursor.delimiter(position, kind)? {
                    Delimiter::Literal(delim) => steps.push(Step::Ignore(delim)),
                    Delimiter::Distinguisher { position, .. } => {
                        return Err(FormatError::OrphanDistinguisher { position });
                    }
                },
                'e' => steps.push(Step::English),
                'a' => alternative = Some(cursor.argument(position, kind)?),
                'd' => return Err(FormatError::OrphanDistinguisher { position }),
                'c' => {
                    comment = Some(cursor.argument(position, kind)?);
                    if position != 0 {
                        let warning = FormatWarning::MisplacedComment { position };
                        tracing::warn!("{warning}");
                        warnings.push(warning);
                    }
                }
                kind => return Err(FormatError::InvalidDirective { position, kind }),
            }
        }

        if !literal.is_empty() {
            steps.push(Step::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            steps,
            comment,
            capacity,
            warnings,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn comment_prefix(&self) -> Option<char> {
        self.comment
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn warnings(&self) -> &[FormatWarning] {
        &self.warnings
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

enum Delimiter {
    Literal(char),
    Distinguisher {
        position: usize,
        optional: char,
        fallback: char,
    },
}

/// Character cursor over the format source, yielding byte positions
struct Cursor<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    /// Single argument character of directive `kind`, never a marker
    fn argument(&mut self, position: usize, kind: char) -> Result<char, FormatError> {
        match self.chars.peek() {
            Some(&(_, ch)) if ch != DIRECTIVE_MARKER => {
                self.chars.next();
                Ok(ch)
            }
            _ => Err(FormatError::MissingArgument { position, kind }),
        }
    }

    /// Literal delimiter or `%d<optional><fallback>` after a field directive
    fn delimiter(&mut self, position: usize, kind: char) -> Result<Delimiter, FormatError> {
        match self.chars.next() {
            None => Err(FormatError::MissingDelimiter { position, kind }),
            Some((marker, DIRECTIVE_MARKER)) => match self.chars.next() {
                Some((_, 'd')) => {
                    let optional = self.argument(marker, 'd')?;
                    let fallback = self.argument(marker, 'd')?;
                    Ok(Delimiter::Distinguisher {
                        position: marker,
                        optional,
                        fallback,
                    })
                }
                _ => Err(FormatError::MissingDelimiter { position, kind }),
            },
            Some((_, delim)) => Ok(Delimiter::Literal(delim)),
        }
    }
}
