//! Decoding of single record lines.
//!
//! A record line starts with a one-letter type tag followed by `|`-separated
//! fields. [`decode_record`] validates the tag and the field count and maps the
//! fields onto a typed [`Record`]. Fields are taken as written: only the line
//! as a whole is trimmed, and no field content is validated.

use std::fmt;

use crate::error::{ParseError, ParseErrorKind};
use crate::model::{Address, Family, Person, Phone};

/// Field separator within a record line.
pub const FIELD_SEPARATOR: char = '|';

/// The four record kinds of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `A` - an address.
    Address,
    /// `F` - a family member of the current person.
    Family,
    /// `P` - a person, starting a new top-level entry.
    Person,
    /// `T` - phone numbers.
    Phone,
}

impl RecordKind {
    /// All record kinds, ordered by tag.
    pub const ALL: [RecordKind; 4] = [Self::Address, Self::Family, Self::Person, Self::Phone];

    /// Human-readable list of the accepted tags.
    pub const TAGS_DISPLAY: &'static str = "A, F, P, T";

    /// Looks up the kind for a leading tag character.
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'A' => Some(Self::Address),
            'F' => Some(Self::Family),
            'P' => Some(Self::Person),
            'T' => Some(Self::Phone),
            _ => None,
        }
    }

    /// Returns the tag character of this kind.
    #[must_use]
    pub fn tag(self) -> char {
        match self {
            Self::Address => 'A',
            Self::Family => 'F',
            Self::Person => 'P',
            Self::Phone => 'T',
        }
    }

    /// Returns the number of fields a record of this kind accepts.
    ///
    /// Addresses take an optional trailing zip code, so they accept two or
    /// three fields. Every other kind takes exactly two.
    #[must_use]
    pub fn arity(self) -> FieldCount {
        match self {
            Self::Address => FieldCount::between(2, 3),
            Self::Family | Self::Person | Self::Phone => FieldCount::exactly(2),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl TryFrom<char> for RecordKind {
    type Error = ParseErrorKind;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(ParseErrorKind::UnknownType(tag))
    }
}

/// An inclusive range of accepted field counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCount {
    /// Fewest fields accepted.
    pub min: usize,
    /// Most fields accepted.
    pub max: usize,
}

impl FieldCount {
    /// Accepts exactly `count` fields.
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Accepts `min..=max` fields.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `count` fields are acceptable.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl fmt::Display for FieldCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

/// A decoded record line, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Decoded `A` line.
    Address(Address),
    /// Decoded `F` line.
    Family(Family),
    /// Decoded `P` line.
    Person(Person),
    /// Decoded `T` line.
    Phone(Phone),
}

impl Record {
    /// Returns the kind of this record.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Address(_) => RecordKind::Address,
            Self::Family(_) => RecordKind::Family,
            Self::Person(_) => RecordKind::Person,
            Self::Phone(_) => RecordKind::Phone,
        }
    }
}

/// Decodes one record line.
///
/// The line is trimmed, its first character is taken as the type tag, and the
/// text is split on `|`. The first segment (the one holding the tag) is
/// dropped and the remaining segments are the fields.
///
/// # Errors
///
/// - [`ParseErrorKind::EmptyLine`] if the line is blank.
/// - [`ParseErrorKind::UnknownType`] if the tag is not `A`, `F`, `P` or `T`.
/// - [`ParseErrorKind::Arity`] if the field count does not fit the kind.
///
/// # Examples
///
/// ```
/// use linexml_records::{decode_record, Record};
///
/// let record = decode_record(" P|Carl Gustaf|Bernadotte ")?;
/// let Record::Person(person) = record else { panic!("expected a person") };
/// assert_eq!(person.firstname, "Carl Gustaf");
/// assert_eq!(person.lastname, "Bernadotte");
/// # Ok::<(), linexml_records::ParseError>(())
/// ```
pub fn decode_record(line: &str) -> Result<Record, ParseError> {
    let trimmed = line.trim();
    let Some(tag) = trimmed.chars().next() else {
        return Err(ParseError::new(ParseErrorKind::EmptyLine, line));
    };

    let kind = RecordKind::try_from(tag).map_err(|kind| ParseError::new(kind, line))?;

    let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).skip(1).collect();
    let expected = kind.arity();
    let arity_error = || {
        ParseError::new(
            ParseErrorKind::Arity {
                kind,
                expected,
                found: fields.len(),
            },
            line,
        )
    };
    if !expected.accepts(fields.len()) {
        return Err(arity_error());
    }

    let record = match (kind, fields.as_slice()) {
        (RecordKind::Person, &[firstname, lastname]) => Record::Person(person([firstname, lastname])),
        (RecordKind::Family, &[name, born]) => Record::Family(family([name, born])),
        (RecordKind::Phone, &[mobile, home]) => Record::Phone(phone([mobile, home])),
        (RecordKind::Address, &[street, city]) => Record::Address(address([street, city], None)),
        (RecordKind::Address, &[street, city, zip]) => {
            Record::Address(address([street, city], Some(zip)))
        }
        // Unreachable after the arity check; kept as an error rather than a panic.
        _ => return Err(arity_error()),
    };

    Ok(record)
}

/// Maps `P` fields onto a [`Person`].
#[must_use]
pub fn person([firstname, lastname]: [&str; 2]) -> Person {
    Person::new(firstname, lastname)
}

/// Maps `T` fields onto a [`Phone`].
#[must_use]
pub fn phone([mobile, home]: [&str; 2]) -> Phone {
    Phone {
        mobile: mobile.to_string(),
        home: home.to_string(),
    }
}

/// Maps `A` fields onto an [`Address`].
#[must_use]
pub fn address([street, city]: [&str; 2], zip: Option<&str>) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        zip: zip.map(str::to_string),
    }
}

/// Maps `F` fields onto a [`Family`].
#[must_use]
pub fn family([name, born]: [&str; 2]) -> Family {
    Family::new(name, born)
}
