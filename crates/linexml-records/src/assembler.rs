//! Assembly of decoded records into a [`People`] tree.
//!
//! The assembler walks the lines once, in order, and keeps track of the
//! person and family that later records attach to:
//!
//! - `P` starts a new person and closes any open family.
//! - `F` attaches a family to the current person and opens it.
//! - `A` and `T` attach to the open family, or to the current person when no
//!   family is open.
//!
//! The first error stops assembly; no partial tree is returned.

use crate::error::{ParseError, ParseErrorKind};
use crate::model::{Contact, People, PersonChild};
use crate::record::{Record, RecordKind, decode_record};

/// Attachment targets carried from one line to the next.
///
/// Both fields are indices into the tree being built: `current_person` into
/// [`People::persons`], `current_family` into that person's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ParseContext {
    current_person: Option<usize>,
    current_family: Option<usize>,
}

/// Incremental tree builder.
///
/// Feed lines with [`push_line`](Self::push_line) and take the tree with
/// [`finish`](Self::finish). Errors are stamped with the 1-based number of the
/// line that caused them.
///
/// # Examples
///
/// ```
/// use linexml_records::TreeAssembler;
///
/// let mut assembler = TreeAssembler::new();
/// assembler.push_line("P|Carl Gustaf|Bernadotte")?;
/// assembler.push_line("F|Victoria|1977")?;
/// assembler.push_line("A|Haga Slott|Stockholm")?;
///
/// let people = assembler.finish();
/// let victoria = people.persons[0].families().next().unwrap();
/// assert_eq!(victoria.addresses().count(), 1);
/// # Ok::<(), linexml_records::ParseError>(())
/// ```
#[derive(Debug, Default)]
pub struct TreeAssembler {
    people: People,
    context: ParseContext,
    line_number: usize,
}

impl TreeAssembler {
    /// Creates an assembler with an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Decodes `line` and attaches it to the tree.
    ///
    /// # Errors
    ///
    /// Returns the decode error for a malformed line,
    /// [`ParseErrorKind::OrphanFamily`] for a family with no person before it,
    /// and [`ParseErrorKind::NoTarget`] for an address or phone with nothing
    /// to attach to. After an error the assembler should be dropped.
    pub fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_number += 1;
        let record = decode_record(line).map_err(|e| e.at_line(self.line_number))?;
        self.place(record)
            .map_err(|kind| ParseError::new(kind, line).at_line(self.line_number))
    }

    /// Consumes the assembler and returns the finished tree.
    #[must_use]
    pub fn finish(self) -> People {
        tracing::debug!(
            persons = self.people.len(),
            lines = self.line_number,
            "Assembled people tree"
        );
        self.people
    }

    fn place(&mut self, record: Record) -> Result<(), ParseErrorKind> {
        match record {
            Record::Person(person) => {
                self.people.persons.push(person);
                self.context.current_person = Some(self.people.persons.len() - 1);
                self.context.current_family = None;
                tracing::trace!(line = self.line_number, "Opened person");
            }
            Record::Family(family) => {
                let person_index = self
                    .context
                    .current_person
                    .ok_or(ParseErrorKind::OrphanFamily)?;
                let children = &mut self.people.persons[person_index].children;
                children.push(PersonChild::Family(family));
                self.context.current_family = Some(children.len() - 1);
                tracing::trace!(line = self.line_number, "Opened family");
            }
            Record::Address(address) => {
                self.attach(Contact::Address(address), RecordKind::Address)?;
            }
            Record::Phone(phone) => {
                self.attach(Contact::Phone(phone), RecordKind::Phone)?;
            }
        }
        Ok(())
    }

    /// Attaches an address or phone to the open family, else the current person.
    fn attach(&mut self, contact: Contact, kind: RecordKind) -> Result<(), ParseErrorKind> {
        let Some(person_index) = self.context.current_person else {
            return Err(ParseErrorKind::NoTarget(kind));
        };
        let children = &mut self.people.persons[person_index].children;

        if let Some(family_index) = self.context.current_family
            && let Some(PersonChild::Family(family)) = children.get_mut(family_index)
        {
            family.children.push(contact);
            tracing::trace!(line = self.line_number, %kind, "Attached to family");
            return Ok(());
        }

        children.push(contact.into());
        tracing::trace!(line = self.line_number, %kind, "Attached to person");
        Ok(())
    }
}

/// Parses a complete sequence of lines into a [`People`] tree.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; see
/// [`TreeAssembler::push_line`].
///
/// # Examples
///
/// ```
/// use linexml_records::{parse, ParseErrorKind};
///
/// let err = parse(["F|Victoria|1977"]).unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::OrphanFamily);
/// assert_eq!(err.line_number, Some(1));
/// ```
pub fn parse<I, S>(lines: I) -> Result<People, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = TreeAssembler::new();
    for line in lines {
        assembler.push_line(line.as_ref())?;
    }
    Ok(assembler.finish())
}
