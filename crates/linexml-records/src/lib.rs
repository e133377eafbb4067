//! Parser and tree assembler for pipe-delimited people records.
//!
//! Each input line is one record:
//!
//! ```text
//! P|<firstname>|<lastname>
//! F|<name>|<born>
//! A|<street>|<city>[|<zip>]
//! T|<mobile>|<home>
//! ```
//!
//! Records are decoded by [`decode_record`] and placed into a [`People`] tree
//! by the [`TreeAssembler`]. Address and phone records attach to the most
//! recent family if one is open, otherwise to the most recent person.
//!
//! # Examples
//!
//! ```
//! use linexml_records::{parse, PersonChild};
//!
//! let people = parse(["P|Barack|Obama", "A|1600 Pennsylvania Avenue|Washington|20500"])?;
//! assert_eq!(people.persons.len(), 1);
//! assert!(matches!(people.persons[0].children[0], PersonChild::Address(_)));
//! # Ok::<(), linexml_records::ParseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assembler;
pub mod atomic;
pub mod error;
pub mod model;
pub mod reader;
pub mod record;
pub mod xml;

pub use assembler::{TreeAssembler, parse};
pub use atomic::write_atomic;
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use model::{Address, Contact, Family, People, Person, PersonChild, Phone};
pub use reader::{LineReader, parse_file, parse_reader};
pub use record::{FieldCount, Record, RecordKind, decode_record};
pub use xml::{XmlOptions, to_xml_string, write_xml};
