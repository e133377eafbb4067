//! XML rendering of a [`People`] tree.
//!
//! The document has a `people` root. Every node becomes an element and every
//! field becomes a child element holding the field text:
//!
//! ```text
//! <people>
//!   <person>
//!     <firstname>Barack</firstname>
//!     <lastname>Obama</lastname>
//!     <address>
//!       <street>1600 Pennsylvania Avenue</street>
//!       <city>Washington</city>
//!       <zip>20500</zip>
//!     </address>
//!   </person>
//! </people>
//! ```
//!
//! No XML declaration is written. Empty fields become self-closing elements
//! and a missing zip code produces no element.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::model::{Address, Contact, Family, People, Person, PersonChild, Phone};
use crate::{Error, Result};

/// Default indentation width, in spaces.
pub const DEFAULT_INDENT: usize = 2;

/// Options for XML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level. `0` renders the whole document on one line.
    pub indent: usize,
}

impl XmlOptions {
    /// Creates options with the given indentation width.
    #[must_use]
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Writes `people` as XML to `out`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to `out` fails.
pub fn write_xml<W: Write>(out: W, people: &People, options: XmlOptions) -> Result<()> {
    let mut xml = if options.indent == 0 {
        Writer::new(out)
    } else {
        Writer::new_with_indent(out, b' ', options.indent)
    };
    write_people(&mut xml, people)?;
    Ok(())
}

/// Renders `people` as an XML string, without a trailing newline.
///
/// # Errors
///
/// Returns [`Error::Xml`] if the rendered bytes are not valid UTF-8, which
/// only happens if the writer itself misbehaves.
///
/// # Examples
///
/// ```
/// use linexml_records::{parse, to_xml_string, XmlOptions};
///
/// let people = parse(["P|Ada|Lovelace"])?;
/// let xml = to_xml_string(&people, XmlOptions::with_indent(0))?;
/// assert_eq!(
///     xml,
///     "<people><person><firstname>Ada</firstname><lastname>Lovelace</lastname></person></people>"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_xml_string(people: &People, options: XmlOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml(&mut buffer, people, options)?;
    String::from_utf8(buffer).map_err(|e| Error::Xml(e.to_string()))
}

fn write_people<W: Write>(xml: &mut Writer<W>, people: &People) -> io::Result<()> {
    if people.is_empty() {
        return xml.write_event(Event::Empty(BytesStart::new("people")));
    }
    start(xml, "people")?;
    for person in &people.persons {
        write_person(xml, person)?;
    }
    end(xml, "people")
}

fn write_person<W: Write>(xml: &mut Writer<W>, person: &Person) -> io::Result<()> {
    start(xml, "person")?;
    field(xml, "firstname", &person.firstname)?;
    field(xml, "lastname", &person.lastname)?;
    for child in &person.children {
        match child {
            PersonChild::Address(address) => write_address(xml, address)?,
            PersonChild::Phone(phone) => write_phone(xml, phone)?,
            PersonChild::Family(family) => write_family(xml, family)?,
        }
    }
    end(xml, "person")
}

fn write_family<W: Write>(xml: &mut Writer<W>, family: &Family) -> io::Result<()> {
    start(xml, "family")?;
    field(xml, "name", &family.name)?;
    field(xml, "born", &family.born)?;
    for child in &family.children {
        match child {
            Contact::Address(address) => write_address(xml, address)?,
            Contact::Phone(phone) => write_phone(xml, phone)?,
        }
    }
    end(xml, "family")
}

fn write_address<W: Write>(xml: &mut Writer<W>, address: &Address) -> io::Result<()> {
    start(xml, "address")?;
    field(xml, "street", &address.street)?;
    field(xml, "city", &address.city)?;
    if let Some(zip) = &address.zip {
        field(xml, "zip", zip)?;
    }
    end(xml, "address")
}

fn write_phone<W: Write>(xml: &mut Writer<W>, phone: &Phone) -> io::Result<()> {
    start(xml, "phone")?;
    field(xml, "mobile", &phone.mobile)?;
    field(xml, "home", &phone.home)?;
    end(xml, "phone")
}

fn start<W: Write>(xml: &mut Writer<W>, name: &str) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))
}

fn end<W: Write>(xml: &mut Writer<W>, name: &str) -> io::Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))
}

/// Writes `<name>text</name>`, or `<name/>` for empty text.
fn field<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return xml.write_event(Event::Empty(BytesStart::new(name)));
    }
    start(xml, name)?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    end(xml, name)
}
