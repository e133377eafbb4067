//! Tree types produced by the assembler.
//!
//! The nesting rules are encoded in the types: a [`Person`] holds addresses,
//! phones and families, a [`Family`] holds only addresses and phones.

use serde::Serialize;

/// Root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct People {
    /// Persons in input order.
    pub persons: Vec<Person>,
}

impl People {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns `true` if the document holds no persons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

/// A person record and everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// First name, as written.
    pub firstname: String,
    /// Last name, as written.
    pub lastname: String,
    /// Addresses, phones and families in input order.
    pub children: Vec<PersonChild>,
}

impl Person {
    /// Creates a person with no children.
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            children: Vec::new(),
        }
    }

    /// Iterates over the families attached to this person.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.children.iter().filter_map(|child| match child {
            PersonChild::Family(family) => Some(family),
            _ => None,
        })
    }

    /// Iterates over the addresses attached directly to this person.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.children.iter().filter_map(|child| match child {
            PersonChild::Address(address) => Some(address),
            _ => None,
        })
    }

    /// Iterates over the phones attached directly to this person.
    pub fn phones(&self) -> impl Iterator<Item = &Phone> {
        self.children.iter().filter_map(|child| match child {
            PersonChild::Phone(phone) => Some(phone),
            _ => None,
        })
    }
}

/// A child node of a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonChild {
    /// An address of the person.
    Address(Address),
    /// A phone of the person.
    Phone(Phone),
    /// A family member of the person.
    Family(Family),
}

impl From<Contact> for PersonChild {
    fn from(contact: Contact) -> Self {
        match contact {
            Contact::Address(address) => Self::Address(address),
            Contact::Phone(phone) => Self::Phone(phone),
        }
    }
}

/// A family member attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    /// Name of the family member.
    pub name: String,
    /// Birth year, kept as text.
    pub born: String,
    /// Addresses and phones in input order.
    pub children: Vec<Contact>,
}

impl Family {
    /// Creates a family member with no children.
    pub fn new(name: impl Into<String>, born: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            born: born.into(),
            children: Vec::new(),
        }
    }

    /// Iterates over the addresses of this family member.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.children.iter().filter_map(|child| match child {
            Contact::Address(address) => Some(address),
            Contact::Phone(_) => None,
        })
    }

    /// Iterates over the phones of this family member.
    pub fn phones(&self) -> impl Iterator<Item = &Phone> {
        self.children.iter().filter_map(|child| match child {
            Contact::Phone(phone) => Some(phone),
            Contact::Address(_) => None,
        })
    }
}

/// A node that can attach to either a person or a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    /// A postal address.
    Address(Address),
    /// A pair of phone numbers.
    Phone(Phone),
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code, present only when the record had a third field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// A pair of phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phone {
    /// Mobile number.
    pub mobile: String,
    /// Home number.
    pub home: String,
}
