//! Text tree rendering for `--format tree` output.

use std::io::{self, Write};

use linexml_records::{Address, Contact, Family, People, Person, PersonChild, Phone};

use super::color::{bold, dimmed, root};
use crate::config::OutputConfig;

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode {
    kind: Option<&'static str>,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(kind: &'static str, label: String) -> Self {
        Self {
            kind: Some(kind),
            label,
            children: Vec::new(),
        }
    }
}

/// Render `people` as a connector tree:
///
/// ```text
/// people (2)
/// ├── Carl Gustaf Bernadotte
/// │   ├── phone: 0768-101801 / 08-101801
/// │   └── family: Victoria (1977)
/// │       └── address: Haga Slott, Stockholm
/// └── Barack Obama
///     └── address: 1600 Pennsylvania Avenue, Washington 20500
/// ```
pub fn write_tree<W: Write>(w: &mut W, people: &People, config: &OutputConfig) -> io::Result<()> {
    let header = format!("people ({})", people.len());
    writeln!(w, "{}", root(&header, config))?;

    let nodes: Vec<TreeNode> = people.persons.iter().map(person_node).collect();
    write_children(w, &nodes, &[], config)
}

fn person_node(person: &Person) -> TreeNode {
    TreeNode {
        kind: None,
        label: format!("{} {}", person.firstname, person.lastname),
        children: person
            .children
            .iter()
            .map(|child| match child {
                PersonChild::Address(address) => address_node(address),
                PersonChild::Phone(phone) => phone_node(phone),
                PersonChild::Family(family) => family_node(family),
            })
            .collect(),
    }
}

fn family_node(family: &Family) -> TreeNode {
    TreeNode {
        kind: Some("family"),
        label: format!("{} ({})", family.name, family.born),
        children: family
            .children
            .iter()
            .map(|child| match child {
                Contact::Address(address) => address_node(address),
                Contact::Phone(phone) => phone_node(phone),
            })
            .collect(),
    }
}

fn address_node(address: &Address) -> TreeNode {
    let label = match &address.zip {
        Some(zip) => format!("{}, {} {}", address.street, address.city, zip),
        None => format!("{}, {}", address.street, address.city),
    };
    TreeNode::leaf("address", label)
}

fn phone_node(phone: &Phone) -> TreeNode {
    TreeNode::leaf("phone", format!("{} / {}", phone.mobile, phone.home))
}

/// Recursively render tree children with proper connector lines.
///
/// `prefix_segments` tracks which ancestor levels still have siblings below,
/// used to draw the vertical continuation lines (`│`).
fn write_children<W: Write>(
    w: &mut W,
    children: &[TreeNode],
    prefix_segments: &[bool],
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };

    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;

        let mut prefix = String::new();
        for &has_more in prefix_segments {
            prefix.push_str(&dimmed(if has_more { pipe } else { space }, config));
        }
        let connector = dimmed(if is_last { corner } else { branch }, config);

        let label = match child.kind {
            Some(kind) => format!("{} {}", dimmed(&format!("{kind}:"), config), child.label),
            None => bold(&child.label, config),
        };
        writeln!(w, "{prefix}{connector}{label}")?;

        if !child.children.is_empty() {
            let mut next_segments = prefix_segments.to_vec();
            next_segments.push(!is_last);
            write_children(w, &child.children, &next_segments, config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linexml_records::parse;

    fn render(lines: &[&str], use_ascii: bool) -> String {
        let people = parse(lines).unwrap();
        let config = OutputConfig::new(2, use_ascii, false);
        let mut out = Vec::new();
        write_tree(&mut out, &people, &config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_tree_prints_header_only() {
        assert_eq!(render(&[], false), "people (0)\n");
    }

    #[test]
    fn unicode_connectors() {
        let out = render(
            &[
                "P|Carl Gustaf|Bernadotte",
                "T|0768-101801|08-101801",
                "F|Victoria|1977",
                "A|Haga Slott|Stockholm",
                "P|Barack|Obama",
                "A|1600 Pennsylvania Avenue|Washington|20500",
            ],
            false,
        );

        let expected = "\
people (2)
├── Carl Gustaf Bernadotte
│   ├── phone: 0768-101801 / 08-101801
│   └── family: Victoria (1977)
│       └── address: Haga Slott, Stockholm
└── Barack Obama
    └── address: 1600 Pennsylvania Avenue, Washington 20500
";
        assert_eq!(out, expected);
    }

    #[test]
    fn ascii_connectors() {
        let out = render(&["P|A|B", "T|1|2", "T|3|4"], true);
        let expected = "\
people (1)
`-- A B
    |-- phone: 1 / 2
    `-- phone: 3 / 4
";
        assert_eq!(out, expected);
    }
}
