//! Named-slot class templates.
//!
//! A template is parsed once into literal pieces and slots. Rendering walks
//! the pieces and writes slot values in a single pass, so a value that
//! happens to contain a placeholder token (say, an enum called
//! `DummyClass`) is written through untouched.

use crate::error::{Error, Result};

/// Placeholder replaced by the class namespace.
pub const NAMESPACE_TOKEN: &str = "DummyNamespace";

/// Placeholder replaced by the short class name.
pub const CLASS_TOKEN: &str = "DummyClass";

/// Placeholder replaced by the rendered constant block.
pub const CONSTANTS_TOKEN: &str = "DummyConstants";

/// Placeholder replaced by the enum trait path. Optional.
pub const TRAIT_TOKEN: &str = "DummyTrait";

const DEFAULT_TEMPLATE: &str = "<?php
namespace DummyNamespace;

class DummyClass
{
    use DummyTrait;
DummyConstants
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Namespace,
    Class,
    Constants,
    Trait,
}

impl Slot {
    const ALL: [Slot; 4] = [Slot::Namespace, Slot::Class, Slot::Constants, Slot::Trait];

    fn token(self) -> &'static str {
        match self {
            Slot::Namespace => NAMESPACE_TOKEN,
            Slot::Class => CLASS_TOKEN,
            Slot::Constants => CONSTANTS_TOKEN,
            Slot::Trait => TRAIT_TOKEN,
        }
    }

    fn required(self) -> bool {
        !matches!(self, Slot::Trait)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Slot(Slot),
}

/// Values written into a template's slots.
#[derive(Debug, Clone, Copy)]
pub struct SlotValues<'a> {
    pub namespace: &'a str,
    pub class_name: &'a str,
    pub constants: &'a str,
    pub enum_trait: &'a str,
}

impl SlotValues<'_> {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Namespace => self.namespace,
            Slot::Class => self.class_name,
            Slot::Constants => self.constants,
            Slot::Trait => self.enum_trait,
        }
    }
}

/// A parsed class template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTemplate {
    pieces: Vec<Piece>,
}

impl Default for ClassTemplate {
    fn default() -> Self {
        // The built-in text has every slot exactly once.
        Self {
            pieces: split_pieces(DEFAULT_TEMPLATE),
        }
    }
}

impl ClassTemplate {
    /// Parse template text.
    ///
    /// The namespace, class and constants placeholders must each appear
    /// exactly once; the trait placeholder at most once.
    pub fn parse(text: &str) -> Result<Self> {
        let pieces = split_pieces(text);
        for slot in Slot::ALL {
            let count = pieces.iter().filter(|p| **p == Piece::Slot(slot)).count();
            match count {
                0 if slot.required() => {
                    return Err(Error::Template(format!(
                        "missing placeholder {}",
                        slot.token()
                    )));
                }
                0 | 1 => {}
                n => {
                    return Err(Error::Template(format!(
                        "placeholder {} appears {n} times",
                        slot.token()
                    )));
                }
            }
        }
        Ok(Self { pieces })
    }

    /// Fill every slot with its value.
    pub fn render(&self, values: &SlotValues<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Slot(slot) => out.push_str(values.get(*slot)),
            }
        }
        out
    }
}

/// Split `text` at every placeholder token, leftmost first.
fn split_pieces(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut rest = text;
    loop {
        let next = Slot::ALL
            .iter()
            .filter_map(|slot| rest.find(slot.token()).map(|at| (at, *slot)))
            .min_by_key(|(at, _)| *at);
        let Some((at, slot)) = next else {
            break;
        };
        if at > 0 {
            pieces.push(Piece::Literal(rest[..at].to_string()));
        }
        pieces.push(Piece::Slot(slot));
        rest = &rest[at + slot.token().len()..];
    }
    if !rest.is_empty() {
        pieces.push(Piece::Literal(rest.to_string()));
    }
    pieces
}
