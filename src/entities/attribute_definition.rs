//! Attribute definition entity (ATTDEF)

use super::text::Text;
use bitflags::bitflags;

bitflags! {
    /// Attribute flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttributeFlags: i16 {
        const INVISIBLE = 1;
        const CONSTANT = 2;
        const VERIFY = 4;
        const PRESET = 8;
    }
}

/// A block attribute template: text geometry plus tag and prompt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeDefinition {
    /// Default value and text geometry
    pub text: Text,
    /// Tag (group 2)
    pub tag: String,
    /// Prompt (group 3)
    pub prompt: String,
    pub flags: AttributeFlags,
}

impl AttributeDefinition {
    pub fn new(tag: impl Into<String>) -> Self {
        AttributeDefinition {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn is_invisible(&self) -> bool {
        self.flags.contains(AttributeFlags::INVISIBLE)
    }
}
