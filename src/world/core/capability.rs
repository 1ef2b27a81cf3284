//! Aura capability tags
//!
//! A cell may expose any combination of these. They are plain data looked up
//! by block id or carried by an extended object, never inferred from types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single aura capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityTag {
    /// Consumes aura from a controller
    Absorber,
    /// Actively produces aura
    Emitter,
    /// Produces aura without being driven
    PassiveEmitter,
    /// Owns an aura pool and services nearby requests
    Controller,
}

impl CapabilityTag {
    pub const ALL: [CapabilityTag; 4] = [
        CapabilityTag::Absorber,
        CapabilityTag::Emitter,
        CapabilityTag::PassiveEmitter,
        CapabilityTag::Controller,
    ];
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityTag::Absorber => write!(f, "AuraAbsorber"),
            CapabilityTag::Emitter => write!(f, "AuraEmitter"),
            CapabilityTag::PassiveEmitter => write!(f, "PassiveAuraEmitter"),
            CapabilityTag::Controller => write!(f, "AuraController"),
        }
    }
}

/// Set of capability tags exposed by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub absorber: bool,
    pub emitter: bool,
    pub passive_emitter: bool,
    pub controller: bool,
}

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet {
        absorber: false,
        emitter: false,
        passive_emitter: false,
        controller: false,
    };

    pub fn of(tags: &[CapabilityTag]) -> Self {
        tags.iter().fold(Self::EMPTY, |set, tag| set.with(*tag))
    }

    pub fn with(mut self, tag: CapabilityTag) -> Self {
        *self.flag_mut(tag) = true;
        self
    }

    pub fn without(mut self, tag: CapabilityTag) -> Self {
        *self.flag_mut(tag) = false;
        self
    }

    pub fn contains(&self, tag: CapabilityTag) -> bool {
        match tag {
            CapabilityTag::Absorber => self.absorber,
            CapabilityTag::Emitter => self.emitter,
            CapabilityTag::PassiveEmitter => self.passive_emitter,
            CapabilityTag::Controller => self.controller,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Tags in declaration order
    pub fn iter(&self) -> impl Iterator<Item = CapabilityTag> + '_ {
        CapabilityTag::ALL
            .into_iter()
            .filter(move |tag| self.contains(*tag))
    }

    fn flag_mut(&mut self, tag: CapabilityTag) -> &mut bool {
        match tag {
            CapabilityTag::Absorber => &mut self.absorber,
            CapabilityTag::Emitter => &mut self.emitter,
            CapabilityTag::PassiveEmitter => &mut self.passive_emitter,
            CapabilityTag::Controller => &mut self.controller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_tags_coexist() {
        let set = CapabilitySet::of(&[CapabilityTag::Absorber, CapabilityTag::Controller]);
        assert!(set.contains(CapabilityTag::Absorber));
        assert!(set.contains(CapabilityTag::Controller));
        assert!(!set.contains(CapabilityTag::Emitter));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CapabilityTag::Absorber, CapabilityTag::Controller]
        );
    }

    #[test]
    fn test_without_clears_flag() {
        let set = CapabilitySet::of(&[CapabilityTag::Emitter]).without(CapabilityTag::Emitter);
        assert!(set.is_empty());
    }
}
