//! Optional token features that carry a deployment surcharge

/// A single optional token feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feature {
    /// Supply can be minted after deployment
    Mintable = 0b001,
    /// Transfers can be paused by the owner
    Pausable = 0b010,
    /// Wallet balance and transaction size caps are enforced
    LimitsEnabled = 0b100,
}

impl Feature {
    /// Every feature, in encoding order
    pub const ALL: [Feature; 3] = [Feature::Mintable, Feature::Pausable, Feature::LimitsEnabled];

    /// Name as used in token configurations
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Mintable => "mintable",
            Feature::Pausable => "pausable",
            Feature::LimitsEnabled => "limits_enabled",
        }
    }

    const fn bit(self) -> u8 {
        self as u8
    }
}

/// Fixed-size set of enabled features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureSet(u8);

impl FeatureSet {
    const MASK: u8 = 0b111;

    /// No features enabled
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All features enabled
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Builds a set from the three toggles of a token configuration
    pub fn from_flags(mintable: bool, pausable: bool, limits_enabled: bool) -> Self {
        Self::empty()
            .with_if(Feature::Mintable, mintable)
            .with_if(Feature::Pausable, pausable)
            .with_if(Feature::LimitsEnabled, limits_enabled)
    }

    /// Decodes a stored set. Unknown bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.bit())
    }

    #[must_use]
    pub const fn with_if(self, feature: Feature, enabled: bool) -> Self {
        if enabled {
            self.with(feature)
        } else {
            self
        }
    }

    pub const fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Number of enabled features (0..=3)
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the enabled features in encoding order
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl From<Feature> for FeatureSet {
    fn from(feature: Feature) -> Self {
        Self::empty().with(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_names_each_toggle() {
        let set = FeatureSet::from_flags(true, false, true);
        assert!(set.contains(Feature::Mintable));
        assert!(!set.contains(Feature::Pausable));
        assert!(set.contains(Feature::LimitsEnabled));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_with_is_idempotent() {
        let set = FeatureSet::empty()
            .with(Feature::Pausable)
            .with(Feature::Pausable);
        assert_eq!(set.count(), 1);
        assert_eq!(set, FeatureSet::from(Feature::Pausable));
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = FeatureSet::all().iter().map(Feature::name).collect();
        assert_eq!(names, vec!["mintable", "pausable", "limits_enabled"]);
    }

    #[test]
    fn test_bits_encoding() {
        assert_eq!(FeatureSet::empty().bits(), 0);
        assert_eq!(FeatureSet::all().bits(), 0b111);
        assert_eq!(FeatureSet::from_bits(0b1111_1010), FeatureSet::from_flags(false, true, false));
        for bits in 0..=0b111u8 {
            assert_eq!(FeatureSet::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_iter_in_encoding_order() {
        let set = FeatureSet::from(Feature::LimitsEnabled).with(Feature::Mintable);
        let features: Vec<Feature> = set.iter().collect();
        assert_eq!(features, vec![Feature::Mintable, Feature::LimitsEnabled]);
        assert!(FeatureSet::empty().is_empty());
        assert_eq!(FeatureSet::empty().iter().count(), 0);
    }
}
