//! Bitmask decomposition into ordered value/name pairs.

use super::output::Details;

/// A named bit of a flag domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedFlag {
    pub value: i32,
    pub name: &'static str,
}

pub const AUTH_REQUIRED: NamedFlag = NamedFlag {
    value: 1,
    name: "auth_required",
};
pub const AUTH_REVOCABLE: NamedFlag = NamedFlag {
    value: 2,
    name: "auth_revocable",
};
pub const AUTH_IMMUTABLE: NamedFlag = NamedFlag {
    value: 4,
    name: "auth_immutable",
};

pub const AUTHORIZED: NamedFlag = NamedFlag {
    value: 1,
    name: "authorized",
};
pub const AUTHORIZED_TO_MAINTAIN_LIABILITIES: NamedFlag = NamedFlag {
    value: 2,
    name: "authorized_to_maintain_liabilities",
};
pub const CLAWBACK_ENABLED: NamedFlag = NamedFlag {
    value: 4,
    name: "clawback_enabled",
};

/// Account flags in output order
pub const ACCOUNT_FLAGS: [NamedFlag; 3] = [AUTH_REQUIRED, AUTH_REVOCABLE, AUTH_IMMUTABLE];

/// Trustline flags in output order
pub const TRUST_LINE_FLAGS: [NamedFlag; 3] = [
    AUTHORIZED,
    AUTHORIZED_TO_MAINTAIN_LIABILITIES,
    CLAWBACK_ENABLED,
];

impl NamedFlag {
    pub fn is_set(self, mask: u32) -> bool {
        mask & (self.value as u32) != 0
    }
}

/// Parallel value and name sequences of the set bits of a mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub values: Vec<i32>,
    pub names: Vec<String>,
}

/// Emits the bits of `mask` that appear in `domain`, in domain order.
///
/// Bits outside the domain are dropped.
pub fn decompose_flags(mask: u32, domain: &[NamedFlag]) -> FlagSet {
    domain
        .iter()
        .filter(|flag| flag.is_set(mask))
        .fold(FlagSet::default(), |mut set, flag| {
            set.values.push(flag.value);
            set.names.push(flag.name.to_string());
            set
        })
}

impl Details {
    pub fn with_set_flags(mut self, flags: FlagSet) -> Self {
        self.set_flags = flags.values;
        self.set_flags_string = flags.names;
        self
    }

    pub fn with_clear_flags(mut self, flags: FlagSet) -> Self {
        self.clear_flags = flags.values;
        self.clear_flags_string = flags.names;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_flags_in_fixed_order() {
        let set = decompose_flags(4 | 2, &ACCOUNT_FLAGS);
        assert_eq!(set.values, vec![2, 4]);
        assert_eq!(set.names, vec!["auth_revocable", "auth_immutable"]);
    }

    #[test]
    fn test_trust_line_flags_all_bits() {
        let set = decompose_flags(7, &TRUST_LINE_FLAGS);
        assert_eq!(set.values, vec![1, 2, 4]);
        assert_eq!(
            set.names,
            vec![
                "authorized",
                "authorized_to_maintain_liabilities",
                "clawback_enabled"
            ]
        );
    }

    #[test]
    fn test_unknown_bits_dropped() {
        let set = decompose_flags(8 | 16, &ACCOUNT_FLAGS);
        assert!(set.values.is_empty());
        assert!(set.names.is_empty());
    }

    #[test]
    fn test_with_flags_fills_both_sequences() {
        let details = Details::default()
            .with_set_flags(decompose_flags(1, &ACCOUNT_FLAGS))
            .with_clear_flags(decompose_flags(2, &ACCOUNT_FLAGS));
        assert_eq!(details.set_flags, vec![1]);
        assert_eq!(details.set_flags_string, vec!["auth_required"]);
        assert_eq!(details.clear_flags, vec![2]);
        assert_eq!(details.clear_flags_string, vec!["auth_revocable"]);
    }
}
