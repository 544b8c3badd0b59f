use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

use crate::era::{version_group_rank, EraScope};
use crate::error::DomainError;

/// A move's reference to the machine that teaches it in one version group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRef {
    pub version_group: String,
    pub machine_url: String,
}

/// Pick the machine entry for the selection: the exact version group, else any
/// group of the same generation. Without a selection the most recent entry is used.
pub fn select_machine<'a>(
    refs: &'a [MachineRef],
    scope: Option<&EraScope>,
) -> Option<&'a MachineRef> {
    match scope {
        Some(scope) => refs
            .iter()
            .find(|r| r.version_group == scope.version_group())
            .or_else(|| refs.iter().find(|r| scope.includes_group(&r.version_group))),
        None => refs
            .iter()
            .max_by_key(|r| version_group_rank(&r.version_group)),
    }
}

/// TM/HM/TR number parsed from a machine's item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineLabel {
    pub number: u32,
    pub label: String,
}

static MACHINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tm|hm|tr)(\d+)$").expect("valid regex"));

impl FromStr for MachineLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let item = s.trim().to_ascii_lowercase();
        let caps = MACHINE_RE
            .captures(&item)
            .ok_or_else(|| DomainError::parse(format!("Not a machine item: {s}")))?;
        let prefix = caps.get(1).map_or("", |m| m.as_str()).to_ascii_uppercase();
        let digits = caps.get(2).map_or("", |m| m.as_str());
        let number: u32 = digits
            .parse()
            .map_err(|_| DomainError::parse(format!("Machine number out of range: {s}")))?;
        Ok(Self {
            number,
            label: format!("{prefix}{number:02}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::GenerationRank;

    #[test]
    fn tm08_parses_to_label_and_number() {
        let label: MachineLabel = "tm08".parse().unwrap();
        assert_eq!(label.label, "TM08");
        assert_eq!(label.number, 8);
    }

    #[test]
    fn other_machine_kinds_and_widths() {
        assert_eq!("hm3".parse::<MachineLabel>().unwrap().label, "HM03");
        assert_eq!("tr100".parse::<MachineLabel>().unwrap().label, "TR100");
        assert!("master-ball".parse::<MachineLabel>().is_err());
        assert!("tm".parse::<MachineLabel>().is_err());
    }

    fn mref(group: &str, id: u32) -> MachineRef {
        MachineRef {
            version_group: group.into(),
            machine_url: format!("https://pokeapi.co/api/v2/machine/{id}/"),
        }
    }

    #[test]
    fn exact_group_then_generation_then_latest() {
        let refs = vec![mref("red-blue", 1), mref("yellow", 2), mref("sword-shield", 3)];
        let yellow = EraScope::new("yellow", "yellow", GenerationRank::FIRST);
        assert_eq!(select_machine(&refs, Some(&yellow)).unwrap().version_group, "yellow");

        let only_rb = vec![mref("red-blue", 1)];
        assert_eq!(select_machine(&only_rb, Some(&yellow)).unwrap().version_group, "red-blue");

        let gold = EraScope::new("gold", "gold-silver", GenerationRank::new(2).unwrap());
        assert!(select_machine(&refs, Some(&gold)).is_none());

        assert_eq!(select_machine(&refs, None).unwrap().version_group, "sword-shield");
    }
}
