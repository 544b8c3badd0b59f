//! Form and variety candidates for a base creature.

use std::collections::BTreeSet;

/// The shared name prefix of a creature's forms (`"raichu-alola"` → `"raichu"`).
pub fn base_prefix(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

/// Union of species varieties and native form names that share the subject's
/// prefix, deduplicated and sorted.
pub fn candidate_forms<'a, V, F>(subject: &str, varieties: V, native_forms: F) -> Vec<String>
where
    V: IntoIterator<Item = &'a str>,
    F: IntoIterator<Item = &'a str>,
{
    let prefix = base_prefix(subject);
    varieties
        .into_iter()
        .chain(native_forms)
        .filter(|name| name.starts_with(prefix))
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Preferred form when available, else the hyphen-free base form, else the first.
pub fn select_form(available: &[String], preferred: Option<&str>) -> Option<String> {
    if let Some(preferred) = preferred {
        if let Some(found) = available.iter().find(|f| *f == preferred) {
            return Some(found.clone());
        }
    }
    available
        .iter()
        .find(|f| !f.contains('-'))
        .or_else(|| available.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_share_prefix_and_are_deduplicated() {
        let forms = candidate_forms(
            "raichu",
            ["raichu", "raichu-alola", "pikachu"],
            ["raichu-alola", "raichu"],
        );
        assert_eq!(forms, vec!["raichu", "raichu-alola"]);
    }

    #[test]
    fn selection_prefers_requested_then_base() {
        let forms = vec!["raichu".to_string(), "raichu-alola".to_string()];
        assert_eq!(select_form(&forms, Some("raichu-alola")).as_deref(), Some("raichu-alola"));
        assert_eq!(select_form(&forms, Some("raichu-galar")).as_deref(), Some("raichu"));
        assert_eq!(select_form(&forms, None).as_deref(), Some("raichu"));

        let no_base = vec!["deoxys-attack".to_string(), "deoxys-normal".to_string()];
        assert_eq!(select_form(&no_base, None).as_deref(), Some("deoxys-attack"));
        assert_eq!(select_form(&[], None), None);
    }

    #[test]
    fn hyphenated_subject_uses_its_first_segment() {
        assert_eq!(base_prefix("mr-mime"), "mr");
        let forms = candidate_forms("mr-mime", ["mr-mime", "mr-mime-galar"], []);
        assert_eq!(forms, vec!["mr-mime", "mr-mime-galar"]);
    }
}
