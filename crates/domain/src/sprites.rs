//! Version-appropriate sprite lookup.

use std::collections::BTreeMap;

use crate::era::GenerationRank;

/// Version → (generation key, sprite-group key). A `None` group means the
/// generation has no dedicated sprites for that version.
const VERSION_SPRITES: &[(&str, &str, Option<&str>)] = &[
    ("red", "generation-i", Some("red-blue")),
    ("blue", "generation-i", Some("red-blue")),
    ("yellow", "generation-i", Some("yellow")),
    ("gold", "generation-ii", Some("gold")),
    ("silver", "generation-ii", Some("silver")),
    ("crystal", "generation-ii", Some("crystal")),
    ("ruby", "generation-iii", Some("ruby-sapphire")),
    ("sapphire", "generation-iii", Some("ruby-sapphire")),
    ("emerald", "generation-iii", Some("emerald")),
    ("firered", "generation-iii", Some("firered-leafgreen")),
    ("leafgreen", "generation-iii", Some("firered-leafgreen")),
    ("colosseum", "generation-iii", Some("ruby-sapphire")),
    ("xd", "generation-iii", Some("ruby-sapphire")),
    ("diamond", "generation-iv", Some("diamond-pearl")),
    ("pearl", "generation-iv", Some("diamond-pearl")),
    ("platinum", "generation-iv", Some("platinum")),
    ("heartgold", "generation-iv", Some("heartgold-soulsilver")),
    ("soulsilver", "generation-iv", Some("heartgold-soulsilver")),
    ("black", "generation-v", Some("black-white")),
    ("white", "generation-v", Some("black-white")),
    ("black-2", "generation-v", Some("black-white")),
    ("white-2", "generation-v", Some("black-white")),
    ("x", "generation-vi", Some("x-y")),
    ("y", "generation-vi", Some("x-y")),
    ("omega-ruby", "generation-vi", Some("omegaruby-alphasapphire")),
    ("alpha-sapphire", "generation-vi", Some("omegaruby-alphasapphire")),
    ("sun", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("moon", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("ultra-sun", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("ultra-moon", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("lets-go-pikachu", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("lets-go-eevee", "generation-vii", Some("ultra-sun-ultra-moon")),
    ("sword", "generation-viii", None),
    ("shield", "generation-viii", None),
    ("brilliant-diamond", "generation-viii", Some("brilliant-diamond-shining-pearl")),
    ("shining-pearl", "generation-viii", Some("brilliant-diamond-shining-pearl")),
    ("legends-arceus", "generation-viii", None),
    ("scarlet", "generation-ix", Some("scarlet-violet")),
    ("violet", "generation-ix", Some("scarlet-violet")),
];

const ICONS_KEY: &str = "icons";

/// The sprite URLs of a creature record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    /// generation key → sprite-group key → front sprite URL.
    pub versions: BTreeMap<String, BTreeMap<String, Option<String>>>,
    pub official_artwork: Option<String>,
    pub front_default: Option<String>,
}

impl SpriteSheet {
    /// Exact group for the version, then any group of its generation, then
    /// any group of each older generation, newest first.
    pub fn version_sprite(&self, version: &str) -> Option<String> {
        let (_, generation_key, group_key) =
            VERSION_SPRITES.iter().find(|(v, _, _)| *v == version)?;

        if let Some(group_key) = group_key {
            let exact = self
                .versions
                .get(*generation_key)
                .and_then(|groups| groups.get(*group_key))
                .and_then(|url| url.clone());
            if exact.is_some() {
                return exact;
            }
        }

        let mut generation = GenerationRank::from_name(generation_key);
        while let Some(rank) = generation {
            if let Some(url) = self.any_sprite(rank.name()) {
                return Some(url);
            }
            generation = rank.previous();
        }
        None
    }

    /// Version sprite when a version is selected, else official artwork, else the default sprite.
    pub fn display_sprite(&self, version: Option<&str>) -> Option<String> {
        version
            .and_then(|v| self.version_sprite(v))
            .or_else(|| self.official_artwork.clone())
            .or_else(|| self.front_default.clone())
    }

    fn any_sprite(&self, generation_key: &str) -> Option<String> {
        self.versions
            .get(generation_key)?
            .iter()
            .filter(|(key, _)| key.as_str() != ICONS_KEY)
            .find_map(|(_, url)| url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(entries: &[(&str, &str, Option<&str>)]) -> SpriteSheet {
        let mut versions: BTreeMap<String, BTreeMap<String, Option<String>>> = BTreeMap::new();
        for (generation, group, url) in entries {
            versions
                .entry(generation.to_string())
                .or_default()
                .insert(group.to_string(), url.map(String::from));
        }
        SpriteSheet {
            versions,
            official_artwork: Some("artwork.png".into()),
            front_default: Some("default.png".into()),
        }
    }

    #[test]
    fn exact_group_wins() {
        let sprites = sheet(&[
            ("generation-i", "red-blue", Some("rb.png")),
            ("generation-i", "yellow", Some("y.png")),
        ]);
        assert_eq!(sprites.version_sprite("yellow").as_deref(), Some("y.png"));
        assert_eq!(sprites.version_sprite("blue").as_deref(), Some("rb.png"));
    }

    #[test]
    fn falls_back_within_generation_skipping_icons() {
        let sprites = sheet(&[
            ("generation-viii", "icons", Some("icon.png")),
            ("generation-viii", "brilliant-diamond-shining-pearl", Some("bdsp.png")),
        ]);
        assert_eq!(sprites.version_sprite("sword").as_deref(), Some("bdsp.png"));
    }

    #[test]
    fn walks_older_generations() {
        let sprites = sheet(&[
            ("generation-vii", "icons", Some("icon.png")),
            ("generation-vi", "x-y", None),
            ("generation-v", "black-white", Some("bw.png")),
        ]);
        assert_eq!(sprites.version_sprite("ultra-moon").as_deref(), Some("bw.png"));
        assert_eq!(sprites.version_sprite("red"), None);
        assert_eq!(sprites.version_sprite("unknown-version"), None);
    }

    #[test]
    fn display_sprite_falls_back_to_artwork() {
        let sprites = sheet(&[]);
        assert_eq!(sprites.display_sprite(Some("red")).as_deref(), Some("artwork.png"));
        assert_eq!(sprites.display_sprite(None).as_deref(), Some("artwork.png"));

        let bare = SpriteSheet {
            front_default: Some("default.png".into()),
            ..Default::default()
        };
        assert_eq!(bare.display_sprite(None).as_deref(), Some("default.png"));
    }
}
