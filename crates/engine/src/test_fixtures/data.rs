//! The standard fixture data set, keyed by resource path.
//!
//! Covers the charmander and pichu families, Alolan Raichu, a form-only
//! Pikachu variant, the moves and machines they reference, abilities,
//! encounters, three versions and a two-page creature listing.

use serde_json::{json, Value};

const API: &str = "https://pokeapi.co/api/v2";

fn named(name: &str) -> Value {
    json!({ "name": name, "url": "" })
}

fn types(names: &[&str]) -> Value {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({ "slot": i + 1, "type": named(name) }))
        .collect()
}

fn game_indices(versions: &[&str]) -> Value {
    versions
        .iter()
        .map(|v| json!({ "game_index": 1, "version": named(v) }))
        .collect()
}

fn ability(name: &str, slot: u8, is_hidden: bool) -> Value {
    json!({ "ability": named(name), "is_hidden": is_hidden, "slot": slot })
}

fn stats(values: &[(&str, u32, u32)]) -> Value {
    values
        .iter()
        .map(|(name, base, effort)| {
            json!({ "base_stat": base, "effort": effort, "stat": named(name) })
        })
        .collect()
}

/// A learnset entry: (version group, method, level).
fn learned(name: &str, details: &[(&str, &str, u32)]) -> Value {
    json!({
        "move": named(name),
        "version_group_details": details
            .iter()
            .map(|(group, method, level)| json!({
                "level_learned_at": level,
                "move_learn_method": named(method),
                "version_group": named(group),
            }))
            .collect::<Vec<_>>(),
    })
}

fn variety(name: &str, is_default: bool) -> Value {
    json!({ "is_default": is_default, "pokemon": named(name) })
}

fn flavor(text: &str, language: &str, version: &str) -> Value {
    json!({ "flavor_text": text, "language": named(language), "version": named(version) })
}

fn english_effect(text: &str) -> Value {
    json!([{ "effect": text, "short_effect": text, "language": named("en") }])
}

fn link(path: &str) -> Value {
    json!({ "url": format!("{API}/{path}/") })
}

fn chain_node(species: &str, details: Value, evolves_to: Vec<Value>) -> Value {
    json!({ "species": named(species), "evolution_details": details, "evolves_to": evolves_to })
}

fn species(
    id: u32,
    name: &str,
    chain: u32,
    evolves_from: Option<&str>,
    varieties: &[&str],
    generation: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "evolution_chain": link(&format!("evolution-chain/{chain}")),
        "evolves_from_species": evolves_from.map(named),
        "varieties": varieties
            .iter()
            .enumerate()
            .map(|(i, v)| variety(v, i == 0))
            .collect::<Vec<_>>(),
        "generation": named(generation),
        "pokedex_numbers": [{ "entry_number": id, "pokedex": named("national") }],
    })
}

fn versions() -> Vec<(String, Value)> {
    let version = |id: u32, name: &str, group: &str| {
        (
            format!("version/{name}"),
            json!({ "id": id, "name": name, "version_group": named(group) }),
        )
    };
    let group = |id: u32, name: &str, generation: &str, versions: &[&str]| {
        (
            format!("version-group/{name}"),
            json!({
                "id": id,
                "name": name,
                "generation": named(generation),
                "versions": versions.iter().map(|v| named(v)).collect::<Vec<_>>(),
            }),
        )
    };
    vec![
        version(1, "red", "red-blue"),
        version(17, "sun", "sun-moon"),
        version(29, "ultra-sun", "ultra-sun-ultra-moon"),
        group(1, "red-blue", "generation-i", &["red", "blue"]),
        group(17, "sun-moon", "generation-vii", &["sun", "moon"]),
        group(18, "ultra-sun-ultra-moon", "generation-vii", &["ultra-sun", "ultra-moon"]),
    ]
}

fn charmander_family() -> Vec<(String, Value)> {
    let blaze = [ability("blaze", 1, false), ability("solar-power", 3, true)];
    vec![
        (
            "pokemon/charmander".into(),
            json!({
                "id": 4,
                "name": "charmander",
                "species": named("charmander"),
                "height": 6,
                "weight": 85,
                "types": types(&["fire"]),
                "abilities": blaze,
                "stats": stats(&[("hp", 39, 0), ("speed", 65, 1)]),
                "game_indices": game_indices(&["red", "blue", "yellow"]),
                "moves": [
                    learned("scratch", &[("red-blue", "level-up", 1), ("sun-moon", "level-up", 1)]),
                    learned("dragon-dance", &[("sun-moon", "egg", 0)]),
                ],
                "forms": [named("charmander")],
            }),
        ),
        (
            "pokemon/charmeleon".into(),
            json!({
                "id": 5,
                "name": "charmeleon",
                "species": named("charmeleon"),
                "types": types(&["fire"]),
                "abilities": blaze,
                "game_indices": game_indices(&["red", "blue", "yellow"]),
                "moves": [learned("scratch", &[("red-blue", "level-up", 1), ("sun-moon", "level-up", 1)])],
                "forms": [named("charmeleon")],
            }),
        ),
        (
            "pokemon/charizard".into(),
            json!({
                "id": 6,
                "name": "charizard",
                "species": named("charizard"),
                "height": 17,
                "weight": 905,
                "types": types(&["fire", "flying"]),
                "abilities": blaze,
                "stats": stats(&[
                    ("hp", 78, 0),
                    ("attack", 84, 0),
                    ("defense", 78, 0),
                    ("special-attack", 109, 3),
                    ("special-defense", 85, 0),
                    ("speed", 100, 0),
                ]),
                "past_stats": [{
                    "generation": named("generation-i"),
                    "stats": stats(&[("special", 85, 0)]),
                }],
                "game_indices": game_indices(&["red", "blue", "yellow"]),
                "held_items": [],
                "moves": [
                    learned("scratch", &[
                        ("red-blue", "level-up", 1),
                        ("yellow", "level-up", 1),
                        ("sun-moon", "level-up", 1),
                    ]),
                    learned("flamethrower", &[("red-blue", "level-up", 46), ("sun-moon", "machine", 0)]),
                    learned("mega-punch", &[("red-blue", "machine", 0), ("yellow", "machine", 0)]),
                ],
                "forms": [named("charizard")],
                "sprites": {
                    "front_default": "https://img.example/charizard.png",
                    "other": { "official-artwork": { "front_default": "https://img.example/charizard-art.png" } },
                    "versions": {
                        "generation-i": {
                            "red-blue": { "front_default": "https://img.example/charizard-rb.png" },
                            "yellow": { "front_default": "https://img.example/charizard-y.png" },
                        },
                    },
                },
            }),
        ),
        ("pokemon/charmander/encounters".into(), json!([])),
        ("pokemon/charmeleon/encounters".into(), json!([])),
        ("pokemon/charizard/encounters".into(), json!([])),
        (
            "pokemon-species/charmander".into(),
            species(4, "charmander", 2, None, &["charmander"], "generation-i"),
        ),
        (
            "pokemon-species/charmeleon".into(),
            species(5, "charmeleon", 2, Some("charmander"), &["charmeleon"], "generation-i"),
        ),
        ("pokemon-species/charizard".into(), {
            let mut record = species(
                6,
                "charizard",
                2,
                Some("charmeleon"),
                &["charizard"],
                "generation-i",
            );
            record["capture_rate"] = json!(45);
            record["hatch_counter"] = json!(20);
            record["gender_rate"] = json!(1);
            record["egg_groups"] = json!([named("monster"), named("dragon")]);
            record["flavor_text_entries"] = json!([
                flavor("Spits fire that\nis hot enough to\nmelt boulders.", "en", "red"),
                flavor("Crache du feu.", "fr", "red"),
                flavor("It flies around the sky\nin search of powerful opponents.", "en", "sun"),
            ]);
            record
        }),
        (
            "evolution-chain/2".into(),
            json!({
                "id": 2,
                "chain": chain_node("charmander", json!([]), vec![chain_node(
                    "charmeleon",
                    json!([{ "trigger": named("level-up"), "min_level": 16, "time_of_day": "" }]),
                    vec![chain_node(
                        "charizard",
                        json!([{ "trigger": named("level-up"), "min_level": 36, "time_of_day": "" }]),
                        vec![],
                    )],
                )]),
            }),
        ),
    ]
}

fn pichu_family() -> Vec<(String, Value)> {
    let electric = [ability("static", 1, false), ability("lightning-rod", 3, true)];
    vec![
        (
            "pokemon/pichu".into(),
            json!({
                "id": 172,
                "name": "pichu",
                "species": named("pichu"),
                "types": types(&["electric"]),
                "abilities": electric,
                "game_indices": game_indices(&["gold", "silver"]),
                "moves": [learned("thunder-shock", &[("gold-silver", "level-up", 1), ("sun-moon", "level-up", 1)])],
                "forms": [named("pichu")],
            }),
        ),
        (
            "pokemon/pikachu".into(),
            json!({
                "id": 25,
                "name": "pikachu",
                "species": named("pikachu"),
                "types": types(&["electric"]),
                "abilities": electric,
                "stats": stats(&[("hp", 35, 0), ("speed", 90, 2)]),
                "game_indices": game_indices(&["red", "blue", "yellow"]),
                "moves": [learned("thunder-shock", &[("red-blue", "level-up", 1), ("sun-moon", "level-up", 1)])],
                "forms": [named("pikachu"), named("pikachu-cap")],
                "sprites": { "front_default": "https://img.example/pikachu.png" },
            }),
        ),
        (
            "pokemon/raichu".into(),
            json!({
                "id": 26,
                "name": "raichu",
                "species": named("raichu"),
                "types": types(&["electric"]),
                "abilities": electric,
                "game_indices": game_indices(&["red", "blue"]),
                "moves": [learned("thunder-shock", &[("red-blue", "level-up", 1)])],
                "forms": [named("raichu")],
            }),
        ),
        (
            "pokemon/raichu-alola".into(),
            json!({
                "id": 10100,
                "name": "raichu-alola",
                "species": named("raichu"),
                "types": types(&["electric", "psychic"]),
                "abilities": [ability("surge-surfer", 1, false)],
                "game_indices": [],
                "moves": [learned("thunder-shock", &[("sun-moon", "level-up", 1)])],
                "forms": [named("raichu-alola")],
            }),
        ),
        (
            "pokemon-form/pikachu-cap".into(),
            json!({
                "id": 10094,
                "name": "pikachu-cap",
                "form_name": "cap",
                "pokemon": named("pikachu"),
                "version_group": named("sun-moon"),
                "types": [],
                "sprites": { "front_default": "https://img.example/pikachu-cap.png" },
            }),
        ),
        (
            "pokemon/pikachu/encounters".into(),
            json!([{
                "location_area": named("viridian-forest-area"),
                "version_details": [
                    {
                        "version": named("red"),
                        "max_chance": 5,
                        "encounter_details": [{ "chance": 5, "min_level": 3, "max_level": 5, "method": named("walk") }],
                    },
                    {
                        "version": named("yellow"),
                        "max_chance": 10,
                        "encounter_details": [{ "chance": 10, "min_level": 3, "max_level": 5, "method": named("walk") }],
                    },
                ],
            }]),
        ),
        ("pokemon/pichu/encounters".into(), json!([])),
        ("pokemon/raichu/encounters".into(), json!([])),
        (
            "pokemon-species/pichu".into(),
            species(172, "pichu", 10, None, &["pichu"], "generation-ii"),
        ),
        (
            "pokemon-species/pikachu".into(),
            species(25, "pikachu", 10, Some("pichu"), &["pikachu"], "generation-i"),
        ),
        (
            "pokemon-species/raichu".into(),
            species(26, "raichu", 10, Some("pikachu"), &["raichu", "raichu-alola"], "generation-i"),
        ),
        (
            "evolution-chain/10".into(),
            json!({
                "id": 10,
                "chain": chain_node("pichu", json!([]), vec![chain_node(
                    "pikachu",
                    json!([{ "trigger": named("level-up"), "min_happiness": 220 }]),
                    vec![chain_node(
                        "raichu",
                        json!([{ "trigger": named("use-item"), "item": named("thunder-stone") }]),
                        vec![],
                    )],
                )]),
            }),
        ),
    ]
}

fn moves() -> Vec<(String, Value)> {
    let record = |id: u32, name: &str, type_name: &str, power: u32, extra: Value| {
        let mut record = json!({
            "id": id,
            "name": name,
            "accuracy": 100,
            "power": power,
            "pp": 15,
            "priority": 0,
            "damage_class": named("special"),
            "type": named(type_name),
            "effect_entries": english_effect("Inflicts regular damage."),
        });
        if let (Some(target), Some(extra)) = (record.as_object_mut(), extra.as_object()) {
            target.extend(extra.clone());
        }
        (format!("move/{name}"), record)
    };
    vec![
        record(10, "scratch", "normal", 40, json!({ "damage_class": named("physical"), "pp": 35 })),
        record(
            53,
            "flamethrower",
            "fire",
            90,
            json!({
                "past_values": [{ "power": 95, "effect_entries": [], "version_group": named("x-y") }],
                "machines": [{ "machine": link("machine/350"), "version_group": named("sun-moon") }],
            }),
        ),
        record(
            5,
            "mega-punch",
            "normal",
            80,
            json!({
                "accuracy": 85,
                "damage_class": named("physical"),
                "machines": [{ "machine": link("machine/1"), "version_group": named("red-blue") }],
            }),
        ),
        record(
            349,
            "dragon-dance",
            "dragon",
            0,
            json!({ "power": null, "accuracy": null, "damage_class": named("status"), "pp": 20 }),
        ),
        record(84, "thunder-shock", "electric", 40, json!({ "pp": 30 })),
        (
            "machine/1".into(),
            json!({ "id": 1, "item": named("tm01"), "move": named("mega-punch"), "version_group": named("red-blue") }),
        ),
        (
            "machine/350".into(),
            json!({ "id": 350, "item": named("tm35"), "move": named("flamethrower"), "version_group": named("sun-moon") }),
        ),
    ]
}

fn abilities() -> Vec<(String, Value)> {
    let record = |id: u32, name: &str, generation: &str, effect: Option<&str>| {
        (
            format!("ability/{name}"),
            json!({
                "id": id,
                "name": name,
                "generation": named(generation),
                "effect_entries": effect.map(english_effect).unwrap_or_else(|| json!([])),
            }),
        )
    };
    vec![
        record(
            66,
            "blaze",
            "generation-iii",
            Some("Strengthens fire moves to 1.5x their power when HP is below 1/3."),
        ),
        record(
            94,
            "solar-power",
            "generation-iv",
            Some("Increases Special Attack to 1.5x in strong sunlight."),
        ),
        record(
            9,
            "static",
            "generation-iii",
            Some("Has a 30% chance of paralyzing attacking Pokemon on contact."),
        ),
        record(207, "surge-surfer", "generation-vii", None),
    ]
}

fn listing() -> Vec<(String, Value)> {
    vec![
        (
            "pokemon?offset=0&limit=2".into(),
            json!({
                "count": 3,
                "next": format!("{API}/pokemon?offset=2&limit=2"),
                "previous": null,
                "results": [named("bulbasaur"), named("ivysaur")],
            }),
        ),
        (
            "pokemon?offset=2&limit=2".into(),
            json!({
                "count": 3,
                "next": null,
                "previous": format!("{API}/pokemon?offset=0&limit=2"),
                "results": [named("venusaur")],
            }),
        ),
    ]
}

pub(super) fn standard() -> Vec<(String, Value)> {
    [
        versions(),
        charmander_family(),
        pichu_family(),
        moves(),
        abilities(),
        listing(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
