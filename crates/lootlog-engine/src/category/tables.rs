//! Static lookup tables for category resolution.

use super::names::*;
use super::CategoryEntry::{self, Pair, Single};

/// Type-line markers checked before anything else.
pub(crate) const TYPE_MARKERS: &[(&str, &str)] = &[
    ("Contract: ", CONTRACT),
    ("Blueprint: ", BLUEPRINT),
];

/// Prefixes that alter a base type without changing what it is.
pub(crate) const QUALITY_PREFIXES: &[&str] = &[
    "Superior ",
    "Synthesised ",
    "Anomalous ",
    "Divergent ",
    "Phantasmal ",
];

/// Items whose category cannot be told from rarity or name shape.
pub(crate) const OTHER_BASE_TYPES: &[(&str, CategoryEntry)] = &[
    ("Offering to the Goddess", Pair(MAP_FRAGMENTS, "Labyrinth")),
    ("Divine Vessel", Pair(MAP_FRAGMENTS, "Misc")),
    ("Sacrifice at Dawn", Pair(MAP_FRAGMENTS, "Sacrifice")),
    ("Sacrifice at Dusk", Pair(MAP_FRAGMENTS, "Sacrifice")),
    ("Sacrifice at Midnight", Pair(MAP_FRAGMENTS, "Sacrifice")),
    ("Sacrifice at Noon", Pair(MAP_FRAGMENTS, "Sacrifice")),
    ("Mortal Grief", Pair(MAP_FRAGMENTS, "Mortal")),
    ("Mortal Hope", Pair(MAP_FRAGMENTS, "Mortal")),
    ("Mortal Ignorance", Pair(MAP_FRAGMENTS, "Mortal")),
    ("Mortal Rage", Pair(MAP_FRAGMENTS, "Mortal")),
    ("Fragment of the Chimera", Pair(MAP_FRAGMENTS, "Shaper")),
    ("Fragment of the Hydra", Pair(MAP_FRAGMENTS, "Shaper")),
    ("Fragment of the Minotaur", Pair(MAP_FRAGMENTS, "Shaper")),
    ("Fragment of the Phoenix", Pair(MAP_FRAGMENTS, "Shaper")),
    ("Fragment of Constriction", Pair(MAP_FRAGMENTS, "Elder")),
    ("Fragment of Enslavement", Pair(MAP_FRAGMENTS, "Elder")),
    ("Fragment of Eradication", Pair(MAP_FRAGMENTS, "Elder")),
    ("Fragment of Purification", Pair(MAP_FRAGMENTS, "Elder")),
    ("Fragment of Emptiness", Pair(MAP_FRAGMENTS, "Uber Elder")),
    ("Fragment of Knowledge", Pair(MAP_FRAGMENTS, "Uber Elder")),
    ("Fragment of Shape", Pair(MAP_FRAGMENTS, "Uber Elder")),
    ("Fragment of Terror", Pair(MAP_FRAGMENTS, "Uber Elder")),
    ("Splinter of Chayula", Pair(MAP_FRAGMENTS, "Breach")),
    ("Splinter of Esh", Pair(MAP_FRAGMENTS, "Breach")),
    ("Splinter of Tul", Pair(MAP_FRAGMENTS, "Breach")),
    ("Splinter of Uul-Netol", Pair(MAP_FRAGMENTS, "Breach")),
    ("Splinter of Xoph", Pair(MAP_FRAGMENTS, "Breach")),
    ("Chayula's Breachstone", Pair(MAP_FRAGMENTS, "Breach")),
    ("Esh's Breachstone", Pair(MAP_FRAGMENTS, "Breach")),
    ("Tul's Breachstone", Pair(MAP_FRAGMENTS, "Breach")),
    ("Uul-Netol's Breachstone", Pair(MAP_FRAGMENTS, "Breach")),
    ("Xoph's Breachstone", Pair(MAP_FRAGMENTS, "Breach")),
    ("Timeless Eternal Empire Splinter", Pair(MAP_FRAGMENTS, "Timeless Splinter")),
    ("Timeless Karui Splinter", Pair(MAP_FRAGMENTS, "Timeless Splinter")),
    ("Timeless Maraketh Splinter", Pair(MAP_FRAGMENTS, "Timeless Splinter")),
    ("Timeless Templar Splinter", Pair(MAP_FRAGMENTS, "Timeless Splinter")),
    ("Timeless Vaal Splinter", Pair(MAP_FRAGMENTS, "Timeless Splinter")),
    ("Timeless Eternal Emblem", Pair(MAP_FRAGMENTS, "Timeless Emblem")),
    ("Timeless Karui Emblem", Pair(MAP_FRAGMENTS, "Timeless Emblem")),
    ("Timeless Maraketh Emblem", Pair(MAP_FRAGMENTS, "Timeless Emblem")),
    ("Timeless Templar Emblem", Pair(MAP_FRAGMENTS, "Timeless Emblem")),
    ("Timeless Vaal Emblem", Pair(MAP_FRAGMENTS, "Timeless Emblem")),
    ("Simulacrum", Pair(MAP_FRAGMENTS, "Delirium")),
    ("Simulacrum Splinter", Pair(MAP_FRAGMENTS, "Delirium")),
    ("Ivory Watchstone", Single(WATCHSTONE)),
    ("Crimson Watchstone", Single(WATCHSTONE)),
    ("Cobalt Watchstone", Single(WATCHSTONE)),
    ("Viridian Watchstone", Single(WATCHSTONE)),
    ("Golden Watchstone", Single(WATCHSTONE)),
    ("Rogue's Marker", Single(CURRENCY)),
    ("Stacked Deck", Single(CURRENCY)),
];

/// Gems that the name-shape rule would misfile, or that carry a subcategory.
pub(crate) const GEM_BASE_TYPES: &[(&str, CategoryEntry)] = &[
    ("Empower Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Enlighten Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Enhance Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Awakened Empower Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Awakened Enlighten Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Awakened Enhance Support", Pair(SUPPORT_GEMS, "Exceptional")),
    ("Arcanist Brand", Pair(SUPPORT_GEMS, "Brand")),
    ("Portal", Pair(ACTIVE_GEMS, "Utility")),
    ("Detonate Mines", Pair(ACTIVE_GEMS, "Utility")),
    ("Brand Recall", Pair(ACTIVE_GEMS, "Utility")),
];

/// Currency-rarity name shapes, checked in order.
pub(crate) const CURRENCY_SUFFIXES: &[(&str, &str)] = &[
    (" Oil", OIL),
    (" Fossil", FOSSIL),
    (" Resonator", RESONATOR),
    (" Delirium Orb", DELIRIUM_ORB),
    (" Catalyst", CATALYST),
];

pub(crate) const CURRENCY_PREFIXES: &[(&str, &str)] = &[
    ("Essence of ", ESSENCE),
    ("Remnant of Corruption", ESSENCE),
    ("Vial of ", VIAL),
];

/// Name fragments of essences with a tier word in front.
pub(crate) const ESSENCE_MARKER: &str = " Essence of ";

/// Harvest seed name shape: tier word in front, seed kind at the end.
pub(crate) const SEED_TIERS: &[&str] = &["Wild", "Vivid", "Primal"];
pub(crate) const SEED_KINDS: &[&str] = &[" Seed", " Grain", " Bulb"];

/// Base types of wearable and wieldable items.
pub(crate) const EQUIPMENT_BASE_TYPES: &[(&str, &str)] = &[
    // Helmets
    ("Hubris Circlet", HELMETS),
    ("Royal Burgonet", HELMETS),
    ("Eternal Burgonet", HELMETS),
    ("Lion Pelt", HELMETS),
    ("Bone Helmet", HELMETS),
    ("Pig-Faced Bascinet", HELMETS),
    ("Nightmare Bascinet", HELMETS),
    ("Deicide Mask", HELMETS),
    ("Praetor Crown", HELMETS),
    ("Sinner Tricorne", HELMETS),
    ("Iron Hat", HELMETS),
    ("Leather Cap", HELMETS),
    ("Iron Circlet", HELMETS),
    ("Great Crown", HELMETS),
    // Body armours
    ("Vaal Regalia", BODY_ARMOURS),
    ("Astral Plate", BODY_ARMOURS),
    ("Glorious Plate", BODY_ARMOURS),
    ("Assassin's Garb", BODY_ARMOURS),
    ("Zodiac Leather", BODY_ARMOURS),
    ("Sadist Garb", BODY_ARMOURS),
    ("Carnal Armour", BODY_ARMOURS),
    ("Sacrificial Garb", BODY_ARMOURS),
    ("Simple Robe", BODY_ARMOURS),
    ("Plate Vest", BODY_ARMOURS),
    ("Shabby Jerkin", BODY_ARMOURS),
    ("Occultist's Vestment", BODY_ARMOURS),
    ("Silken Vest", BODY_ARMOURS),
    // Gloves
    ("Sorcerer Gloves", GLOVES),
    ("Titan Gauntlets", GLOVES),
    ("Slink Gloves", GLOVES),
    ("Fingerless Silk Gloves", GLOVES),
    ("Spiked Gloves", GLOVES),
    ("Gripped Gloves", GLOVES),
    ("Zealot Gloves", GLOVES),
    ("Murder Mitts", GLOVES),
    ("Iron Gauntlets", GLOVES),
    ("Rawhide Gloves", GLOVES),
    // Boots
    ("Sorcerer Boots", BOOTS),
    ("Titan Greaves", BOOTS),
    ("Slink Boots", BOOTS),
    ("Two-Toned Boots", BOOTS),
    ("Dragonscale Boots", BOOTS),
    ("Murder Boots", BOOTS),
    ("Iron Greaves", BOOTS),
    ("Rawhide Boots", BOOTS),
    ("Wool Shoes", BOOTS),
    // Shields
    ("Titanium Spirit Shield", SHIELDS),
    ("Harmonic Spirit Shield", SHIELDS),
    ("Fossilised Spirit Shield", SHIELDS),
    ("Archon Kite Shield", SHIELDS),
    ("Pinnacle Tower Shield", SHIELDS),
    ("Imperial Buckler", SHIELDS),
    ("Colossal Tower Shield", SHIELDS),
    ("Splintered Tower Shield", SHIELDS),
    ("Goathide Buckler", SHIELDS),
    // Quivers
    ("Spike-Point Arrow Quiver", QUIVERS),
    ("Broadhead Arrow Quiver", QUIVERS),
    ("Penetrating Arrow Quiver", QUIVERS),
    ("Blunt Arrow Quiver", QUIVERS),
    // Amulets
    ("Onyx Amulet", AMULETS),
    ("Agate Amulet", AMULETS),
    ("Amber Amulet", AMULETS),
    ("Citrine Amulet", AMULETS),
    ("Jade Amulet", AMULETS),
    ("Lapis Amulet", AMULETS),
    ("Turquoise Amulet", AMULETS),
    ("Marble Amulet", AMULETS),
    ("Paua Amulet", AMULETS),
    ("Coral Amulet", AMULETS),
    // Rings
    ("Two-Stone Ring", RINGS),
    ("Diamond Ring", RINGS),
    ("Ruby Ring", RINGS),
    ("Sapphire Ring", RINGS),
    ("Topaz Ring", RINGS),
    ("Amethyst Ring", RINGS),
    ("Prismatic Ring", RINGS),
    ("Vermillion Ring", RINGS),
    ("Steel Ring", RINGS),
    ("Opal Ring", RINGS),
    ("Unset Ring", RINGS),
    ("Coral Ring", RINGS),
    ("Iron Ring", RINGS),
    ("Gold Ring", RINGS),
    ("Moonstone Ring", RINGS),
    // Belts
    ("Stygian Vise", BELTS),
    ("Leather Belt", BELTS),
    ("Heavy Belt", BELTS),
    ("Rustic Sash", BELTS),
    ("Chain Belt", BELTS),
    ("Cloth Belt", BELTS),
    ("Studded Belt", BELTS),
    ("Crystal Belt", BELTS),
    ("Vanguard Belt", BELTS),
    // Jewels
    ("Cobalt Jewel", JEWEL),
    ("Crimson Jewel", JEWEL),
    ("Viridian Jewel", JEWEL),
    ("Prismatic Jewel", JEWEL),
    ("Timeless Jewel", JEWEL),
    ("Murderous Eye Jewel", ABYSS_JEWEL),
    ("Searching Eye Jewel", ABYSS_JEWEL),
    ("Hypnotic Eye Jewel", ABYSS_JEWEL),
    ("Ghastly Eye Jewel", ABYSS_JEWEL),
    ("Large Cluster Jewel", CLUSTER_JEWEL),
    ("Medium Cluster Jewel", CLUSTER_JEWEL),
    ("Small Cluster Jewel", CLUSTER_JEWEL),
    // Flasks
    ("Divine Life Flask", FLASKS),
    ("Eternal Life Flask", FLASKS),
    ("Divine Mana Flask", FLASKS),
    ("Eternal Mana Flask", FLASKS),
    ("Hallowed Hybrid Flask", FLASKS),
    ("Quicksilver Flask", FLASKS),
    ("Granite Flask", FLASKS),
    ("Jade Flask", FLASKS),
    ("Diamond Flask", FLASKS),
    ("Silver Flask", FLASKS),
    ("Basalt Flask", FLASKS),
    ("Quartz Flask", FLASKS),
    ("Sulphur Flask", FLASKS),
    ("Bismuth Flask", FLASKS),
    ("Stibnite Flask", FLASKS),
    ("Amethyst Flask", FLASKS),
    ("Ruby Flask", FLASKS),
    ("Sapphire Flask", FLASKS),
    ("Topaz Flask", FLASKS),
    ("Aquamarine Flask", FLASKS),
    ("Corundum Flask", FLASKS),
    ("Gold Flask", FLASKS),
    // Weapons
    ("Imperial Bow", BOWS),
    ("Thicket Bow", BOWS),
    ("Harbinger Bow", BOWS),
    ("Spine Bow", BOWS),
    ("Crude Bow", BOWS),
    ("Imperial Claw", CLAWS),
    ("Gemini Claw", CLAWS),
    ("Vaal Claw", CLAWS),
    ("Ambusher", DAGGERS),
    ("Imperial Skean", DAGGERS),
    ("Platinum Kris", RUNE_DAGGERS),
    ("Fiend Dagger", RUNE_DAGGERS),
    ("Runic Hatchet", ONE_HAND_AXES),
    ("Vaal Hatchet", ONE_HAND_AXES),
    ("Behemoth Mace", ONE_HAND_MACES),
    ("Gavel", ONE_HAND_MACES),
    ("Jewelled Foil", THRUSTING_SWORDS),
    ("Vaal Rapier", THRUSTING_SWORDS),
    ("Corsair Sword", ONE_HAND_SWORDS),
    ("Eternal Sword", ONE_HAND_SWORDS),
    ("Tiger Hook", ONE_HAND_SWORDS),
    ("Void Sceptre", SCEPTRES),
    ("Opal Sceptre", SCEPTRES),
    ("Eclipse Staff", STAVES),
    ("Judgement Staff", STAVES),
    ("Maelström Staff", WARSTAVES),
    ("Vaal Axe", TWO_HAND_AXES),
    ("Despot Axe", TWO_HAND_AXES),
    ("Coronal Maul", TWO_HAND_MACES),
    ("Terror Maul", TWO_HAND_MACES),
    ("Reaver Sword", TWO_HAND_SWORDS),
    ("Exquisite Blade", TWO_HAND_SWORDS),
    ("Prophecy Wand", WANDS),
    ("Imbued Wand", WANDS),
    ("Profane Wand", WANDS),
    ("Driftwood Wand", WANDS),
    ("Fishing Rod", FISHING_RODS),
];

/// Base names of maps, used to strip magic affixes from map type lines.
pub(crate) const MAP_BASES: &[&str] = &[
    "Academy Map",
    "Acid Caverns Map",
    "Alleyways Map",
    "Ancient City Map",
    "Arachnid Nest Map",
    "Arcade Map",
    "Arena Map",
    "Arid Lake Map",
    "Armoury Map",
    "Arsenal Map",
    "Ashen Wood Map",
    "Atoll Map",
    "Barrows Map",
    "Basilica Map",
    "Bazaar Map",
    "Beach Map",
    "Belfry Map",
    "Bog Map",
    "Bone Crypt Map",
    "Burial Chambers Map",
    "Cage Map",
    "Caldera Map",
    "Canyon Map",
    "Carcass Map",
    "Castle Ruins Map",
    "Cells Map",
    "Cemetery Map",
    "Channel Map",
    "Chateau Map",
    "Cold River Map",
    "Colonnade Map",
    "Conservatory Map",
    "Coral Ruins Map",
    "Core Map",
    "Courthouse Map",
    "Courtyard Map",
    "Coves Map",
    "Crater Map",
    "Crimson Temple Map",
    "Crimson Township Map",
    "Crystal Ore Map",
    "Cursed Crypt Map",
    "Dark Forest Map",
    "Defiled Cathedral Map",
    "Desert Map",
    "Dig Map",
    "Dry Sea Map",
    "Dunes Map",
    "Dungeon Map",
    "Estuary Map",
    "Excavation Map",
    "Factory Map",
    "Fields Map",
    "Flooded Mine Map",
    "Forge of the Phoenix Map",
    "Forking River Map",
    "Fungal Hollow Map",
    "Gardens Map",
    "Geode Map",
    "Ghetto Map",
    "Glacier Map",
    "Graveyard Map",
    "Grotto Map",
    "Haunted Mansion Map",
    "Iceberg Map",
    "Infested Valley Map",
    "Ivory Temple Map",
    "Jungle Valley Map",
    "Laboratory Map",
    "Lair Map",
    "Lair of the Hydra Map",
    "Lava Chamber Map",
    "Lava Lake Map",
    "Leyline Map",
    "Lighthouse Map",
    "Lookout Map",
    "Malformation Map",
    "Marshes Map",
    "Mausoleum Map",
    "Maze Map",
    "Maze of the Minotaur Map",
    "Mesa Map",
    "Mineral Pools Map",
    "Moon Temple Map",
    "Mud Geyser Map",
    "Museum Map",
    "Necropolis Map",
    "Orchard Map",
    "Overgrown Shrine Map",
    "Palace Map",
    "Park Map",
    "Pen Map",
    "Peninsula Map",
    "Phantasmagoria Map",
    "Pier Map",
    "Pit Map",
    "Pit of the Chimera Map",
    "Plateau Map",
    "Plaza Map",
    "Port Map",
    "Precinct Map",
    "Primordial Blocks Map",
    "Primordial Pool Map",
    "Promenade Map",
    "Racecourse Map",
    "Ramparts Map",
    "Reef Map",
    "Relic Chambers Map",
    "Residence Map",
    "Scriptorium Map",
    "Sepulchre Map",
    "Shipyard Map",
    "Shore Map",
    "Shrine Map",
    "Siege Map",
    "Spider Forest Map",
    "Spider Lair Map",
    "Stagnation Map",
    "Strand Map",
    "Sulphur Vents Map",
    "Summit Map",
    "Sunken City Map",
    "Temple Map",
    "Terrace Map",
    "Thicket Map",
    "Tower Map",
    "Toxic Sewer Map",
    "Tropical Island Map",
    "Underground River Map",
    "Underground Sea Map",
    "Vaal Pyramid Map",
    "Vaal Temple Map",
    "Vault Map",
    "Villa Map",
    "Volcano Map",
    "Waste Pool Map",
    "Wasteland Map",
    "Waterways Map",
    "Wharf Map",
];

/// Words a magic map can carry in front of its base name.
pub(crate) const MAP_PREFIX_WORDS: &[&str] = &[
    "Abhorrent",
    "Afflicting",
    "Antagonist's",
    "Armoured",
    "Augmented",
    "Bipedal",
    "Blighted",
    "Burning",
    "Capricious",
    "Ceremonial",
    "Chaining",
    "Chilled",
    "Conflagrating",
    "Deadly",
    "Degenerative",
    "Electrocuting",
    "Empowered",
    "Enervating",
    "Feasting",
    "Fecund",
    "Fleet",
    "Freezing",
    "Grasping",
    "Hexwarded",
    "Impervious",
    "Multifarious",
    "Oppressive",
    "Overlord's",
    "Punishing",
    "Rotten",
    "Savage",
    "Screaming",
    "Shaped",
    "Skeletal",
    "Slithering",
    "Splitting",
    "Stalwart",
    "Titan's",
    "Twinned",
    "Unstoppable",
    "Unwavering",
];
