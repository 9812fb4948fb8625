//! Fixed naming tables the valuation identifiers depend on.

/// Icon-path fragments mapped to map series, in match order.
///
/// Two-digit series are listed before one-digit series so that `mn=1`
/// does not claim `mn=12`.
pub(crate) const MAP_SERIES: &[(&str, &str)] = &[
    ("mn=18", "Ancestor"),
    ("mn=17", "Crucible"),
    ("mn=16", "Sanctum"),
    ("mn=15", "Kalandra"),
    ("mn=14", "Sentinel"),
    ("mn=13", "Archnemesis"),
    ("mn=12", "Scourge"),
    ("mn=11", "Expedition"),
    ("mn=10", "Ritual"),
    ("mn=9", "Heist"),
    ("mn=8", "Harvest"),
    ("mn=7", "Delirium"),
    ("mn=6", "Metamorph"),
    ("mn=5", "Blight"),
    ("mn=4", "Legion"),
    ("mn=3", "Synthesis"),
    ("mn=2", "Betrayal"),
    ("mn=1", "War for the Atlas"),
    ("Atlas2Maps", "War for the Atlas"),
    ("AtlasMaps", "Atlas of Worlds"),
    ("act4maps", "Pre 2.4"),
];

/// Unique names that exist on more than one base; the base is part of the key.
pub(crate) const DUAL_BASE_UNIQUES: &[&str] = &[
    "Grand Spectrum",
    "Combat Focus",
    "Doryani's Invitation",
    "Lioneye's Vision",
    "Precursor's Emblem",
    "Atziri's Splendour",
];

/// Uniques whose variant shows in the icon: name, then (icon fragment, tag).
pub(crate) const ICON_VARIANTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Impresence",
        &[
            ("ImpresenceChaos", "Chaos"),
            ("ImpresenceCold", "Cold"),
            ("ImpresenceFire", "Fire"),
            ("ImpresenceLightning", "Lightning"),
            ("ImpresencePhysical", "Physical"),
        ],
    ),
    (
        "Vessel of Vinktar",
        &[
            ("VinktarAttacks", "Added Attacks"),
            ("VinktarSpells", "Added Spells"),
            ("VinktarPenetration", "Penetration"),
            ("VinktarConversion", "Conversion"),
        ],
    ),
    (
        "Yriel's Fostering",
        &[
            ("YrielsFosteringBleed", "Bleeding"),
            ("YrielsFosteringPoison", "Poison"),
            ("YrielsFosteringMaim", "Maim"),
        ],
    ),
];

/// Uniques that roll a variable number of abyssal sockets.
pub(crate) const ABYSSAL_UNIQUES: &[&str] = &[
    "Bubonic Trail",
    "Command of the Pit",
    "Darkness Enthroned",
    "Hale Negator",
    "Lightpoacher",
    "Shroud of the Lightless",
    "Tombfist",
];

/// Unidentified uniques that cannot be told apart: name, then every priced key.
pub(crate) const UNIDENTIFIED_VARIANTS: &[(&str, &[&str])] = &[
    (
        "Vessel of Vinktar",
        &[
            "Vessel of Vinktar (Added Attacks)",
            "Vessel of Vinktar (Added Spells)",
            "Vessel of Vinktar (Penetration)",
            "Vessel of Vinktar (Conversion)",
        ],
    ),
    (
        "Yriel's Fostering",
        &[
            "Yriel's Fostering (Bleeding)",
            "Yriel's Fostering (Poison)",
            "Yriel's Fostering (Maim)",
        ],
    ),
    (
        "Volkuur's Guidance",
        &[
            "Volkuur's Guidance (Fire)",
            "Volkuur's Guidance (Cold)",
            "Volkuur's Guidance (Lightning)",
        ],
    ),
    (
        "Impresence",
        &[
            "Impresence (Chaos)",
            "Impresence (Cold)",
            "Impresence (Fire)",
            "Impresence (Lightning)",
            "Impresence (Physical)",
        ],
    ),
];

/// Supports whose level alone sets the price, from level 3.
pub(crate) const EXCEPTIONAL_SUPPORTS: &[&str] =
    &["Empower Support", "Enlighten Support", "Enhance Support"];

/// The one gem priced at level 5 and quality 20.
pub(crate) const AWAKENED_EXCEPTIONAL: &str = "Awakened Empower Support";

/// Lowest item level a base type is priced at.
pub(crate) const MIN_BASE_ITEM_LEVEL: u32 = 82;

/// Item levels above this are priced as this.
pub(crate) const MAX_BASE_ITEM_LEVEL: u32 = 86;

/// Marker of the uses line on an Ivory Watchstone.
pub(crate) const USES_REMAINING: &str = "uses remaining";
