pub const WILD_FISH_BACKGROUND: &str = "wild_fish_background";
pub const SEA_BASS: &str = "sea_bass";
pub const CATLA: &str = "catla";
pub const ROHU: &str = "rohu";

/// Output order of the species model.
pub const SPECIES_LABELS: [&str; 18] = [
    "catfish",
    CATLA,
    "common_carp",
    "crab",
    "grass_carp",
    "mackerel",
    "mrigal",
    "pink_perch",
    "prawn",
    "red_mullet",
    ROHU,
    SEA_BASS,
    "sea_bream",
    "silver_carp",
    "sprat",
    "tilapia",
    "trout",
    WILD_FISH_BACKGROUND,
];

pub const BLACK_GILL_DISEASE: &str = "black_gill_disease";
pub const HEALTHY: &str = "healthy";
pub const WHITE_SPOT_VIRUS: &str = "white_spot_virus";

/// Output order of the disease model.
pub const DISEASE_LABELS: [&str; 3] = [BLACK_GILL_DISEASE, HEALTHY, WHITE_SPOT_VIRUS];

// wild_fish_background is intentionally absent and displays as its key.
const SPECIES_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("catfish", "Catfish"),
    (CATLA, "Catla"),
    ("common_carp", "Common Carp"),
    ("crab", "Crab"),
    ("grass_carp", "Grass Carp"),
    ("mackerel", "Mackerel"),
    ("mrigal", "Mrigal"),
    ("pink_perch", "Pink Perch"),
    ("prawn", "Prawn"),
    ("red_mullet", "Red Mullet"),
    (ROHU, "Rohu"),
    (SEA_BASS, "Sea Bass"),
    ("sea_bream", "Sea Bream"),
    ("silver_carp", "Silver Carp"),
    ("sprat", "Sprat"),
    ("tilapia", "Tilapia"),
    ("trout", "Trout"),
];

const DISEASE_DISPLAY_NAMES: &[(&str, &str)] = &[
    (BLACK_GILL_DISEASE, "Black Gill"),
    (HEALTHY, "Healthy"),
    (WHITE_SPOT_VIRUS, "White Spot"),
];

pub fn species_display_name(key: &str) -> &str {
    lookup(SPECIES_DISPLAY_NAMES, key)
}

pub fn disease_display_name(key: &str) -> &str {
    lookup(DISEASE_DISPLAY_NAMES, key)
}

fn lookup<'a>(names: &[(&str, &'static str)], key: &'a str) -> &'a str {
    names
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}
