//! Hand-authored lookup tables: sector lists, nakshatra commodities,
//! dignity rules, aspect offsets and nakshatra lords.
//!
//! Every table is an exhaustive `match`, so adding a variant to the catalog
//! fails to compile until each table says something about it.

use crate::domain::catalog::{Nakshatra, Planet, Sign};

/// Exaltation, debilitation and own signs of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DignityRule {
    pub exaltation: Sign,
    pub debilitation: Sign,
    pub own_signs: &'static [Sign],
}

/// Industries and commodities ruled by a planet.
pub const fn planet_sectors(planet: Planet) -> &'static [&'static str] {
    match planet {
        Planet::Sun => &[
            "Public Sector Enterprises",
            "PSU Banks",
            "Precious Stones",
            "Gilt Edged Securities",
            "Rice",
            "Honey",
            "Aromatic Herbs",
            "Gold",
        ],
        Planet::Moon => &[
            "Silver",
            "Milk Products",
            "Petroleum Shares",
            "Hotel",
            "Liquids",
            "Liquor",
            "Fishery",
            "Shipping",
            "Glass",
        ],
        Planet::Mars => &[
            "Healthcare",
            "Pharma",
            "Iron & Steel",
            "Engineering",
            "Defense",
            "Railways",
            "Brick Mfg",
            "Tea/Coffee",
            "Automobiles",
        ],
        Planet::Mercury => &[
            "Sentiments",
            "Grains",
            "Textiles (Silk/Cotton)",
            "Sugar",
            "Telecom",
            "Aviation",
            "Banking",
            "FMCG",
            "IT",
        ],
        Planet::Venus => &[
            "Cotton/Jute",
            "Fancy Textiles",
            "Premium Grains",
            "Confectionery",
            "Gems/Pearls",
            "Floriculture",
            "Media",
            "Perfumes",
            "Spices",
        ],
        Planet::Jupiter => &[
            "Turmeric",
            "Tin",
            "Rubber",
            "Foodstuff",
            "Zinc",
            "Tobacco",
            "Share Trading",
            "Banking",
            "Legal",
            "Luxury Trade",
        ],
        Planet::Saturn => &[
            "Coal",
            "Lead",
            "Cement",
            "Leather",
            "Mining",
            "Farming",
            "Real Estate",
            "Metallurgy",
            "Vegetables",
            "Automobiles",
        ],
        Planet::Rahu => &[
            "Media & Ent",
            "Telecom",
            "IT",
            "Electrical Goods",
            "Crude Oil",
            "Pharmaceuticals",
        ],
        Planet::Ketu => &[
            "Coal",
            "IT",
            "Oil & Gas",
            "Leather",
            "Power",
            "Infrastructure",
            "Automobile",
            "Copper",
        ],
        Planet::Uranus => &[
            "Electrical Goods",
            "Aviation",
            "Surgical Goods",
            "Wireless/Telegraph",
            "Railways",
            "Govt Paper",
            "Film Industry",
            "Aluminium",
        ],
        Planet::Neptune => &[
            "Raw Tea",
            "Raw Cotton",
            "Medicine/Drugs",
            "Oil Industry",
            "Fishing",
            "Tobacco",
            "Market Syndicates",
        ],
        Planet::Pluto => &[
            "Robbery/Theft",
            "Tin",
            "Copper",
            "Zinc",
            "Watches",
            "High-Quality Machinery",
            "Rubber",
            "Leather Shares",
        ],
    }
}

/// Industries and commodities associated with a sign.
pub const fn sign_sectors(sign: Sign) -> &'static [&'static str] {
    match sign {
        Sign::Aries => &[
            "Gold",
            "Woollen Blankets",
            "Wheat",
            "Nickel",
            "Copper",
            "Iron Ore",
            "Steel",
            "Machinery",
        ],
        Sign::Taurus => &[
            "Cotton",
            "Jute",
            "White Cloth",
            "Metals",
            "Equities",
            "Rice",
            "Sugar",
            "Banking",
            "Liquidity",
        ],
        Sign::Gemini => &["Railway", "Publications", "Paper Industries"],
        Sign::Cancer => &["Silver", "Tea", "Fixed Assets"],
        Sign::Leo => &["Gold", "Currency", "Leather"],
        Sign::Virgo => &["Vegetables", "Healthy Pulses"],
        Sign::Libra => &["Silk", "Coloured Cloths"],
        Sign::Scorpio => &["Chemicals", "Jaggery", "Sugar", "Steel", "Leather", "Wool"],
        Sign::Sagittarius => &[
            "Salt",
            "Shares",
            "Rubber",
            "Defense",
            "Shipping",
            "Foreign Bonds",
            "Insurance",
        ],
        Sign::Capricorn => &[
            "Gold",
            "Copper",
            "Coal",
            "Textile Shares",
            "Steel/Iron",
            "Glass",
            "Zinc",
        ],
        Sign::Aquarius => &[
            "Electrical Goods",
            "Paints",
            "Wooden Furniture",
            "Coal Shares",
            "Oil",
            "Cars/Trucks",
            "Telecom",
            "Agriculture Mach.",
        ],
        Sign::Pisces => &["Fishing", "Wax", "Perfumes", "Diamonds", "Pearls", "Pharma"],
    }
}

/// Commodities traditionally read from a nakshatra. Empty where the
/// mansion has no market association.
pub const fn nakshatra_commodities(nakshatra: Nakshatra) -> &'static [&'static str] {
    match nakshatra {
        Nakshatra::Ashwini => &["Horses", "Transport", "Medicines"],
        Nakshatra::Bharani => &["Rice", "Grains", "Seeds"],
        Nakshatra::Krittika => &["Ghee", "Gold", "Fire Arms"],
        Nakshatra::Rohini => &["Milk", "Sugarcane", "Cotton", "Silver"],
        Nakshatra::Mrigashira => &["Textiles", "Fruits", "Perfumes"],
        Nakshatra::Ardra => &["Chemicals", "Electronics", "Software"],
        Nakshatra::Punarvasu => &["Wheat", "Pulses", "Real Estate"],
        Nakshatra::Pushya => &["Milk Products", "Banking", "Gold"],
        Nakshatra::Ashlesha => &["Poisons", "Petroleum", "Pharma"],
        Nakshatra::Magha => &["Gold", "Government Bonds", "Grains"],
        Nakshatra::PurvaPhalguni => &["Cosmetics", "Entertainment", "Salt"],
        Nakshatra::UttaraPhalguni => &["Sugar", "Jaggery", "Cereals"],
        Nakshatra::Hasta => &["Handicrafts", "Cotton", "Silk"],
        Nakshatra::Chitra => &["Jewellery", "Architecture", "Gems"],
        Nakshatra::Swati => &["Aviation", "Trade", "Textiles"],
        Nakshatra::Vishakha => &["Red Dyes", "Pulses", "Oilseeds"],
        Nakshatra::Anuradha => &["Mining", "Foreign Trade"],
        Nakshatra::Jyeshtha => &["Defense", "Electricity", "Heavy Industry"],
        Nakshatra::Mula => &["Roots", "Herbs", "Medicines"],
        Nakshatra::PurvaAshadha => &["Water Works", "Shipping", "Fisheries"],
        Nakshatra::UttaraAshadha => &["Government", "Elephants", "Timber"],
        Nakshatra::Shravana => &["Telecom", "Media", "Education"],
        Nakshatra::Dhanishtha => &["Musical Instruments", "Precious Metals"],
        Nakshatra::Shatabhisha => &["Pharma", "Chemicals", "Research"],
        Nakshatra::PurvaBhadrapada => &["Funeral Goods", "Wool", "Metals"],
        Nakshatra::UttaraBhadrapada => &["Water", "Charity", "Cattle"],
        Nakshatra::Revati => &["Pearls", "Fish", "Shipping", "Salt"],
    }
}

/// Vimshottari lord of a nakshatra. The nine-lord cycle repeats three times.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Planet {
    const CYCLE: [Planet; 9] = [
        Planet::Ketu,
        Planet::Venus,
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Rahu,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Mercury,
    ];
    CYCLE[nakshatra.index() % 9]
}

/// Dignity rule of a planet. `None` for the outer planets.
pub const fn dignity_rule(planet: Planet) -> Option<DignityRule> {
    let rule = match planet {
        Planet::Sun => DignityRule {
            exaltation: Sign::Aries,
            debilitation: Sign::Libra,
            own_signs: &[Sign::Leo],
        },
        Planet::Moon => DignityRule {
            exaltation: Sign::Taurus,
            debilitation: Sign::Scorpio,
            own_signs: &[Sign::Cancer],
        },
        Planet::Mars => DignityRule {
            exaltation: Sign::Capricorn,
            debilitation: Sign::Cancer,
            own_signs: &[Sign::Aries, Sign::Scorpio],
        },
        Planet::Mercury => DignityRule {
            exaltation: Sign::Virgo,
            debilitation: Sign::Pisces,
            own_signs: &[Sign::Gemini, Sign::Virgo],
        },
        Planet::Jupiter => DignityRule {
            exaltation: Sign::Cancer,
            debilitation: Sign::Capricorn,
            own_signs: &[Sign::Sagittarius, Sign::Pisces],
        },
        Planet::Venus => DignityRule {
            exaltation: Sign::Pisces,
            debilitation: Sign::Virgo,
            own_signs: &[Sign::Taurus, Sign::Libra],
        },
        Planet::Saturn => DignityRule {
            exaltation: Sign::Libra,
            debilitation: Sign::Aries,
            own_signs: &[Sign::Capricorn, Sign::Aquarius],
        },
        Planet::Rahu => DignityRule {
            exaltation: Sign::Taurus,
            debilitation: Sign::Scorpio,
            own_signs: &[Sign::Aquarius],
        },
        Planet::Ketu => DignityRule {
            exaltation: Sign::Scorpio,
            debilitation: Sign::Taurus,
            own_signs: &[Sign::Scorpio],
        },
        Planet::Uranus | Planet::Neptune | Planet::Pluto => return None,
    };
    Some(rule)
}

/// House offsets (1-based, counted from the occupied sign) a planet aspects.
pub const fn aspect_offsets(planet: Planet) -> &'static [usize] {
    match planet {
        Planet::Mars => &[4, 7, 8],
        Planet::Jupiter => &[5, 7, 9],
        Planet::Saturn => &[3, 7, 10],
        Planet::Rahu | Planet::Ketu => &[5, 7, 9],
        Planet::Sun
        | Planet::Moon
        | Planet::Mercury
        | Planet::Venus
        | Planet::Uranus
        | Planet::Neptune
        | Planet::Pluto => &DEFAULT_ASPECT_OFFSETS,
    }
}

/// Full (7th house) aspect every planet casts.
pub const DEFAULT_ASPECT_OFFSETS: [usize; 1] = [7];
