//! Built-in catalog datasets.
//!
//! The catalog is read-only at runtime; an administrative sync step upserts
//! these records by `code` and deletes anything no longer listed. Growth
//! stage images follow `/seeds/{code}/{code}_01.png` through `_04.png`;
//! icons use the fully grown `_04` frame.

/// One plantable species.
#[derive(Debug, Clone)]
pub struct CatalogSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub base_price: i64,
    pub base_sell_price: i64,
    /// Seconds until the tree matures.
    pub base_grow_time: i64,
    pub unlock_kind: &'static str,
    pub unlock_value: i64,
    pub icon: &'static str,
    pub description: &'static str,
    pub is_event: bool,
}

/// One unlockable growing spot.
#[derive(Debug, Clone)]
pub struct CatalogLocation {
    pub code: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub sort_order: i32,
    pub bonus_kind: &'static str,
    pub bonus_value: i64,
    pub bonus_multiplier: f64,
    pub icon: &'static str,
    pub description: &'static str,
    pub location_image_url: &'static str,
    pub pot_image_url: &'static str,
}

/// Seed the brand-new player starts with.
pub const DEFAULT_SEED_CODE: &str = "bean_sprout";

/// Location every player begins in.
pub const DEFAULT_LOCATION_CODE: &str = "waste_land";

pub const SEEDS: &[CatalogSeed] = &[
    CatalogSeed {
        code: "bean_sprout",
        name: "Bean Sprout",
        base_price: 0,
        base_sell_price: 100,
        base_grow_time: 300, // 5 minutes
        unlock_kind: "default",
        unlock_value: 0,
        icon: "/seeds/bean_sprout/bean_sprout_04.png",
        description: "A simple starter plant. Free to plant!",
        is_event: false,
    },
    CatalogSeed {
        code: "radish",
        name: "Radish",
        base_price: 300,
        base_sell_price: 550,
        base_grow_time: 480, // 8 minutes
        unlock_kind: "gold",
        unlock_value: 300,
        icon: "/seeds/radish/radish_04.png",
        description: "Quick-growing root vegetable.",
        is_event: false,
    },
    CatalogSeed {
        code: "lettuce",
        name: "Lettuce",
        base_price: 500,
        base_sell_price: 850,
        base_grow_time: 600, // 10 minutes
        unlock_kind: "gold",
        unlock_value: 500,
        icon: "/seeds/lettuce/lettuce_04.png",
        description: "Fresh lettuce that grows quickly.",
        is_event: false,
    },
    CatalogSeed {
        code: "spinach",
        name: "Spinach",
        base_price: 800,
        base_sell_price: 1400,
        base_grow_time: 900, // 15 minutes
        unlock_kind: "gold",
        unlock_value: 800,
        icon: "/seeds/spinach/spinach_04.png",
        description: "Healthy leafy greens.",
        is_event: false,
    },
    CatalogSeed {
        code: "carrot",
        name: "Carrot",
        base_price: 1500,
        base_sell_price: 2700,
        base_grow_time: 1200, // 20 minutes
        unlock_kind: "gold",
        unlock_value: 1500,
        icon: "/seeds/carrot/carrot_04.png",
        description: "Crunchy orange root vegetable.",
        is_event: false,
    },
];

pub const LOCATIONS: &[CatalogLocation] = &[
    CatalogLocation {
        code: "waste_land",
        name: "Waste Land",
        price: 0,
        sort_order: 0,
        bonus_kind: "click_speed",
        bonus_value: 0,
        bonus_multiplier: 1.0,
        icon: "/locations/waste_land/icon.png",
        description: "A barren patch of dirt. Everyone starts somewhere.",
        location_image_url: "/locations/waste_land/background.png",
        pot_image_url: "/locations/waste_land/pot.png",
    },
    CatalogLocation {
        code: "backyard",
        name: "Backyard",
        price: 5_000,
        sort_order: 1,
        bonus_kind: "click_speed",
        bonus_value: 5,
        bonus_multiplier: 1.1,
        icon: "/locations/backyard/icon.png",
        description: "A tidy backyard plot with better soil.",
        location_image_url: "/locations/backyard/background.png",
        pot_image_url: "/locations/backyard/pot.png",
    },
    CatalogLocation {
        code: "riverside",
        name: "Riverside",
        price: 50_000,
        sort_order: 2,
        bonus_kind: "click_chance",
        bonus_value: 10,
        bonus_multiplier: 1.25,
        icon: "/locations/riverside/icon.png",
        description: "Fertile ground by the water.",
        location_image_url: "/locations/riverside/background.png",
        pot_image_url: "/locations/riverside/pot.png",
    },
    CatalogLocation {
        code: "greenhouse",
        name: "Greenhouse",
        price: 500_000,
        sort_order: 3,
        bonus_kind: "rare_seed_chance",
        bonus_value: 5,
        bonus_multiplier: 1.5,
        icon: "/locations/greenhouse/icon.png",
        description: "Climate-controlled glass and steel.",
        location_image_url: "/locations/greenhouse/background.png",
        pot_image_url: "/locations/greenhouse/pot.png",
    },
    CatalogLocation {
        code: "enchanted_grove",
        name: "Enchanted Grove",
        price: 2_000_000,
        sort_order: 4,
        bonus_kind: "rare_seed_chance",
        bonus_value: 15,
        bonus_multiplier: 2.0,
        icon: "/locations/enchanted_grove/icon.png",
        description: "Old magic lingers between these trees.",
        location_image_url: "/locations/enchanted_grove/background.png",
        pot_image_url: "/locations/enchanted_grove/pot.png",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_codes_are_unique() {
        let codes: HashSet<_> = SEEDS.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), SEEDS.len());
        assert!(codes.contains(DEFAULT_SEED_CODE));
    }

    #[test]
    fn location_codes_are_unique_and_ordered() {
        let codes: HashSet<_> = LOCATIONS.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), LOCATIONS.len());
        assert!(codes.contains(DEFAULT_LOCATION_CODE));

        let orders: Vec<_> = LOCATIONS.iter().map(|l| l.sort_order).collect();
        assert_eq!(orders.iter().collect::<HashSet<_>>().len(), orders.len());
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn default_entries_are_free() {
        let starter = SEEDS.iter().find(|s| s.code == DEFAULT_SEED_CODE).unwrap();
        assert_eq!(starter.base_price, 0);
        assert_eq!(starter.base_grow_time, 300);
        assert_eq!(starter.unlock_kind, "default");

        let home = LOCATIONS.iter().find(|l| l.code == DEFAULT_LOCATION_CODE).unwrap();
        assert_eq!(home.price, 0);
        assert_eq!(home.sort_order, 0);
    }

    #[test]
    fn unlock_kinds_are_known() {
        for seed in SEEDS {
            assert!(
                garden_core::RequirementKind::parse(seed.unlock_kind).is_some(),
                "seed {} has unknown unlock kind",
                seed.code
            );
        }
    }
}
