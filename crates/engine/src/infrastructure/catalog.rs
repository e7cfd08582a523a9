//! Static game catalog: the world map and the rogues' gallery.
//!
//! Built once at startup and shared behind `Arc`. Nothing here mutates, so
//! lookups are plain slice scans over small fixed data.

use gumshoe_domain::{
    CaseBrief, City, CityId, Npc, NpcId, StolenTreasure, Suspect, SuspectId, SuspectTraits,
};

pub struct GameCatalog {
    cities: Vec<City>,
    suspects: Vec<Suspect>,
}

fn city(id: &str, name: &str, region: &str, continent: &str, bg: &str, npcs: Vec<Npc>) -> City {
    City {
        id: CityId::new(id),
        name: name.into(),
        region: region.into(),
        continent: continent.into(),
        background_key: bg.into(),
        npcs,
    }
}

fn npc(id: &str, name: &str, role: &str) -> Npc {
    Npc {
        id: NpcId::new(id),
        name: name.into(),
        role: role.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn suspect(
    id: &str,
    name: &str,
    photo: &str,
    hair: &str,
    eyes: &str,
    hobby: &str,
    food: &str,
    vehicle: &str,
    feature: &str,
) -> Suspect {
    Suspect {
        id: SuspectId::new(id),
        name: name.into(),
        photo_key: photo.into(),
        traits: SuspectTraits {
            hair_color: hair.into(),
            eye_color: eyes.into(),
            hobby: hobby.into(),
            favorite_food: food.into(),
            vehicle: vehicle.into(),
            distinguishing_feature: feature.into(),
        },
    }
}

impl GameCatalog {
    pub fn new() -> Self {
        Self {
            cities: init_cities(),
            suspects: init_suspects(),
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }

    pub fn suspect(&self, id: &SuspectId) -> Option<&Suspect> {
        self.suspects.iter().find(|s| &s.id == id)
    }

    /// NPC lookup regardless of city.
    pub fn npc(&self, id: &NpcId) -> Option<&Npc> {
        self.cities.iter().find_map(|c| c.npc(id))
    }

    /// NPC lookup constrained to one city.
    pub fn npc_in_city(&self, city_id: &CityId, npc_id: &NpcId) -> Option<&Npc> {
        self.city(city_id).and_then(|c| c.npc(npc_id))
    }

    pub fn city_ids(&self) -> Vec<CityId> {
        self.cities.iter().map(|c| c.id.clone()).collect()
    }

    /// Every new case uses the same narrative; only the trail is randomized.
    pub fn default_brief(&self) -> CaseBrief {
        CaseBrief {
            title: "The Case of the Missing Crown Jewels".into(),
            briefing: "The Crown Jewels have been stolen from the Tower of London! \
                       Your mission is to track down the thief across the globe."
                .into(),
            stolen_treasure: StolenTreasure {
                name: "Crown Jewels".into(),
                description:
                    "The priceless Crown Jewels of England, including the Imperial State Crown"
                        .into(),
            },
        }
    }

    pub fn culprit(&self) -> SuspectId {
        SuspectId::new("suspect-carmen")
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn init_cities() -> Vec<City> {
    vec![
        city(
            "bangkok",
            "Bangkok",
            "Southeast Asia",
            "Asia",
            "bangkok_bg",
            vec![
                npc("npc-somchai", "Somchai", "Street vendor"),
                npc("npc-niran", "Niran", "Tuk-tuk driver"),
                npc("npc-mali", "Mali", "Temple guide"),
            ],
        ),
        city(
            "tokyo",
            "Tokyo",
            "East Asia",
            "Asia",
            "tokyo_bg",
            vec![
                npc("npc-yuki", "Yuki", "Sushi chef"),
                npc("npc-kenji", "Kenji", "Train conductor"),
                npc("npc-aiko", "Aiko", "Museum curator"),
            ],
        ),
        city(
            "paris",
            "Paris",
            "Western Europe",
            "Europe",
            "paris_bg",
            vec![
                npc("npc-pierre", "Pierre", "Café owner"),
                npc("npc-colette", "Colette", "Art dealer"),
                npc("npc-jean", "Jean", "Bookshop keeper"),
            ],
        ),
        city(
            "cairo",
            "Cairo",
            "North Africa",
            "Africa",
            "cairo_bg",
            vec![
                npc("npc-hassan", "Hassan", "Archaeologist"),
                npc("npc-fatima", "Fatima", "Spice merchant"),
            ],
        ),
        city(
            "rio",
            "Rio de Janeiro",
            "South America",
            "South America",
            "rio_bg",
            vec![
                npc("npc-carlos", "Carlos", "Samba musician"),
                npc("npc-lucia", "Lucia", "Tour guide"),
            ],
        ),
        city(
            "new-york",
            "New York",
            "North America",
            "North America",
            "newyork_bg",
            vec![
                npc("npc-mike", "Mike", "Hot dog vendor"),
                npc("npc-sarah", "Sarah", "Taxi driver"),
            ],
        ),
        city(
            "london",
            "London",
            "Western Europe",
            "Europe",
            "london_bg",
            vec![
                npc("npc-arthur", "Arthur", "Bobby"),
                npc("npc-emma", "Emma", "Pub owner"),
            ],
        ),
        city(
            "sydney",
            "Sydney",
            "Oceania",
            "Oceania",
            "sydney_bg",
            vec![
                npc("npc-bruce", "Bruce", "Surfer"),
                npc("npc-sheila", "Sheila", "Zookeeper"),
            ],
        ),
        city(
            "mumbai",
            "Mumbai",
            "South Asia",
            "Asia",
            "mumbai_bg",
            vec![
                npc("npc-priya", "Priya", "Bollywood actress"),
                npc("npc-raj", "Raj", "Rickshaw driver"),
            ],
        ),
        city(
            "moscow",
            "Moscow",
            "Eastern Europe",
            "Europe",
            "moscow_bg",
            vec![
                npc("npc-ivan", "Ivan", "Chess master"),
                npc("npc-olga", "Olga", "Ballet dancer"),
            ],
        ),
        city(
            "nairobi",
            "Nairobi",
            "East Africa",
            "Africa",
            "nairobi_bg",
            vec![
                npc("npc-amina", "Amina", "Safari guide"),
                npc("npc-jomo", "Jomo", "Market trader"),
            ],
        ),
        city(
            "istanbul",
            "Istanbul",
            "Eurasia",
            "Europe",
            "istanbul_bg",
            vec![
                npc("npc-mehmet", "Mehmet", "Carpet seller"),
                npc("npc-ayse", "Ayse", "Baklava maker"),
            ],
        ),
        city(
            "mexico-city",
            "Mexico City",
            "Central America",
            "North America",
            "mexicocity_bg",
            vec![
                npc("npc-diego", "Diego", "Muralist"),
                npc("npc-rosa", "Rosa", "Taco vendor"),
            ],
        ),
        city(
            "beijing",
            "Beijing",
            "East Asia",
            "Asia",
            "beijing_bg",
            vec![
                npc("npc-wei", "Wei", "Tea master"),
                npc("npc-ling", "Ling", "Silk merchant"),
            ],
        ),
        city(
            "rome",
            "Rome",
            "Southern Europe",
            "Europe",
            "rome_bg",
            vec![
                npc("npc-marco", "Marco", "Gelato maker"),
                npc("npc-giulia", "Giulia", "Historian"),
            ],
        ),
    ]
}

fn init_suspects() -> Vec<Suspect> {
    vec![
        suspect(
            "suspect-carmen",
            "Carmen Sandiego",
            "carmen_photo",
            "Black",
            "Brown",
            "Hang gliding",
            "Paella",
            "Convertible",
            "Red trench coat",
        ),
        suspect(
            "suspect-vic",
            "Vic the Slick",
            "vic_photo",
            "Blonde",
            "Blue",
            "Surfing",
            "Pizza",
            "Motorcycle",
            "Gold tooth",
        ),
        suspect(
            "suspect-patty",
            "Patty Larceny",
            "patty_photo",
            "Red",
            "Green",
            "Mountain climbing",
            "Sushi",
            "Helicopter",
            "Scar on left cheek",
        ),
        suspect(
            "suspect-eartha",
            "Eartha Brute",
            "eartha_photo",
            "Brown",
            "Hazel",
            "Weightlifting",
            "Steak",
            "Tank",
            "Muscular build",
        ),
        suspect(
            "suspect-double",
            "Double Trouble",
            "double_photo",
            "Black",
            "Brown",
            "Acting",
            "Croissant",
            "Limousine",
            "Identical twin",
        ),
        suspect(
            "suspect-top",
            "Top Grunge",
            "top_photo",
            "Purple",
            "Gray",
            "Skateboarding",
            "Tacos",
            "Skateboard",
            "Mohawk",
        ),
        suspect(
            "suspect-buggs",
            "Buggs Zapper",
            "buggs_photo",
            "Gray",
            "Blue",
            "Electronics",
            "Ramen",
            "Drone",
            "Thick glasses",
        ),
        suspect(
            "suspect-contessa",
            "Contessa",
            "contessa_photo",
            "Silver",
            "Violet",
            "Fencing",
            "Caviar",
            "Yacht",
            "Diamond necklace",
        ),
        suspect(
            "suspect-wonder",
            "Wonder Rat",
            "wonder_photo",
            "Brown",
            "Black",
            "Tunneling",
            "Cheese",
            "Submarine",
            "Whiskers",
        ),
        suspect(
            "suspect-sarah",
            "Sarah Nade",
            "sarah_photo",
            "Auburn",
            "Green",
            "Singing",
            "Curry",
            "Hot air balloon",
            "Musical laugh",
        ),
        suspect(
            "suspect-robo",
            "Robocrook",
            "robo_photo",
            "None",
            "Red",
            "Programming",
            "Electricity",
            "Jetpack",
            "Metal body",
        ),
    ]
}
