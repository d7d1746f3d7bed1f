// SPDX-License-Identifier: MPL-2.0
//! The fellowship roster shown in the members grid.

/// Portrait artwork used on a member card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portrait {
    Knight,
    Lady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClanMember {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub portrait: Portrait,
}

pub static ROSTER: [ClanMember; 8] = [
    ClanMember {
        id: 1,
        name: "Phillip Dafoe",
        country: "United Kingdom",
        title: "The Swordmaster",
        role: "Warrior",
        description: "Master of the blade, sworn protector of the Belmont legacy.",
        portrait: Portrait::Knight,
    },
    ClanMember {
        id: 2,
        name: "Lady Seraphine",
        country: "United Kingdom",
        title: "The Enchantress",
        role: "Mage",
        description: "Wielder of ancient magic, keeper of mystical secrets.",
        portrait: Portrait::Lady,
    },
    ClanMember {
        id: 3,
        name: "Rafe Whitmore",
        country: "United Kingdom",
        title: "The Shadow",
        role: "Assassin",
        description: "Silent as death, swift as shadow, loyal to the end.",
        portrait: Portrait::Knight,
    },
    ClanMember {
        id: 4,
        name: "Lady Morgaine",
        country: "United Kingdom",
        title: "The Tempest",
        role: "Ranger",
        description: "Fury of nature, protector of the wild lands.",
        portrait: Portrait::Lady,
    },
    ClanMember {
        id: 5,
        name: "Lord Aldric",
        country: "Kingdom of Belmonts",
        title: "The Strategist",
        role: "General",
        description: "Architect of victory, mind sharper than any blade.",
        portrait: Portrait::Knight,
    },
    ClanMember {
        id: 6,
        name: "Sir Gareth",
        country: "Kingdom of Belmonts",
        title: "The Vanguard",
        role: "Knight",
        description: "First into battle, last to retreat, honor unshakeable.",
        portrait: Portrait::Knight,
    },
    ClanMember {
        id: 7,
        name: "Lady Elara",
        country: "Kingdom of Belmonts",
        title: "The Sage",
        role: "Healer",
        description: "Wisdom of ages flows through her healing touch.",
        portrait: Portrait::Lady,
    },
    ClanMember {
        id: 8,
        name: "Theron",
        country: "Kingdom of Belmonts",
        title: "The Hawkeye",
        role: "Scout",
        description: "Eyes that pierce through darkness, never misses a mark.",
        portrait: Portrait::Knight,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_are_sequential() {
        for (index, member) in ROSTER.iter().enumerate() {
            assert_eq!(member.id as usize, index + 1);
        }
    }

    #[test]
    fn ladies_use_lady_portrait() {
        for member in ROSTER.iter().filter(|m| m.name.starts_with("Lady")) {
            assert_eq!(member.portrait, Portrait::Lady);
        }
    }
}
