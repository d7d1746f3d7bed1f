// SPDX-License-Identifier: MPL-2.0
//! Achievements of the clan and the constellation they are drawn as.
//!
//! Positions are percentages of the map. The constellation joins consecutive
//! achievements with quadratic curves whose control point sits at the segment
//! midpoint pushed [`CURVE_SAG`] pixels down, so the curves have to be
//! recomputed whenever the map is resized.

/// Vertical offset of a curve's control point below the segment midpoint.
pub const CURVE_SAG: f32 = 30.0;

/// Position of an achievement on the map, in percent of width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    /// Converts to pixels for a map of `width` × `height`.
    #[must_use]
    pub fn to_pixels(self, width: f32, height: f32) -> (f32, f32) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementEvent {
    pub id: u32,
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub position: MapPosition,
}

pub static ACHIEVEMENTS: [AchievementEvent; 8] = [
    AchievementEvent {
        id: 1,
        year: "1147",
        title: "The Founding",
        description: "Lord Aldric united the scattered warriors under one banner, forging the Belmonts clan in the fires of brotherhood.",
        icon: "🏰",
        position: MapPosition { x: 15.0, y: 30.0 },
    },
    AchievementEvent {
        id: 2,
        year: "1203",
        title: "Battle of Shadow's Peak",
        description: "Against impossible odds, the Belmonts held the mountain pass for seven days, earning legendary status.",
        icon: "⚔",
        position: MapPosition { x: 45.0, y: 20.0 },
    },
    AchievementEvent {
        id: 3,
        year: "1289",
        title: "The Great Alliance",
        description: "Formed alliances with three neighboring kingdoms, expanding influence across the northern territories.",
        icon: "🤝",
        position: MapPosition { x: 75.0, y: 35.0 },
    },
    AchievementEvent {
        id: 4,
        year: "1356",
        title: "Library of Lore",
        description: "Established the grand library, preserving ancient knowledge and magical texts for future generations.",
        icon: "📚",
        position: MapPosition { x: 25.0, y: 60.0 },
    },
    AchievementEvent {
        id: 5,
        year: "1442",
        title: "Tournament of Champions",
        description: "Hosted the legendary tournament where warriors from across the realm competed for honor and glory.",
        icon: "🏆",
        position: MapPosition { x: 65.0, y: 55.0 },
    },
    AchievementEvent {
        id: 6,
        year: "1598",
        title: "The Dragon Treaty",
        description: "Negotiated peace with the ancient dragons, securing the skies and establishing mutual respect.",
        icon: "🐉",
        position: MapPosition { x: 50.0, y: 75.0 },
    },
    AchievementEvent {
        id: 7,
        year: "1723",
        title: "Expansion Era",
        description: "Extended clan influence to coastal regions, establishing new strongholds and trade routes.",
        icon: "⛵",
        position: MapPosition { x: 80.0, y: 65.0 },
    },
    AchievementEvent {
        id: 8,
        year: "Present",
        title: "The New Chapter",
        description: "The Belmonts continue to thrive, adapting ancient wisdom to modern challenges while preserving sacred traditions.",
        icon: "✨",
        position: MapPosition { x: 50.0, y: 85.0 },
    },
];

/// A quadratic curve between two consecutive achievements, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub from: (f32, f32),
    pub control: (f32, f32),
    pub to: (f32, f32),
}

/// Curves joining consecutive achievements on a map of `width` × `height`.
#[must_use]
pub fn constellation(events: &[AchievementEvent], width: f32, height: f32) -> Vec<Curve> {
    events
        .windows(2)
        .map(|pair| {
            let from = pair[0].position.to_pixels(width, height);
            let to = pair[1].position.to_pixels(width, height);
            Curve {
                from,
                control: ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0 + CURVE_SAG),
                to,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_percentages() {
        for event in &ACHIEVEMENTS {
            assert!((0.0..=100.0).contains(&event.position.x));
            assert!((0.0..=100.0).contains(&event.position.y));
        }
    }

    #[test]
    fn constellation_joins_consecutive_points() {
        let curves = constellation(&ACHIEVEMENTS, 1000.0, 600.0);
        assert_eq!(curves.len(), ACHIEVEMENTS.len() - 1);
        assert_eq!(curves[0].from, (150.0, 180.0));
        assert_eq!(curves[0].to, (450.0, 120.0));
        for pair in curves.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn control_point_sags_below_midpoint() {
        let curves = constellation(&ACHIEVEMENTS, 1000.0, 600.0);
        let first = curves[0];
        assert_eq!(first.control, (300.0, 150.0 + CURVE_SAG));
    }

    #[test]
    fn constellation_follows_map_size() {
        let small = constellation(&ACHIEVEMENTS, 500.0, 300.0);
        let large = constellation(&ACHIEVEMENTS, 1000.0, 600.0);
        assert_eq!(small[2].from.0 * 2.0, large[2].from.0);
    }

    #[test]
    fn single_event_has_no_curves() {
        assert!(constellation(&ACHIEVEMENTS[..1], 100.0, 100.0).is_empty());
    }
}
