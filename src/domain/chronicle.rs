// SPDX-License-Identifier: MPL-2.0
//! Manuscript text of the parchment scroll in the About section.

/// How a line is set on the parchment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Body,
    Quote,
    Signature,
}

/// One line of the manuscript, inked character by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManuscriptLine {
    pub text: &'static str,
    pub style: LineStyle,
    /// Whether an ink divider (⚜) follows this line.
    pub divider_after: bool,
}

pub static MANUSCRIPT: [ManuscriptLine; 7] = [
    ManuscriptLine {
        text: "The Kingdom of Belmonts",
        style: LineStyle::Title,
        divider_after: false,
    },
    ManuscriptLine {
        text: "In the ancient lands where shadows dance with flame, the Belmonts rose from the ashes of forgotten kingdoms.",
        style: LineStyle::Body,
        divider_after: false,
    },
    ManuscriptLine {
        text: "Forged in the crucible of legendary battles, bound by sacred oaths that transcend mortal understanding.",
        style: LineStyle::Body,
        divider_after: true,
    },
    ManuscriptLine {
        text: "Through centuries of conquest and alliance, our banners have flown across countless battlefields.",
        style: LineStyle::Body,
        divider_after: false,
    },
    ManuscriptLine {
        text: "We are strategists and warriors, scholars and rogues, united by an unbreakable code of honor.",
        style: LineStyle::Body,
        divider_after: true,
    },
    ManuscriptLine {
        text: "\"In unity, we find strength. In honor, we find purpose. In legacy, we find immortality.\"",
        style: LineStyle::Quote,
        divider_after: false,
    },
    ManuscriptLine {
        text: "— The Belmont Creed",
        style: LineStyle::Signature,
        divider_after: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manuscript_opens_with_title_and_closes_with_signature() {
        assert_eq!(MANUSCRIPT[0].style, LineStyle::Title);
        assert_eq!(MANUSCRIPT[MANUSCRIPT.len() - 1].style, LineStyle::Signature);
    }

    #[test]
    fn two_dividers() {
        assert_eq!(MANUSCRIPT.iter().filter(|l| l.divider_after).count(), 2);
    }
}
