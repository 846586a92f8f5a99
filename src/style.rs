use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown button variant: {0}")]
    UnknownVariant(String),
    #[error("unknown button size: {0}")]
    UnknownSize(String),
}

/// Visual treatment of a [`Button`](crate::app::ui::Button).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Default,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    pub fn ruleset(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-black text-white hover:opacity-90",
            ButtonVariant::Secondary => "bg-gray-100 text-black hover:bg-gray-200",
            ButtonVariant::Outline => "border text-black hover:bg-gray-50",
            ButtonVariant::Ghost => "text-black hover:bg-gray-50",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "secondary" => Ok(Self::Secondary),
            "outline" => Ok(Self::Outline),
            "ghost" => Ok(Self::Ghost),
            other => Err(StyleError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 2] = [ButtonSize::Sm, ButtonSize::Md];

    pub fn ruleset(self) -> &'static str {
        match self {
            ButtonSize::Sm => "text-sm px-3 py-1.5 rounded-xl",
            ButtonSize::Md => "text-sm px-4 py-2 rounded-2xl",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            other => Err(StyleError::UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Joins a base class list with a caller-supplied one, skipping blanks.
pub fn merge_class(base: &str, extra: &str) -> String {
    [base.trim(), extra.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = format!("{} {}", variant.ruleset(), size.ruleset());
    merge_class(&base, extra)
}

const CARD_BASE: &str = "border rounded-xl bg-white";

pub fn card_class(extra: &str) -> String {
    merge_class(CARD_BASE, extra)
}

/// Entrance transitions used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Hero block, played on mount.
    Hero,
    /// Project cards, played on first viewport entry.
    Card,
}

impl Reveal {
    fn timing(self) -> &'static str {
        match self {
            Reveal::Hero => "transition-all duration-500 ease-out",
            Reveal::Card => "transition-all duration-400 ease-out",
        }
    }

    fn hidden(self) -> &'static str {
        match self {
            Reveal::Hero => "opacity-0 translate-y-2.5",
            Reveal::Card => "opacity-0 translate-y-5",
        }
    }
}

pub fn reveal_class(reveal: Reveal, entered: bool) -> String {
    let state = if entered {
        "opacity-100 translate-y-0"
    } else {
        reveal.hidden()
    };
    merge_class(reveal.timing(), state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_contains_both_rulesets() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let class = button_class(variant, size, "gap-2");
                let tokens = class.split_whitespace().collect::<Vec<_>>();
                for token in variant.ruleset().split_whitespace() {
                    assert!(tokens.contains(&token), "{variant}/{size} missing {token}");
                }
                for token in size.ruleset().split_whitespace() {
                    assert!(tokens.contains(&token), "{variant}/{size} missing {token}");
                }
                assert_eq!(tokens.last(), Some(&"gap-2"));
            }
        }
    }

    #[test]
    fn test_button_class_order() {
        assert_eq!(
            button_class(ButtonVariant::Secondary, ButtonSize::Sm, "gap-1"),
            "bg-gray-100 text-black hover:bg-gray-200 text-sm px-3 py-1.5 rounded-xl gap-1"
        );
        assert_eq!(
            button_class(ButtonVariant::Default, ButtonSize::Md, ""),
            "bg-black text-white hover:opacity-90 text-sm px-4 py-2 rounded-2xl"
        );
    }

    #[test]
    fn test_keywords_parse() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.keyword().parse::<ButtonVariant>(), Ok(variant));
        }
        for size in ButtonSize::ALL {
            assert_eq!(size.keyword().parse::<ButtonSize>(), Ok(size));
        }
    }

    #[test]
    fn test_unknown_keywords_fail() {
        assert_eq!(
            "primary".parse::<ButtonVariant>(),
            Err(StyleError::UnknownVariant("primary".to_string()))
        );
        assert_eq!(
            "lg".parse::<ButtonSize>(),
            Err(StyleError::UnknownSize("lg".to_string()))
        );
        assert_eq!(
            StyleError::UnknownSize("lg".to_string()).to_string(),
            "unknown button size: lg"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn test_merge_class() {
        assert_eq!(merge_class("a b", ""), "a b");
        assert_eq!(merge_class("", "c"), "c");
        assert_eq!(merge_class("a", "  c "), "a c");
        assert_eq!(card_class("rounded-2xl"), "border rounded-xl bg-white rounded-2xl");
        assert_eq!(card_class(""), "border rounded-xl bg-white");
    }

    #[test]
    fn test_reveal_class() {
        let hidden = reveal_class(Reveal::Card, false);
        assert!(hidden.contains("opacity-0"));
        assert!(hidden.contains("translate-y-5"));
        let shown = reveal_class(Reveal::Card, true);
        assert!(shown.contains("opacity-100"));
        assert!(!shown.contains("opacity-0"));
        assert!(reveal_class(Reveal::Hero, false).contains("duration-500"));
    }
}
