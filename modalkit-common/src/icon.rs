//! Symbolic icon names used in panel content
//!
//! Configs reference icons by Lucide name ("Layers", "DollarSign", ...).
//! Names outside the set resolve to `None` and render nothing.

/// Closed set of icons a panel can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Layers,
    DollarSign,
    Sparkles,
    Rocket,
    LineChart,
    Star,
    ChevronDown,
    ChevronRight,
    ChevronUp,
    Check,
    Zap,
    Shield,
    Users,
    Clock,
    Database,
    Globe,
}

impl IconName {
    pub const ALL: [IconName; 16] = [
        IconName::Layers,
        IconName::DollarSign,
        IconName::Sparkles,
        IconName::Rocket,
        IconName::LineChart,
        IconName::Star,
        IconName::ChevronDown,
        IconName::ChevronRight,
        IconName::ChevronUp,
        IconName::Check,
        IconName::Zap,
        IconName::Shield,
        IconName::Users,
        IconName::Clock,
        IconName::Database,
        IconName::Globe,
    ];

    /// Resolve a configured name. Unknown names are not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Layers => "Layers",
            IconName::DollarSign => "DollarSign",
            IconName::Sparkles => "Sparkles",
            IconName::Rocket => "Rocket",
            IconName::LineChart => "LineChart",
            IconName::Star => "Star",
            IconName::ChevronDown => "ChevronDown",
            IconName::ChevronRight => "ChevronRight",
            IconName::ChevronUp => "ChevronUp",
            IconName::Check => "Check",
            IconName::Zap => "Zap",
            IconName::Shield => "Shield",
            IconName::Users => "Users",
            IconName::Clock => "Clock",
            IconName::Database => "Database",
            IconName::Globe => "Globe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(IconName::from_name("Layers"), Some(IconName::Layers));
        assert_eq!(IconName::from_name("DollarSign"), Some(IconName::DollarSign));
        for icon in IconName::ALL {
            assert_eq!(IconName::from_name(icon.as_str()), Some(icon));
        }
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(IconName::from_name("Unicorn"), None);
        assert_eq!(IconName::from_name(""), None);
        // Lookup is case sensitive, like the icon set it mirrors
        assert_eq!(IconName::from_name("layers"), None);
    }
}
