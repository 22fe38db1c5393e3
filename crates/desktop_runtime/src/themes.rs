//! Built-in desktop background themes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

const THEMES: [ThemeDescriptor; 6] = [
    ThemeDescriptor {
        id: "aurora",
        label: "Aurora",
        gradient: "linear-gradient(135deg, #70e1f5 0%, #ffd194 100%)",
    },
    ThemeDescriptor {
        id: "flamingo",
        label: "Flamingo",
        gradient: "linear-gradient(135deg,rgb(248, 108, 93) 0%,rgb(252, 170, 203) 100%)",
    },
    ThemeDescriptor {
        id: "skywave",
        label: "Skywave",
        gradient: "linear-gradient(135deg,rgb(140, 187, 245) 0%,rgb(6, 32, 163) 100%)",
    },
    ThemeDescriptor {
        id: "meadow",
        label: "Meadow",
        gradient: "linear-gradient(135deg,rgb(200, 237, 154) 0%,rgb(31, 94, 1) 100%)",
    },
    ThemeDescriptor {
        id: "sunsetglow",
        label: "Sunset Glow",
        gradient: "linear-gradient(135deg,rgb(247, 102, 30) 0%,rgb(255, 208, 0) 100%)",
    },
    ThemeDescriptor {
        id: "deepocean",
        label: "Deep Ocean",
        gradient: "linear-gradient(135deg,rgb(175, 208, 216) 0%,rgb(2, 23, 48) 100%)",
    },
];

pub fn builtin_themes() -> &'static [ThemeDescriptor] {
    &THEMES
}

pub fn theme_by_id(id: &str) -> Option<&'static ThemeDescriptor> {
    THEMES.iter().find(|theme| theme.id == id)
}
