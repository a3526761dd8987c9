//! Lucide line icons
//!
//! Each icon is a list of path strings drawn on a 24x24 stroke canvas.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Menu,
    Close,
    Github,
    Linkedin,
    Mail,
    Copy,
    Check,
    Download,
    ExternalLink,
    ArrowDown,
    MapPin,
    Send,
    Loader,
}

impl Icon {
    /// Icon for a social link key as used in the content feed
    pub fn for_social(key: &str) -> Option<Self> {
        match key {
            "github" => Some(Icon::Github),
            "linkedin" => Some(Icon::Linkedin),
            "mail" | "email" => Some(Icon::Mail),
            _ => None,
        }
    }

    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Copy => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            Icon::Check => &["M20 6 9 17l-5-5"],
            Icon::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Icon::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
        }
    }
}

#[component]
pub fn LucideIcon(
    icon: Icon,
    #[props(default = 18)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths() {
                path { d: *d }
            }
        }
    }
}
