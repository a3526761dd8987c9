//! Landing hero: name, typewriter subtitle, stats and calls to action

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{MenuEvent, Typewriter, ViewportEvent};
use folio_ui::{Button, ButtonVariant, Icon, IconButton, LucideIcon};
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::context::{use_config, use_content, use_hover, use_snapshot, use_viewport};
use crate::links::open_external;

/// Redraw period for the typewriter
const TYPE_FRAME: Duration = Duration::from_millis(30);

#[component]
pub fn Hero() -> Element {
    let content = use_content();
    let config = use_config();
    let snapshot = use_snapshot();
    let mut viewport = use_viewport();
    let hover = use_hover();

    let mut typed = use_signal(String::new);
    let phrases = content.hero.phrases.clone();
    let hero_config = config.hero.clone();
    use_future(move || {
        let phrases = phrases.clone();
        let hero_config = hero_config.clone();
        async move {
            let mut writer = Typewriter::new(&phrases, &hero_config);
            let mut ticker = interval(TYPE_FRAME);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last = Instant::now();
            loop {
                ticker.tick().await;
                let now = Instant::now();
                writer.advance(now - last);
                last = now;
                let text = writer.text();
                if *typed.peek() != text {
                    typed.set(text);
                }
            }
        }
    });

    let parallax = use_memo(move || snapshot.read().parallax);
    let [back, front] = parallax();
    let first_section = content.nav.first().map(|entry| entry.section_id.clone());
    let cv_url = content.personal.cv_url.clone();

    rsx! {
        section {
            id: "home",
            class: "hero",
            onmounted: move |evt| viewport.set_top(evt.data()),

            div { class: "hero-parallax",
                div { class: "orb orb-violet", style: "transform: {back.to_css_translate()}" }
                div { class: "orb orb-cyan", style: "transform: {front.to_css_translate()}" }
            }

            div { class: "hero-content",
                p { class: "hero-eyebrow", "Hi, I'm" }
                h1 { class: "hero-name", "{content.personal.name}" }
                p { class: "hero-role", "{content.personal.role}" }
                p { class: "hero-typed",
                    span { class: "hero-lead", "{content.hero.lead}" }
                    span { class: "hero-phrase", "{typed}" }
                    span { class: "caret", "aria-hidden": "true", "|" }
                }
                p { class: "hero-bio", "{content.personal.bio}" }

                div { class: "hero-actions",
                    if let Some(section) = first_section {
                        Button {
                            onclick: move |_| {
                                viewport.send(ViewportEvent::Menu(MenuEvent::Navigate(section.clone())));
                            },
                            onhover: hover,
                            "Explore my work"
                            LucideIcon { icon: Icon::ArrowDown, size: 16 }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| open_external(&cv_url),
                        onhover: hover,
                        LucideIcon { icon: Icon::Download, size: 16 }
                        "Download CV"
                    }
                }

                div { class: "hero-social",
                    for link in content.social.iter() {
                        SocialButton {
                            key: "{link.href}",
                            label: link.label.clone(),
                            href: link.href.clone(),
                            icon: link.icon.clone(),
                        }
                    }
                }

                dl { class: "hero-stats",
                    for stat in content.hero.stats.iter() {
                        div { key: "{stat.label}", class: "stat",
                            dt { class: "stat-value", "{stat.value}" }
                            dd { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialButton(label: String, href: String, icon: String) -> Element {
    let hover = use_hover();
    let glyph = Icon::for_social(&icon).unwrap_or(Icon::ExternalLink);

    rsx! {
        IconButton {
            class: "social-button".to_string(),
            aria_label: label,
            onclick: move |_| open_external(&href),
            onhover: hover,
            LucideIcon { icon: glyph, size: 20 }
        }
    }
}
