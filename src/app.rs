use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{
    ClipboardBackend, ClipboardCopier, ContactForm, ContentFeed, MenuEvent, Point, SectionId,
    SimulatedSubmitter, ViewportController, ViewportEvent, ViewportSize, WithTimeout,
};
use futures::StreamExt;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::clipboard::{run_selection_copies, SelectionRequest, SystemClipboard, WebviewSelection};
use crate::components::{
    AboutSection, ContactSection, CursorOverlay, ExperienceSection, Footer, Hero, Navbar,
    PageSection, ProjectsSection, TechSection,
};
use crate::context::Viewport;
use crate::theme::GLOBAL_STYLES;

/// Frame period while springs are moving
const FRAME: Duration = Duration::from_millis(16);

/// Root application component.
///
/// Takes ownership of the viewport controller built at startup and hands
/// it to the page shell.
#[component]
pub fn App() -> Element {
    let ready = use_hook(|| {
        let startup = crate::startup()?;
        let controller = startup.take_controller()?;
        Some((Signal::new(controller), Arc::new(startup.content.clone())))
    });

    match ready {
        Some((controller, content)) => rsx! {
            style { {GLOBAL_STYLES} }
            Shell { controller, content }
        },
        None => rsx! {
            style { {GLOBAL_STYLES} }
            p { class: "fatal", "Folio was launched without a viewport controller." }
        },
    }
}

/// Page shell.
///
/// Provides the shared context, forwards window input to the controller
/// and runs the animation frame loop.
#[component]
fn Shell(controller: Signal<ViewportController>, content: Arc<ContentFeed>) -> Element {
    let snapshot = use_signal(|| controller.peek().snapshot());
    use_context_provider(|| snapshot);

    let frames = use_coroutine(move |mut rx: UnboundedReceiver<Viewport>| async move {
        while let Some(viewport) = rx.next().await {
            run_frames(viewport).await;
            // Requests queued while animating are already satisfied
            while let Ok(Some(_)) = rx.try_next() {}
        }
    });
    let mut viewport = use_context_provider(|| Viewport::new(controller, snapshot, frames));

    let config = use_context_provider(|| Arc::new(controller.peek().config().clone()));
    use_context_provider(|| content.clone());
    let selection = use_coroutine(|rx: UnboundedReceiver<SelectionRequest>| run_selection_copies(rx));
    use_context_provider(|| {
        let primary = SystemClipboard::open().map(|c| Box::new(c) as Box<dyn ClipboardBackend>);
        Arc::new(ClipboardCopier::new(
            primary,
            Box::new(WebviewSelection::new(selection.tx())),
            config.contact.copy_feedback(),
        ))
    });
    use_context_provider(|| {
        let submitter = WithTimeout::new(
            SimulatedSubmitter::new(config.contact.simulated_delay()),
            config.contact.submit_timeout(),
        );
        Arc::new(ContactForm::new(Arc::new(submitter), config.contact.sent_hold()))
    });

    let locked = use_memo(move || snapshot.read().scroll_locked);
    let mut root_class = String::from("page");
    if locked() {
        root_class.push_str(" scroll-locked");
    }
    if config.pointer.enabled {
        root_class.push_str(" custom-cursor");
    }

    rsx! {
        div {
            class: "{root_class}",
            tabindex: "0",
            onmounted: move |evt| {
                let element = evt.data();
                viewport.set_root(element.clone());
                spawn(async move {
                    let _ = element.set_focus(true).await;
                    viewport.measure_viewport().await;
                    viewport.measure_scroll().await;
                });
            },
            onresize: move |evt| {
                if let Ok(size) = evt.get_content_box_size() {
                    if let Some(size) = ViewportSize::new(size.width, size.height) {
                        viewport.send(ViewportEvent::Resize(size));
                        spawn(viewport.measure_scroll());
                    }
                }
            },
            onscroll: move |_| {
                spawn(viewport.measure_scroll());
            },
            onmousemove: move |evt| {
                let p = evt.client_coordinates();
                viewport.send(ViewportEvent::PointerMove(Point::new(p.x, p.y)));
            },
            onmouseenter: move |_| viewport.send(ViewportEvent::PointerEnter),
            onmouseleave: move |_| viewport.send(ViewportEvent::PointerLeave),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    viewport.send(ViewportEvent::Menu(MenuEvent::Escape));
                }
            },

            Navbar {}
            main { class: "page-main",
                Hero {}
                for (i, entry) in content.nav.iter().enumerate() {
                    PageSection { key: "{entry.section_id}", id: entry.section_id.clone(),
                        {section_body(&entry.section_id, i + 1)}
                    }
                }
            }
            Footer {}
            if config.pointer.enabled {
                CursorOverlay {}
            }
        }
    }
}

/// Component for a navigation section
fn section_body(id: &SectionId, index: usize) -> Element {
    match id.as_str() {
        "about" => rsx! { AboutSection { index } },
        "tech" => rsx! { TechSection { index } },
        "experience" => rsx! { ExperienceSection { index } },
        "projects" => rsx! { ProjectsSection { index } },
        "contact" => rsx! { ContactSection { index } },
        other => {
            tracing::debug!(section = other, "No renderer for section");
            rsx! {}
        }
    }
}

/// Step the controller at display rate until every spring has settled
async fn run_frames(mut viewport: Viewport) {
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = Instant::now();
    loop {
        ticker.tick().await;
        let now = Instant::now();
        let animating = viewport.tick(now - last);
        last = now;
        if !animating {
            break;
        }
    }
}
