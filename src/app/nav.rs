use leptos::*;
use leptos_use::use_window_scroll;

/// Page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Education,
    Skills,
    Projects,
    Achievements,
    Creative,
    Photography,
    Contact,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Creative,
        Section::Photography,
        Section::Contact,
    ];

    /// DOM id of the section's anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Creative => "creative",
            Section::Photography => "photography",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Creative => "Creative Works",
            Section::Photography => "Photography",
            Section::Contact => "Contact",
        }
    }
}

/// Scrolls the section into view and marks it active. Smoothness comes
/// from the stylesheet's `scroll-behavior`.
pub fn go_to(section: Section, active: RwSignal<Section>) {
    if let Some(element) = document().get_element_by_id(section.id()) {
        element.scroll_into_view();
        active.set(section);
    }
}

#[component]
pub fn NavBar(active: RwSignal<Section>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <nav class="nav" class:scrolled=move || { scroll_y.get() > 16.0 }>
            <div class="container nav-inner">
                <span class="brand">"Portfolio"</span>
                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! {
                            <button
                                class="nav-link"
                                class:active=move || active.get() == section
                                on:click=move |_| go_to(section, active)
                            >
                                {section.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
