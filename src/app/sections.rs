use leptos::*;

use super::nav::{go_to, Section};
use super::portfolio::{
    filter_projects, Achievement, CreativeWork, EducationEntry, PhotographyItem, Profile,
    Project, ProjectFilter,
};
use super::{
    get_achievements, get_creative_works, get_education, get_photography, get_projects,
    get_skills,
};

pub type ProfileResource = Resource<(), Result<Profile, ServerFnError>>;

fn loading() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

#[component]
fn SectionError(errors: RwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="section-error">
            {move || {
                errors
                    .get()
                    .into_iter()
                    .map(|(_, error)| {
                        // show the backend's own message, not the server fn wrapping
                        let message = match error.downcast_ref::<ServerFnErrorErr>() {
                            Some(ServerFnErrorErr::ServerError(message)) => message.clone(),
                            _ => error.to_string(),
                        };
                        view! { <p>{message}</p> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! { <h2 class="section-title">{text}</h2> }
}

#[component]
pub fn HeroSection(profile: ProfileResource, active: RwSignal<Section>) -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="section hero">
            <div class="container">
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || profile.get().map(|result| result.map(|profile| view! {
                            <h1 class="hero-name">{profile.name}</h1>
                            <p class="hero-title">{profile.title}</p>
                            <p class="hero-location">{profile.location}</p>
                        }))}
                    </ErrorBoundary>
                </Suspense>
                <div class="hero-actions">
                    <button class="button primary" on:click=move |_| go_to(Section::Projects, active)>
                        "View Projects"
                    </button>
                    <button class="button outline" on:click=move |_| go_to(Section::Contact, active)>
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(profile: ProfileResource) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section tinted">
            <div class="container narrow">
                <SectionTitle text="About Me"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || profile.get().map(|result| result.map(|profile| view! {
                            <div class="card">
                                <p class="summary">{profile.summary}</p>
                            </div>
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    let education = create_resource(|| (), |_| get_education());

    view! {
        <section id=Section::Education.id() class="section">
            <div class="container narrow">
                <SectionTitle text="Education"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || education.get().map(|result| result.map(|entries| {
                            entries
                                .into_iter()
                                .map(|entry| view! { <EducationCard entry/> })
                                .collect_view()
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    view! {
        <article class="card education-card">
            <div>
                <h3>{entry.institution}</h3>
                <p class="accent">{entry.degree}</p>
                <p class="muted">{entry.duration}</p>
            </div>
            <span class="badge">{entry.grade}</span>
        </article>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let skills = create_resource(|| (), |_| get_skills());

    view! {
        <section id=Section::Skills.id() class="section tinted">
            <div class="container">
                <SectionTitle text="Technical Skills"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || skills.get().map(|result| result.map(|skills| view! {
                            <div class="grid">
                                {skills
                                    .categories()
                                    .into_iter()
                                    .map(|(label, items)| view! {
                                        <article class="card">
                                            <h3>{label}</h3>
                                            <div class="badges">
                                                {items
                                                    .iter()
                                                    .map(|skill| view! { <span class="badge">{skill.clone()}</span> })
                                                    .collect_view()}
                                            </div>
                                        </article>
                                    })
                                    .collect_view()}
                            </div>
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let selected = create_rw_signal(ProjectFilter::All);
    // fetched once; switching the filter only changes what is shown
    let projects = create_resource(|| (), |_| get_projects(None));

    view! {
        <section id=Section::Projects.id() class="section">
            <div class="container">
                <SectionTitle text="Projects"/>
                <div class="filters">
                    {ProjectFilter::options()
                        .map(|filter| {
                            let label = filter.label().to_string();
                            let shown = filter.clone();
                            view! {
                                <button
                                    class="button filter"
                                    class:selected=move || selected.with(|current| *current == shown)
                                    on:click=move |_| selected.set(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Transition fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || projects.get().map(|result| result.map(|projects| view! {
                            <div class="grid">
                                {selected
                                    .with(|filter| filter_projects(&projects, filter))
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project/> })
                                    .collect_view()}
                            </div>
                        }))}
                    </ErrorBoundary>
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        date,
        description,
        image,
        technologies,
        project_type,
        link,
        ..
    } = project;

    view! {
        <article class="card project-card">
            {image.map(|src| view! {
                <div class="project-image">
                    <img src=src alt=title.clone()/>
                </div>
            })}
            <div class="card-meta">
                <span class="badge">{project_type.to_string()}</span>
                <span class="muted">{date}</span>
            </div>
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="badges">
                {technologies
                    .into_iter()
                    .map(|tech| view! { <span class="badge outline">{tech}</span> })
                    .collect_view()}
            </div>
            {link.map(|href| view! {
                <a class="external" href=href target="_blank" rel="noopener noreferrer">
                    "Visit"
                </a>
            })}
        </article>
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let achievements = create_resource(|| (), |_| get_achievements());

    view! {
        <section id=Section::Achievements.id() class="section tinted">
            <div class="container narrow">
                <SectionTitle text="Achievements & Leadership"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || achievements.get().map(|result| result.map(|achievements| {
                            achievements
                                .into_iter()
                                .map(|achievement| view! { <AchievementCard achievement/> })
                                .collect_view()
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <article class="card achievement-card">
            <h3>{achievement.title}</h3>
            <p>{achievement.description}</p>
            <p class="muted">{achievement.date}</p>
        </article>
    }
}

#[component]
pub fn CreativeSection() -> impl IntoView {
    let works = create_resource(|| (), |_| get_creative_works());

    view! {
        <section id=Section::Creative.id() class="section">
            <div class="container narrow">
                <SectionTitle text="Creative Works"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || works.get().map(|result| result.map(|works| {
                            works
                                .into_iter()
                                .map(|work| view! { <CreativeCard work/> })
                                .collect_view()
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn CreativeCard(work: CreativeWork) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let CreativeWork {
        title,
        kind,
        date,
        preview,
        full_content,
        ..
    } = work;

    view! {
        <article class="card creative-card">
            <div class="card-meta">
                <span class="badge">{kind}</span>
                <span class="muted">{date}</span>
            </div>
            <h3>{title}</h3>
            <p class="verse">
                {move || if expanded.get() { full_content.clone() } else { preview.clone() }}
            </p>
            <button class="link-button" on:click=move |_| expanded.update(|open| *open = !*open)>
                {move || if expanded.get() { "Show less" } else { "Read more" }}
            </button>
        </article>
    }
}

#[component]
pub fn PhotographySection() -> impl IntoView {
    let photos = create_resource(|| (), |_| get_photography());

    view! {
        <section id=Section::Photography.id() class="section tinted">
            <div class="container">
                <SectionTitle text="Photography"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || photos.get().map(|result| result.map(|photos| view! {
                            <div class="grid gallery">
                                {photos
                                    .into_iter()
                                    .map(|photo| view! { <PhotoCard photo/> })
                                    .collect_view()}
                            </div>
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn PhotoCard(photo: PhotographyItem) -> impl IntoView {
    view! {
        <figure class="card photo-card">
            <img src=photo.image alt=photo.title.clone() loading="lazy"/>
            <figcaption>
                <h3>{photo.title}</h3>
                <p>{photo.description}</p>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn ContactSection(profile: ProfileResource) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section">
            <div class="container narrow">
                <SectionTitle text="Contact Me"/>
                <Suspense fallback=loading>
                    <ErrorBoundary fallback=|errors| view! { <SectionError errors/> }>
                        {move || profile.get().map(|result| result.map(|profile| view! {
                            <div class="card contact-card">
                                <div>
                                    <h3>"Get In Touch"</h3>
                                    <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                                    <a href=format!("tel:{}", profile.phone)>{profile.phone.clone()}</a>
                                    <span>{profile.location}</span>
                                </div>
                                <div>
                                    <h3>"Connect With Me"</h3>
                                    <a href=profile.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                                    <a href=profile.linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                                    <a href=profile.website target="_blank" rel="noopener noreferrer">"Website"</a>
                                </div>
                            </div>
                        }))}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(profile: ProfileResource) -> impl IntoView {
    let name = move || {
        profile
            .get()
            .and_then(Result::ok)
            .map(|profile| profile.name)
            .unwrap_or_default()
    };

    view! {
        <footer class="footer">
            <p class="muted">{name} " · Built with Rust & Leptos"</p>
        </footer>
    }
}
